use std::fmt::Debug;

use num_traits::float::Float;

/// Checks if two floats differ less than absolute tolerance
///
/// # Examples
///
/// ```
/// use epicycles_common::close;
///
/// assert!(close(1.0, 1.0 + 1e-9, 1e-6));
/// assert!(!close(1.0, f64::NAN, 1e-6));
/// ```
pub fn close<T: Float>(actual: T, desired: T, tol: T) -> bool {
    (actual - desired).abs() < tol
}

/// Panics if two float slices are not close with respect to some absolute tolerance
///
/// Panic message names the first index where slices diverge
///
/// # Examples
///
/// ```
/// use epicycles_common::all_close;
///
/// all_close(&[0.0, 2.0], &[0.0001, 1.9998], 1e-2);
/// ```
///
/// ```should_panic
/// use epicycles_common::all_close;
///
/// all_close(&[0.0], &[0.0, 2.0], 1e-6);
/// ```
///
/// ```should_panic
/// use epicycles_common::all_close;
///
/// all_close(&[1e-3, 2.0], &[0.0, 2.0], 1e-4);
/// ```
pub fn all_close<T>(actual: &[T], desired: &[T], tol: T)
where
    T: Float + Debug,
{
    assert_eq!(
        actual.len(),
        desired.len(),
        "Slices have different lengths:\n{:?}\n{:?}\n",
        actual,
        desired
    );
    let first_far = actual
        .iter()
        .zip(desired.iter())
        .position(|(&x, &y)| !close(x, y, tol));
    if let Some(i) = first_far {
        panic!(
            "Slices are not close at index {} ({:?} != {:?}):\n{:?}\n{:?}\n",
            i, actual[i], desired[i], actual, desired
        );
    }
}
