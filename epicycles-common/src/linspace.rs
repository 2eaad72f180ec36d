use conv::prelude::*;
use num_traits::float::Float;

/// Creates uniform distributed values including both ends
///
/// # Examples
///
/// ```
/// use epicycles_common::linspace;
///
/// let a = linspace(0.0, 1.0, 3);
///
/// assert_eq!(0.0, a[0]);
/// assert_eq!(0.5, a[1]);
/// assert_eq!(1.0, a[2]);
/// ```
pub fn linspace<T>(start: T, end: T, size: usize) -> Vec<T>
where
    T: Float + ValueFrom<usize>,
{
    match size {
        0 => vec![],
        1 => vec![start],
        _ => {
            let intervals: T = (size - 1).value_as::<T>().unwrap();
            let step = (end - start) / intervals;
            (0..size)
                .map(|i| start + step * i.value_as::<T>().unwrap())
                .collect()
        }
    }
}

/// Creates `size` uniform samples over one period starting at `start`
///
/// The right end `start + period` is excluded, because for a periodic curve it repeats `start`
///
/// # Examples
///
/// ```
/// use epicycles_common::periodic_grid;
///
/// assert_eq!(vec![0.0, 2.5, 5.0, 7.5], periodic_grid(0.0, 10.0, 4));
/// ```
pub fn periodic_grid<T>(start: T, period: T, size: usize) -> Vec<T>
where
    T: Float + ValueFrom<usize>,
{
    let mut grid = linspace(start, start + period, size + 1);
    grid.pop();
    grid
}
