use crate::chain::Point;
use crate::float_trait::Float;

use serde::{Deserialize, Serialize};

/// Construction parameters of [crate::Circles]
///
/// # Examples
///
/// ```
/// use epicycles::{CirclesConfig, Point};
///
/// let mut config = CirclesConfig::<f64>::default();
/// config.set_harmonic_count(100).set_origin(Point::new(0.0, 200.0));
/// assert_eq!(100, config.harmonic_count());
/// assert_eq!(0, config.time_index_initial());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CirclesConfig<T> {
    harmonic_count: usize,
    time_index_initial: usize,
    origin: Point<T>,
}

impl<T> CirclesConfig<T>
where
    T: Float,
{
    pub fn new(harmonic_count: usize) -> Self {
        Self {
            harmonic_count,
            time_index_initial: Self::default_time_index_initial(),
            origin: Self::default_origin(),
        }
    }

    #[inline]
    pub fn default_harmonic_count() -> usize {
        20
    }

    #[inline]
    pub fn default_time_index_initial() -> usize {
        0
    }

    #[inline]
    pub fn default_origin() -> Point<T> {
        Point::zero()
    }

    /// Set number of circles to keep track of
    pub fn set_harmonic_count(&mut self, harmonic_count: usize) -> &mut Self {
        self.harmonic_count = harmonic_count;
        self
    }

    /// Set sample index of the time axis to start from
    pub fn set_time_index_initial(&mut self, time_index_initial: usize) -> &mut Self {
        self.time_index_initial = time_index_initial;
        self
    }

    /// Set center of the first circle
    pub fn set_origin(&mut self, origin: Point<T>) -> &mut Self {
        self.origin = origin;
        self
    }

    pub fn harmonic_count(&self) -> usize {
        self.harmonic_count
    }

    pub fn time_index_initial(&self) -> usize {
        self.time_index_initial
    }

    pub fn origin(&self) -> Point<T> {
        self.origin
    }
}

impl<T> Default for CirclesConfig<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new(Self::default_harmonic_count())
    }
}
