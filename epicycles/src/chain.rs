use crate::error::ConfigurationError;
use crate::float_trait::Float;
use crate::rotation::{MultipleAngles, Rotation};
use crate::source::FourierSource;

use serde::{Deserialize, Serialize};

/// Point on the drawing plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Float> Default for Point<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Chain of epicycles at some moment of time
///
/// `centers_x` and `centers_y` have one element more than `radii`: the first center is the
/// origin of the chain, the last one is the tip of the last rotating vector, i.e. the terminal
/// point. Coordinates are not calibrated, see [crate::Circles] for the calibrated chain
#[derive(Clone, Debug, PartialEq)]
pub struct EpicycleChain<T> {
    pub radii: Vec<T>,
    pub centers_x: Vec<T>,
    pub centers_y: Vec<T>,
}

impl<T: Float> EpicycleChain<T> {
    pub fn terminal(&self) -> Point<T> {
        // Both vectors hold at least the origin
        Point::new(
            self.centers_x[self.centers_x.len() - 1],
            self.centers_y[self.centers_y.len() - 1],
        )
    }
}

/// Coefficients of the first harmonics, prepared for repeated chain evaluation
#[derive(Clone, Debug)]
pub(crate) struct Harmonics<T> {
    angular_freq: T,
    radii: Vec<T>,
    phases: Vec<Rotation<T>>,
}

impl<T: Float> Harmonics<T> {
    pub(crate) fn from_source<S>(source: &S, count: usize) -> Result<Self, ConfigurationError>
    where
        S: FourierSource<T> + ?Sized,
    {
        let available = source.harmonic_count();
        if count > available {
            return Err(ConfigurationError::TooManyHarmonics {
                requested: count,
                available,
            });
        }
        let provided = usize::min(source.amplitudes().len(), source.phases().len());
        if provided < available {
            return Err(ConfigurationError::ShortSource {
                declared: available,
                provided,
            });
        }
        Ok(Self {
            angular_freq: T::turn() / source.period(),
            radii: source.amplitudes()[..count]
                .iter()
                .map(|&a| T::two() * a)
                .collect(),
            phases: source.phases()[..count]
                .iter()
                .map(|&z| Rotation::new(z))
                .collect(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.radii.len()
    }

    /// Sums rotating vectors tip-to-tail
    ///
    /// Harmonic $k$ rotates by $\theta_k = 2\pi k t / \mathrm{period} + \varphi_k$, so its
    /// vector is $2 a_k (\cos\theta_k, \sin\theta_k)$
    pub(crate) fn chain(&self, t: T, origin: Point<T>) -> EpicycleChain<T> {
        let mut centers_x = Vec::with_capacity(self.len() + 1);
        let mut centers_y = Vec::with_capacity(self.len() + 1);
        let (mut x, mut y) = (origin.x, origin.y);
        centers_x.push(x);
        centers_y.push(y);
        let rotations = MultipleAngles::new(self.angular_freq * t);
        let harmonics = self.radii.iter().zip(self.phases.iter()).zip(rotations);
        for ((&radius, &phase), rotation) in harmonics {
            let theta = rotation.then(phase);
            x += radius * theta.cos;
            y += radius * theta.sin;
            centers_x.push(x);
            centers_y.push(y);
        }
        EpicycleChain {
            radii: self.radii.clone(),
            centers_x,
            centers_y,
        }
    }
}

/// Uncalibrated chain of the first `harmonic_count` epicycles at arbitrary time `t`
///
/// # Examples
///
/// ```
/// use epicycles::{epicycle_chain, FourierSeries, Point};
///
/// let series = FourierSeries::new(
///     std::f64::consts::PI * 2.0,
///     vec![1.0],
///     vec![0.0],
///     vec![0.0],
///     vec![0.0],
///     vec![0.0],
///     0.0,
/// )
/// .unwrap();
/// let chain = epicycle_chain(&series, 0.0, 1, Point::new(1.0, 1.0)).unwrap();
/// assert_eq!(vec![2.0], chain.radii);
/// assert_eq!(Point::new(3.0, 1.0), chain.terminal());
/// ```
pub fn epicycle_chain<T, S>(
    source: &S,
    t: T,
    harmonic_count: usize,
    origin: Point<T>,
) -> Result<EpicycleChain<T>, ConfigurationError>
where
    T: Float,
    S: FourierSource<T> + ?Sized,
{
    Ok(Harmonics::from_source(source, harmonic_count)?.chain(t, origin))
}
