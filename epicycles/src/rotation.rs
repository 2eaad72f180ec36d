//! Rotations by multiples of an angle

use crate::float_trait::Float;

/// Unit vector $(\cos\theta, \sin\theta)$ representing rotation by $\theta$
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation<T> {
    pub cos: T,
    pub sin: T,
}

impl<T: Float> Rotation<T> {
    pub fn new(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }

    pub fn identity() -> Self {
        Self {
            cos: T::one(),
            sin: T::zero(),
        }
    }

    /// Rotation by the sum of both angles
    #[inline]
    pub fn then(self, other: Self) -> Self {
        Self {
            cos: self.cos * other.cos - self.sin * other.sin,
            sin: self.sin * other.cos + self.cos * other.sin,
        }
    }
}

/// Iterator over rotations by $x, 2x, 3x, \dots$
///
/// Only the first rotation calls trigonometric functions, the next ones are products of the
/// previous one and the first. Item $k$ rotates harmonic $k$ of a series with angular
/// frequency $x$
pub struct MultipleAngles<T> {
    step: Rotation<T>,
    current: Rotation<T>,
}

impl<T: Float> MultipleAngles<T> {
    pub fn new(x: T) -> Self {
        Self {
            step: Rotation::new(x),
            current: Rotation::identity(),
        }
    }
}

impl<T: Float> Iterator for MultipleAngles<T> {
    type Item = Rotation<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current.then(self.step);
        Some(self.current)
    }
}
