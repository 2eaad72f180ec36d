use num_traits::{float::Float as NumFloat, float::FloatConst};
use std::cmp::PartialOrd;
use std::fmt::{Debug, Display, LowerExp};
use std::ops::AddAssign;

pub trait Float:
    'static
    + NumFloat
    + FloatConst
    + PartialOrd
    + Clone
    + Copy
    + Send
    + Sync
    + AddAssign
    + Display
    + Debug
    + LowerExp
{
    fn two() -> Self;

    /// Full turn, $2\pi$
    #[inline]
    fn turn() -> Self {
        Self::two() * Self::PI()
    }
}

impl Float for f32 {
    #[inline]
    fn two() -> Self {
        2.0
    }
}

impl Float for f64 {
    #[inline]
    fn two() -> Self {
        2.0
    }
}
