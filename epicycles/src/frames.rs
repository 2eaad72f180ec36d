use crate::circles::{CirclePositions, Circles};
use crate::float_trait::Float;
use crate::source::FourierSource;

/// Iterator returned by [Circles::frames]
pub struct Frames<'c, 's, T, S>
where
    T: Float,
    S: FourierSource<T> + ?Sized,
{
    circles: &'c mut Circles<'s, T, S>,
    dt: usize,
    transpose: bool,
    finished: bool,
}

impl<'c, 's, T, S> Frames<'c, 's, T, S>
where
    T: Float,
    S: FourierSource<T> + ?Sized,
{
    pub(crate) fn new(circles: &'c mut Circles<'s, T, S>, dt: usize, transpose: bool) -> Self {
        Self {
            circles,
            dt,
            transpose,
            finished: false,
        }
    }
}

impl<'c, 's, T, S> Iterator for Frames<'c, 's, T, S>
where
    T: Float,
    S: FourierSource<T> + ?Sized,
{
    type Item = CirclePositions<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let positions = self.circles.circle_positions(self.transpose);
        self.finished = self.circles.step(self.dt).is_err();
        Some(positions)
    }
}
