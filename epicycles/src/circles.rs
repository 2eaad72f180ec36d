use crate::chain::{Harmonics, Point};
use crate::config::CirclesConfig;
use crate::error::{ConfigurationError, StepError};
use crate::float_trait::Float;
use crate::frames::Frames;
use crate::source::FourierSource;

/// Radii and calibrated centers of the circles at the current cursor time
///
/// Every center vector has one element more than `radii`: the first center is the origin of the
/// chain and the last one coincides with the terminal point
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePositions<T> {
    pub radii: Vec<T>,
    pub centers_x: Vec<T>,
    pub centers_y: Vec<T>,
    pub terminal_x: T,
    pub terminal_y: T,
}

impl<T: Float> CirclePositions<T> {
    /// Swap axes and negate the new first one
    ///
    /// Used when the chain draws the axis plotted on a frame rotated by a right angle
    pub fn transposed(self) -> Self {
        Self {
            radii: self.radii,
            centers_x: self.centers_y.into_iter().map(|y| -y).collect(),
            centers_y: self.centers_x,
            terminal_x: -self.terminal_y,
            terminal_y: self.terminal_x,
        }
    }

    /// Tip of the last rotating vector, the last element of both center vectors
    pub fn terminal(&self) -> Point<T> {
        Point::new(self.terminal_x, self.terminal_y)
    }
}

/// Epicycles of a single coordinate of a planar curve
///
/// [Circles] tracks radii and centers of the circles implied by the Fourier decomposition of one
/// coordinate, say $x(t)$, of a closed curve. The chain of $n$ rotating vectors with lengths
/// $2 a_k$ and angles $2\pi k t / P + \varphi_k$ sums to the truncated series at time $t$.
///
/// The cursor moves along the time axis of the [FourierSource] with [Circles::step]. The first
/// coordinate of every chain is shifted so that the terminal point at $t = 0$ lands on
/// [FourierSource::origin_offset]; the shift is computed once on construction.
///
/// Draw the curve with one instance per coordinate sharing the same source type, e.g. `x` chain
/// as is and `y` chain with `transpose = true`.
///
/// # Examples
///
/// ```
/// use epicycles::{Circles, FourierSeries};
///
/// let series = FourierSeries::new(
///     10.0,
///     vec![1.0, 0.0],
///     vec![0.0, 0.0],
///     (0..10).map(f64::from).collect(),
///     vec![0.0; 10],
///     vec![0.0; 10],
///     0.0,
/// )
/// .unwrap();
/// let mut circles = Circles::new(&series, 1).unwrap();
/// let positions = circles.circle_positions(false);
/// assert_eq!(vec![2.0], positions.radii);
/// assert_eq!(0.0, positions.terminal_x);
/// assert_eq!(Ok(1), circles.step(1));
/// ```
#[derive(Clone, Debug)]
pub struct Circles<'s, T, S>
where
    T: Float,
    S: FourierSource<T> + ?Sized,
{
    source: &'s S,
    harmonics: Harmonics<T>,
    origin: Point<T>,
    time_index_initial: usize,
    time_initial: T,
    time_cursor: T,
    time_index_cursor: usize,
    steps_taken: usize,
    true_value: T,
    approx_value: T,
    calibration_offset: T,
    trace_history: Vec<Point<T>>,
}

impl<'s, T, S> Circles<'s, T, S>
where
    T: Float,
    S: FourierSource<T> + ?Sized,
{
    /// New [Circles] with given number of circles and default [CirclesConfig]
    pub fn new(source: &'s S, harmonic_count: usize) -> Result<Self, ConfigurationError> {
        Self::from_config(source, &CirclesConfig::new(harmonic_count))
    }

    pub fn from_config(
        source: &'s S,
        config: &CirclesConfig<T>,
    ) -> Result<Self, ConfigurationError> {
        let harmonics = Harmonics::from_source(source, config.harmonic_count())?;

        let t_vals = source.t_vals();
        let index = config.time_index_initial();
        if index >= t_vals.len() {
            return Err(ConfigurationError::TimeIndexOutOfRange {
                index,
                len: t_vals.len(),
            });
        }
        let samples = [
            ("fxn_vals", source.fxn_vals().len()),
            ("fourier_approximation", source.fourier_approximation().len()),
        ];
        for &(what, actual) in samples.iter() {
            if actual < t_vals.len() {
                return Err(ConfigurationError::ShortSamples {
                    what,
                    actual,
                    expected: t_vals.len(),
                });
            }
        }

        let origin = config.origin();
        let calibration_offset = harmonics.chain(T::zero(), origin).terminal().x;
        log::debug!(
            "{} circles from origin ({}, {}) calibrated by {:e}",
            harmonics.len(),
            origin.x,
            origin.y,
            calibration_offset,
        );

        Ok(Self {
            source,
            harmonics,
            origin,
            time_index_initial: index,
            time_initial: t_vals[index],
            time_cursor: t_vals[index],
            time_index_cursor: index,
            steps_taken: 0,
            true_value: source.fxn_vals()[index],
            approx_value: source.fourier_approximation()[index],
            calibration_offset,
            trace_history: vec![],
        })
    }

    /// Radii and centers of the circles at the current cursor time
    ///
    /// The first coordinate of centers and of the terminal point is calibrated: the calibration
    /// offset is subtracted and [FourierSource::origin_offset] is added. With `transpose` the
    /// result is [CirclePositions::transposed].
    ///
    /// Every call appends the terminal point in non-transposed coordinates to the trace history
    pub fn circle_positions(&mut self, transpose: bool) -> CirclePositions<T> {
        let chain = self.harmonics.chain(self.time_cursor, self.origin);
        let origin_offset = self.source.origin_offset();
        let calibration_offset = self.calibration_offset;
        let calibrate = |x: T| x - calibration_offset + origin_offset;

        let terminal = chain.terminal();
        let terminal = Point::new(calibrate(terminal.x), terminal.y);
        self.trace_history.push(terminal);

        let positions = CirclePositions {
            radii: chain.radii,
            centers_x: chain.centers_x.into_iter().map(calibrate).collect(),
            centers_y: chain.centers_y,
            terminal_x: terminal.x,
            terminal_y: terminal.y,
        };
        if transpose {
            positions.transposed()
        } else {
            positions
        }
    }

    /// Alias to [Circles::circle_positions]
    pub fn get_circles(&mut self, transpose: bool) -> CirclePositions<T> {
        self.circle_positions(transpose)
    }

    /// Advance the cursor, `dt` sample indices per step
    ///
    /// The target index is recomputed from the counters as `dt * steps_taken`, i.e. `dt` times the
    /// total number of steps including this one, whatever the initial index is. A rejected step
    /// leaves no trace. Returns the new cursor index, or [StepError::BoundaryReached] with the
    /// state unchanged when the target is beyond the time axis
    pub fn step(&mut self, dt: usize) -> Result<usize, StepError> {
        if dt == 0 {
            return Err(StepError::ZeroStride);
        }
        let last = self.source.t_vals().len() - 1;
        let steps_taken = self.steps_taken + 1;
        let requested = dt.checked_mul(steps_taken);
        match requested {
            Some(index) if index <= last => {
                self.steps_taken = steps_taken;
                self.move_cursor(index);
                Ok(index)
            }
            _ => {
                let requested = requested.unwrap_or(usize::MAX);
                log::debug!(
                    "max t-value reached: index {} requested, last index is {}",
                    requested,
                    last
                );
                Err(StepError::BoundaryReached { requested, last })
            }
        }
    }

    fn move_cursor(&mut self, index: usize) {
        self.time_cursor = self.source.t_vals()[index];
        self.time_index_cursor = index;
        self.true_value = self.source.fxn_vals()[index];
        self.approx_value = self.source.fourier_approximation()[index];
    }

    /// Iterator over positions at the cursor time, it steps by `dt` after each item
    ///
    /// The last item is the one after which [Circles::step] fails
    pub fn frames(&mut self, dt: usize, transpose: bool) -> Frames<'_, 's, T, S> {
        Frames::new(self, dt, transpose)
    }

    pub fn source(&self) -> &'s S {
        self.source
    }

    pub fn harmonic_count(&self) -> usize {
        self.harmonics.len()
    }

    pub fn origin(&self) -> Point<T> {
        self.origin
    }

    pub fn time_index_initial(&self) -> usize {
        self.time_index_initial
    }

    pub fn time_cursor(&self) -> T {
        self.time_cursor
    }

    pub fn time_index_cursor(&self) -> usize {
        self.time_index_cursor
    }

    /// Time passed since the initial cursor position
    pub fn time_elapsed(&self) -> T {
        self.time_cursor - self.time_initial
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// True function value at the cursor
    pub fn true_value(&self) -> T {
        self.true_value
    }

    /// Fourier approximation value at the cursor
    pub fn approx_value(&self) -> T {
        self.approx_value
    }

    /// Uncalibrated first coordinate of the terminal point at $t = 0$
    pub fn calibration_offset(&self) -> T {
        self.calibration_offset
    }

    /// Terminal points of all [Circles::circle_positions] calls so far
    pub fn trace_history(&self) -> &[Point<T>] {
        &self.trace_history
    }
}
