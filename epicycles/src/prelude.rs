pub use crate::chain::Point;
pub use crate::circles::{CirclePositions, Circles};
pub use crate::config::CirclesConfig;
pub use crate::error::{ConfigurationError, StepError};
pub use crate::float_trait::Float;
pub use crate::source::{FourierSeries, FourierSource};
