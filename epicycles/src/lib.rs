#![doc = include_str!("../README.md")]

mod chain;
pub use chain::{epicycle_chain, EpicycleChain, Point};

mod circles;
pub use circles::{CirclePositions, Circles};

mod config;
pub use config::CirclesConfig;

mod error;
pub use error::{ConfigurationError, FourierSeriesError, StepError};

mod float_trait;
pub use float_trait::Float;

mod frames;
pub use frames::Frames;

pub mod prelude;

pub mod rotation;
pub use rotation::{MultipleAngles, Rotation};

mod source;
pub use source::{FourierSeries, FourierSource};
