#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigurationError {
    #[error("requested {requested} circles, but the Fourier series has only {available} harmonics")]
    TooManyHarmonics { requested: usize, available: usize },

    #[error("initial time index {index} is out of the time axis of length {len}")]
    TimeIndexOutOfRange { index: usize, len: usize },

    #[error("Fourier series declares {declared} harmonics, but provides only {provided} coefficients")]
    ShortSource { declared: usize, provided: usize },

    #[error("{what} has {actual} samples, but the time axis has {expected}")]
    ShortSamples {
        what: &'static str,
        actual: usize,
        expected: usize,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StepError {
    #[error("max t-value reached: time index {requested} is beyond the last index {last}")]
    BoundaryReached { requested: usize, last: usize },

    #[error("step stride must be positive")]
    ZeroStride,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FourierSeriesError {
    #[error("period must be positive and finite")]
    NonPositivePeriod,

    #[error("amplitudes and phases should have the same size: {amplitudes} != {phases}")]
    MismatchedHarmonics { amplitudes: usize, phases: usize },

    #[error("{what} has {actual} samples, but the time axis has {expected}")]
    MismatchedSamples {
        what: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("time axis should have at least one sample")]
    EmptyTimeAxis,

    #[error("time axis should be strictly increasing")]
    UnsortedTimeAxis,

    #[error("amplitude of harmonic {harmonic} is negative")]
    NegativeAmplitude { harmonic: usize },
}
