use crate::error::FourierSeriesError;
use crate::float_trait::Float;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Read-only view of a truncated Fourier series sampled on a time axis
///
/// Coefficients are indexed by harmonic number minus one: `amplitudes()[k]` and `phases()[k]` are
/// the magnitude and the argument of the complex coefficient of the $(k+1)$-th harmonic.
/// `t_vals()`, `fxn_vals()` and `fourier_approximation()` are aligned index-for-index.
pub trait FourierSource<T: Float> {
    /// Fundamental period of the curve
    fn period(&self) -> T;

    fn amplitudes(&self) -> &[T];

    fn phases(&self) -> &[T];

    /// Strictly increasing sample times
    fn t_vals(&self) -> &[T];

    /// True function values at `t_vals()`
    fn fxn_vals(&self) -> &[T];

    /// Truncated series values at `t_vals()`
    fn fourier_approximation(&self) -> &[T];

    /// Coordinate correction aligning the approximation with the drawing of the true curve
    fn origin_offset(&self) -> T;

    /// Number of available harmonics, $N$
    fn harmonic_count(&self) -> usize {
        self.amplitudes().len()
    }
}

/// Owned and validated [FourierSource]
///
/// It is a plain container: coefficients and the approximation are computed elsewhere and only
/// checked for consistency here
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "FourierSeriesParameters<T>",
    into = "FourierSeriesParameters<T>",
    bound = "T: Float + Serialize + DeserializeOwned"
)]
pub struct FourierSeries<T> {
    period: T,
    amplitudes: Vec<T>,
    phases: Vec<T>,
    t_vals: Vec<T>,
    fxn_vals: Vec<T>,
    fourier_approximation: Vec<T>,
    origin_offset: T,
}

impl<T> FourierSeries<T>
where
    T: Float,
{
    pub fn new(
        period: T,
        amplitudes: Vec<T>,
        phases: Vec<T>,
        t_vals: Vec<T>,
        fxn_vals: Vec<T>,
        fourier_approximation: Vec<T>,
        origin_offset: T,
    ) -> Result<Self, FourierSeriesError> {
        if !(period > T::zero() && period.is_finite()) {
            return Err(FourierSeriesError::NonPositivePeriod);
        }
        if amplitudes.len() != phases.len() {
            return Err(FourierSeriesError::MismatchedHarmonics {
                amplitudes: amplitudes.len(),
                phases: phases.len(),
            });
        }
        if let Some(k) = amplitudes.iter().position(|&a| a < T::zero()) {
            return Err(FourierSeriesError::NegativeAmplitude { harmonic: k + 1 });
        }
        if t_vals.is_empty() {
            return Err(FourierSeriesError::EmptyTimeAxis);
        }
        if !t_vals.windows(2).all(|w| w[0] < w[1]) {
            return Err(FourierSeriesError::UnsortedTimeAxis);
        }
        let samples = [
            ("fxn_vals", fxn_vals.len()),
            ("fourier_approximation", fourier_approximation.len()),
        ];
        for &(what, actual) in samples.iter() {
            if actual != t_vals.len() {
                return Err(FourierSeriesError::MismatchedSamples {
                    what,
                    actual,
                    expected: t_vals.len(),
                });
            }
        }
        Ok(Self {
            period,
            amplitudes,
            phases,
            t_vals,
            fxn_vals,
            fourier_approximation,
            origin_offset,
        })
    }
}

impl<T> FourierSource<T> for FourierSeries<T>
where
    T: Float,
{
    fn period(&self) -> T {
        self.period
    }

    fn amplitudes(&self) -> &[T] {
        &self.amplitudes
    }

    fn phases(&self) -> &[T] {
        &self.phases
    }

    fn t_vals(&self) -> &[T] {
        &self.t_vals
    }

    fn fxn_vals(&self) -> &[T] {
        &self.fxn_vals
    }

    fn fourier_approximation(&self) -> &[T] {
        &self.fourier_approximation
    }

    fn origin_offset(&self) -> T {
        self.origin_offset
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "FourierSeries")]
struct FourierSeriesParameters<T> {
    period: T,
    amplitudes: Vec<T>,
    phases: Vec<T>,
    t_vals: Vec<T>,
    fxn_vals: Vec<T>,
    fourier_approximation: Vec<T>,
    origin_offset: T,
}

impl<T> From<FourierSeries<T>> for FourierSeriesParameters<T> {
    fn from(f: FourierSeries<T>) -> Self {
        Self {
            period: f.period,
            amplitudes: f.amplitudes,
            phases: f.phases,
            t_vals: f.t_vals,
            fxn_vals: f.fxn_vals,
            fourier_approximation: f.fourier_approximation,
            origin_offset: f.origin_offset,
        }
    }
}

impl<T> TryFrom<FourierSeriesParameters<T>> for FourierSeries<T>
where
    T: Float,
{
    type Error = FourierSeriesError;

    fn try_from(p: FourierSeriesParameters<T>) -> Result<Self, Self::Error> {
        Self::new(
            p.period,
            p.amplitudes,
            p.phases,
            p.t_vals,
            p.fxn_vals,
            p.fourier_approximation,
            p.origin_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    fn series(period: f64, t_vals: Vec<f64>) -> Result<FourierSeries<f64>, FourierSeriesError> {
        let n = t_vals.len();
        FourierSeries::new(
            period,
            vec![1.0, 0.5],
            vec![0.0, 0.3],
            t_vals,
            vec![0.0; n],
            vec![0.0; n],
            0.0,
        )
    }

    #[test]
    fn harmonic_count_is_coefficient_count() {
        let fs = series(1.0, vec![0.0, 0.5]).unwrap();
        assert_eq!(2, fs.harmonic_count());
    }

    #[test]
    fn rejects_bad_period() {
        assert_eq!(
            Err(FourierSeriesError::NonPositivePeriod),
            series(0.0, vec![0.0])
        );
        assert_eq!(
            Err(FourierSeriesError::NonPositivePeriod),
            series(f64::NAN, vec![0.0])
        );
        assert_eq!(
            Err(FourierSeriesError::NonPositivePeriod),
            series(f64::INFINITY, vec![0.0])
        );
    }

    #[test]
    fn rejects_bad_time_axis() {
        assert_eq!(Err(FourierSeriesError::EmptyTimeAxis), series(1.0, vec![]));
        assert_eq!(
            Err(FourierSeriesError::UnsortedTimeAxis),
            series(1.0, vec![0.0, 0.5, 0.5])
        );
    }

    #[test]
    fn rejects_mismatched_sizes() {
        let err = FourierSeries::new(
            1.0,
            vec![1.0],
            vec![],
            vec![0.0],
            vec![0.0],
            vec![0.0],
            0.0,
        );
        assert_eq!(
            Err(FourierSeriesError::MismatchedHarmonics {
                amplitudes: 1,
                phases: 0
            }),
            err
        );
        let err = FourierSeries::new(
            1.0,
            vec![],
            vec![],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0],
            0.0,
        );
        assert_eq!(
            Err(FourierSeriesError::MismatchedSamples {
                what: "fourier_approximation",
                actual: 1,
                expected: 2
            }),
            err
        );
    }

    #[test]
    fn rejects_negative_amplitude() {
        let err = FourierSeries::new(
            1.0,
            vec![1.0, -1.0],
            vec![0.0, 0.0],
            vec![0.0],
            vec![0.0],
            vec![0.0],
            0.0,
        );
        assert_eq!(Err(FourierSeriesError::NegativeAmplitude { harmonic: 2 }), err);
    }

    fn tokens(period: f64) -> Vec<Token> {
        vec![
            Token::Struct {
                len: 7,
                name: "FourierSeries",
            },
            Token::Str("period"),
            Token::F64(period),
            Token::Str("amplitudes"),
            Token::Seq { len: Some(1) },
            Token::F64(1.0),
            Token::SeqEnd,
            Token::Str("phases"),
            Token::Seq { len: Some(1) },
            Token::F64(0.0),
            Token::SeqEnd,
            Token::Str("t_vals"),
            Token::Seq { len: Some(1) },
            Token::F64(0.0),
            Token::SeqEnd,
            Token::Str("fxn_vals"),
            Token::Seq { len: Some(1) },
            Token::F64(2.0),
            Token::SeqEnd,
            Token::Str("fourier_approximation"),
            Token::Seq { len: Some(1) },
            Token::F64(2.0),
            Token::SeqEnd,
            Token::Str("origin_offset"),
            Token::F64(-3.0),
            Token::StructEnd,
        ]
    }

    #[test]
    fn serialization() {
        let fs = FourierSeries::new(
            10.0,
            vec![1.0],
            vec![0.0],
            vec![0.0],
            vec![2.0],
            vec![2.0],
            -3.0,
        )
        .unwrap();
        assert_tokens(&fs, &tokens(10.0));
    }

    #[test]
    fn deserialization_validates() {
        assert_de_tokens_error::<FourierSeries<f64>>(
            &tokens(-1.0),
            "period must be positive and finite",
        );
    }
}
