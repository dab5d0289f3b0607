//! Sampled error between an approximation and its reference curve.

use std::fmt;

/// Error statistics of one approximation over `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveError {
    pub name: &'static str,
    pub max_abs_error: f64,
    /// Input at which `max_abs_error` occurs.
    pub max_error_at: f64,
    pub rms_error: f64,
}

/// Compare `approx` against `reference` at `samples + 1` evenly spaced inputs
/// covering `[0, 1]` inclusive.
pub fn compare_curves(
    name: &'static str,
    samples: usize,
    approx: impl Fn(f64) -> f64,
    reference: impl Fn(f64) -> f64,
) -> CurveError {
    let samples = samples.max(1);
    let mut max_abs_error = 0.0;
    let mut max_error_at = 0.0;
    let mut sum_sq = 0.0;

    for i in 0..=samples {
        let x = i as f64 / samples as f64;
        let err = (approx(x) - reference(x)).abs();
        sum_sq += err * err;
        if err > max_abs_error {
            max_abs_error = err;
            max_error_at = x;
        }
    }

    CurveError {
        name,
        max_abs_error,
        max_error_at,
        rms_error: (sum_sq / (samples + 1) as f64).sqrt(),
    }
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<28} max {:.6} at {:.4}  rms {:.6}",
            self.name, self.max_abs_error, self.max_error_at, self.rms_error
        )
    }
}
