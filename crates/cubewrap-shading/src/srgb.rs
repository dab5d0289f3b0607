//! sRGB transfer functions and the cheap polynomial forms used in texture
//! filtering.

use crate::comparison::{CurveError, compare_curves};

/// Exact linear → sRGB encoding.
#[must_use]
pub fn linear_to_srgb(x: f64) -> f64 {
    if x > 0.003_130_8 {
        x.powf(1.0 / 2.4) * 1.055 - 0.055
    } else {
        x * 12.92
    }
}

/// Exact sRGB → linear decoding.
#[must_use]
pub fn srgb_to_linear(x: f64) -> f64 {
    let y = x / 12.92;
    if y > 0.003_130_8 {
        ((x + 0.055) / 1.055).powf(2.4)
    } else {
        y
    }
}

/// Compression through a square root and one fused correction term.
#[must_use]
pub fn srgb_compress_approx(x: f64) -> f64 {
    let s = x.max(0.0).sqrt();
    (s * -0.139_426_92 + 1.139_426_92) * s
}

/// Expansion as the square of a quadratic.
#[must_use]
pub fn srgb_expand_approx(x: f64) -> f64 {
    let y = (x * 0.139_455_50 + 0.860_544_50) * x;
    y * y
}

/// Expansion in terms of `x²`, so it can be applied after bilinear
/// filtering of squared values.
#[must_use]
pub fn srgb_expand_bilinear(x: f64) -> f64 {
    let x2 = x * x;
    (x2 * 0.169_165_72 + 0.830_834_28) * x2
}

/// Quartic expansion evaluated with two multiply-add chains.
#[must_use]
pub fn srgb_expand_poly4(x: f64) -> f64 {
    let x2 = x * x;
    (x2 * -0.139_847_61 + (x * 0.587_402_02 + 0.508_492_40)) * x2 + x * 0.043_953_19
}

/// Approximate expand followed by approximate compress.
#[must_use]
pub fn srgb_roundtrip_approx(x: f64) -> f64 {
    srgb_compress_approx(srgb_expand_approx(x))
}

/// Error of every approximation against the exact curve it replaces.
pub fn srgb_report(samples: usize) -> Vec<CurveError> {
    let report = vec![
        compare_curves(
            "linear -> sRGB (sqrt poly)",
            samples,
            srgb_compress_approx,
            linear_to_srgb,
        ),
        compare_curves(
            "sRGB -> linear (squared)",
            samples,
            srgb_expand_approx,
            srgb_to_linear,
        ),
        compare_curves(
            "sRGB -> linear (bilinear)",
            samples,
            srgb_expand_bilinear,
            srgb_to_linear,
        ),
        compare_curves(
            "sRGB -> linear (quartic)",
            samples,
            srgb_expand_poly4,
            srgb_to_linear,
        ),
        compare_curves(
            "sRGB -> linear -> sRGB",
            samples,
            srgb_roundtrip_approx,
            |x| x,
        ),
    ];
    for row in &report {
        tracing::debug!(curve = row.name, max = row.max_abs_error, rms = row.rms_error, "srgb curve");
    }
    report
}
