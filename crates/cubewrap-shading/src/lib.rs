//! Accuracy checks for the polynomial shortcuts used by texture and shading
//! code: sRGB transfer curves and Fresnel reflectance.

mod comparison;
pub mod fresnel;
pub mod srgb;

pub use comparison::{CurveError, compare_curves};
pub use fresnel::{FresnelRow, FresnelSetup, fresnel_report};
pub use srgb::srgb_report;
