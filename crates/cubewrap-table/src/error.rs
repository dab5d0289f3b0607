//! Error types for table synthesis and cube texture construction.

/// Rejected [`TableParams`](crate::TableParams).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TableError {
    /// The reference face has no pixels.
    #[error("face width must be non-zero")]
    ZeroWidth,

    /// A probe or band constant is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// The interior band is not `0 <= min < mid < max <= width`.
    #[error("band [{min}, {max}) with midpoint {mid} does not fit a face of width {width}")]
    BandOutOfOrder {
        min: f64,
        mid: f64,
        max: f64,
        width: u32,
    },

    /// A probe lands inside the face instead of just past its edge.
    #[error("probes at {center} +/- {offset} do not leave a face of width {width}")]
    ProbeInsideFace { center: f64, offset: f64, width: u32 },

    /// The coordinate used on the axis a probe does not move along is outside the band.
    #[error("probe rest coordinate {rest} is outside the interior band")]
    RestOutsideBand { rest: f64 },
}

/// Rejected cube texture data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CubeMapError {
    /// Coordinate wrapping masks with `width - 1`.
    #[error("cube face width {0} is not a power of two")]
    WidthNotPowerOfTwo(u32),

    /// The texel buffer does not hold exactly six faces.
    #[error("expected {expected} texels for six faces, got {actual}")]
    TexelCount { expected: usize, actual: usize },
}
