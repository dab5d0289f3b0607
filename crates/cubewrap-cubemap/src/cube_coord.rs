//! Pixel-space coordinates on a cube face.

use crate::CubeFace;

/// A sample position on one face, in pixels.
///
/// Texel centres sit on integer values; the face covers `[-0.5, w - 0.5]`.
/// Coordinates outside that range are allowed and describe points that have
/// crossed a seam without being reassigned to the neighbouring face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    pub x: f64,
    pub y: f64,
}

impl CubeCoord {
    #[must_use]
    pub fn new(face: CubeFace, x: f64, y: f64) -> Self {
        Self { face, x, y }
    }

    /// Nearest texel, clamped to a face of the given width.
    #[must_use]
    pub fn nearest_texel(&self, width: u32) -> (u32, u32) {
        let max = f64::from(width.saturating_sub(1));
        let x = self.x.round().clamp(0.0, max);
        let y = self.y.round().clamp(0.0, max);
        (x as u32, y as u32)
    }
}
