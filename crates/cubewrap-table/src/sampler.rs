//! Seam-aware texel addressing and bilinear filtering for cube textures.

use cubewrap_cubemap::{CubeFace, direction_to_face, direction_to_face_uv};
use glam::{DVec3, Vec4};

use crate::error::CubeMapError;
use crate::synthesis::{Probe, WrapTable};

/// Move a texel address that may lie one texel outside `face` onto the face
/// that actually holds it.
///
/// `mask` is `width - 1` for a power-of-two face width. In-range addresses are
/// returned unchanged. Returns `None` for an address outside the face on both
/// axes: that texel would sit past a cube corner, where only three faces meet.
#[must_use]
pub fn wrap_cube_coord(
    table: &WrapTable,
    x: i32,
    y: i32,
    face: CubeFace,
    mask: i32,
) -> Option<(i32, i32, CubeFace)> {
    if (x | y) & !mask == 0 {
        return Some((x, y, face));
    }
    if x & y & !mask != 0 {
        return None;
    }
    // A negative coordinate is the minus edge; comparing as unsigned, the
    // out-of-range axis is always the larger one.
    let negative = (x | y) < 0;
    let along_v = (x as u32) < (y as u32);
    let probe = match (along_v, negative) {
        (false, false) => Probe::PosU,
        (false, true) => Probe::NegU,
        (true, false) => Probe::PosV,
        (true, true) => Probe::NegV,
    };

    let code = table.get(face, probe);
    let (x, y) = code.apply(x, y, mask);
    Some((x, y, code.face))
}

/// Six square faces of RGBA texels, stored face after face in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeTexture {
    width: u32,
    texels: Vec<Vec4>,
    wrap: WrapTable,
}

impl CubeTexture {
    /// Wrap a texel buffer of `6 * width * width` entries.
    pub fn new(width: u32, texels: Vec<Vec4>) -> Result<Self, CubeMapError> {
        if !width.is_power_of_two() {
            return Err(CubeMapError::WidthNotPowerOfTwo(width));
        }
        let expected = 6 * (width as usize) * (width as usize);
        if texels.len() != expected {
            return Err(CubeMapError::TexelCount {
                expected,
                actual: texels.len(),
            });
        }
        Ok(Self {
            width,
            texels,
            wrap: WrapTable::reference(),
        })
    }

    /// Fill every texel from `f(face, x, y)`.
    pub fn from_fn(
        width: u32,
        mut f: impl FnMut(CubeFace, u32, u32) -> Vec4,
    ) -> Result<Self, CubeMapError> {
        let mut texels = Vec::with_capacity(6 * (width as usize) * (width as usize));
        for face in CubeFace::ALL {
            for y in 0..width {
                for x in 0..width {
                    texels.push(f(face, x, y));
                }
            }
        }
        Self::new(width, texels)
    }

    /// Every texel set to `color`.
    pub fn solid(width: u32, color: Vec4) -> Result<Self, CubeMapError> {
        Self::from_fn(width, |_, _, _| color)
    }

    /// Use a different seam table, e.g. one built from custom parameters.
    #[must_use]
    pub fn with_wrap_table(mut self, table: WrapTable) -> Self {
        self.wrap = table;
        self
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texel at an in-range address.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below the face width.
    #[must_use]
    pub fn texel(&self, face: CubeFace, x: u32, y: u32) -> Vec4 {
        assert!(x < self.width && y < self.width, "texel ({x}, {y}) out of range");
        let w = self.width as usize;
        self.texels[face.index() * w * w + (y as usize) * w + x as usize]
    }

    /// Texel at an address up to one texel outside `face`, following seams.
    #[must_use]
    pub fn texel_wrapped(&self, face: CubeFace, x: i32, y: i32) -> Option<Vec4> {
        let mask = (self.width - 1) as i32;
        let (x, y, face) = wrap_cube_coord(&self.wrap, x, y, face, mask)?;
        Some(self.texel(face, x as u32, y as u32))
    }

    /// Bilinear sample at normalised face coordinates `u, v` in `[0, 1]`.
    ///
    /// Footprints that straddle an edge read the neighbouring face. A texel
    /// that would fall past a cube corner is dropped and the remaining three
    /// weights are renormalised.
    #[must_use]
    pub fn sample_bilinear(&self, face: CubeFace, u: f32, v: f32) -> Vec4 {
        let w = self.width as f32;
        let xf = u.clamp(0.0, 1.0) * w - 0.5;
        let yf = v.clamp(0.0, 1.0) * w - 0.5;
        let x0 = xf.floor();
        let y0 = yf.floor();
        let fx = xf - x0;
        let fy = yf - y0;
        let (x0, y0) = (x0 as i32, y0 as i32);

        let taps = [
            (x0, y0, (1.0 - fx) * (1.0 - fy)),
            (x0 + 1, y0, fx * (1.0 - fy)),
            (x0, y0 + 1, (1.0 - fx) * fy),
            (x0 + 1, y0 + 1, fx * fy),
        ];

        let mut color = Vec4::ZERO;
        let mut total = 0.0;
        for (x, y, weight) in taps {
            if let Some(texel) = self.texel_wrapped(face, x, y) {
                color += texel * weight;
                total += weight;
            }
        }
        if total > 0.0 { color / total } else { Vec4::ZERO }
    }

    /// Bilinear sample in the direction `dir` from the cube centre.
    ///
    /// A zero direction yields zero.
    #[must_use]
    pub fn sample_direction(&self, dir: DVec3) -> Vec4 {
        if dir.length_squared() == 0.0 {
            return Vec4::ZERO;
        }
        let face = direction_to_face(dir);
        let (u, v) = direction_to_face_uv(dir, face);
        self.sample_bilinear(face, (u * 0.5 + 0.5) as f32, (v * 0.5 + 0.5) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubewrap_cubemap::{cube_coord_to_direction, direction_to_cube_coord};

    #[test]
    fn test_in_range_passes_through() {
        let table = WrapTable::reference();
        assert_eq!(
            wrap_cube_coord(&table, 5, 200, CubeFace::PosY, 255),
            Some((5, 200, CubeFace::PosY))
        );
    }

    #[test]
    fn test_corner_is_rejected() {
        let table = WrapTable::reference();
        for (x, y) in [(-1, -1), (256, -1), (-1, 256), (256, 256)] {
            assert_eq!(wrap_cube_coord(&table, x, y, CubeFace::PosX, 255), None);
        }
    }

    #[test]
    fn test_positive_x_right_edge_enters_negative_z() {
        let table = WrapTable::reference();
        assert_eq!(
            wrap_cube_coord(&table, 256, 40, CubeFace::PosX, 255),
            Some((0, 40, CubeFace::NegZ))
        );
    }

    #[test]
    fn test_wrap_agrees_with_reprojection() {
        // Every texel one step outside a face must land on the texel the
        // geometry puts under its centre, for any power-of-two width.
        let table = WrapTable::reference();
        for width in [4u32, 16, 256] {
            let mask = (width - 1) as i32;
            let w = width as i32;
            for face in CubeFace::ALL {
                for k in 0..w {
                    for (x, y) in [(w, k), (-1, k), (k, w), (k, -1)] {
                        let wrapped = wrap_cube_coord(&table, x, y, face, mask).unwrap();
                        let dir = cube_coord_to_direction(f64::from(x), f64::from(y), width, face);
                        let geo = direction_to_cube_coord(dir, width);
                        let (gx, gy) = geo.nearest_texel(width);
                        assert_eq!(
                            wrapped,
                            (gx as i32, gy as i32, geo.face),
                            "width {width}, {face:?} ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert_eq!(
            CubeTexture::new(3, vec![Vec4::ZERO; 54]),
            Err(CubeMapError::WidthNotPowerOfTwo(3))
        );
        assert_eq!(
            CubeTexture::new(4, vec![Vec4::ZERO; 95]),
            Err(CubeMapError::TexelCount {
                expected: 96,
                actual: 95
            })
        );
    }

    #[test]
    fn test_solid_texture_is_constant_across_seams() {
        let color = Vec4::new(0.25, 0.5, 0.75, 1.0);
        let tex = CubeTexture::solid(8, color).unwrap();
        for face in CubeFace::ALL {
            for &(u, v) in &[(0.0, 0.0), (0.0, 0.5), (1.0, 0.3), (0.5, 1.0), (1.0, 1.0), (0.5, 0.5)] {
                let c = tex.sample_bilinear(face, u, v);
                assert!((c - color).abs().max_element() < 1e-6, "{face:?} ({u}, {v}): {c:?}");
            }
        }
    }

    #[test]
    fn test_texel_centre_sample_is_exact() {
        let tex = CubeTexture::from_fn(4, |face, x, y| {
            Vec4::new(face.index() as f32, x as f32, y as f32, 1.0)
        })
        .unwrap();
        let c = tex.sample_bilinear(CubeFace::NegY, 2.5 / 4.0, 1.5 / 4.0);
        assert_eq!(c, Vec4::new(3.0, 2.0, 1.0, 1.0));
    }

    #[test]
    fn test_direction_sampling_is_continuous_over_seams() {
        // Store each texel's own direction; filtering near an edge must blend
        // geometrically adjacent texels and stay close to the query.
        let width = 32;
        let tex = CubeTexture::from_fn(width, |face, x, y| {
            let d = cube_coord_to_direction(f64::from(x), f64::from(y), width, face);
            Vec4::new(d.x as f32, d.y as f32, d.z as f32, 0.0)
        })
        .unwrap();

        let queries = [
            DVec3::new(1.0, 0.3, 0.999),
            DVec3::new(1.0, 0.999, -0.2),
            DVec3::new(-0.4, -1.0, 0.998),
            DVec3::new(0.999, -1.0, 0.5),
            DVec3::new(1.0, 0.998, 0.997),
            DVec3::new(-0.997, -1.0, -0.999),
        ];
        for q in queries {
            let c = tex.sample_direction(q);
            let got = DVec3::new(f64::from(c.x), f64::from(c.y), f64::from(c.z)).normalize();
            let err = (got - q.normalize()).length();
            assert!(err < 0.02, "query {q:?} sampled {got:?} (error {err})");
        }
    }

    #[test]
    fn test_zero_direction() {
        let tex = CubeTexture::solid(4, Vec4::ONE).unwrap();
        assert_eq!(tex.sample_direction(DVec3::ZERO), Vec4::ZERO);
    }
}
