//! Direction vector to face pixel coordinate.

use glam::DVec3;

use crate::{CubeCoord, CubeFace};

/// Determine which cube face a direction vector belongs to.
///
/// An X face is chosen only when `|x|` is strictly the largest component, a Y
/// face only when `|y|` is, and a Z face otherwise, so exact ties on an edge
/// or corner resolve towards Z. The sign of the winning component picks
/// between the two faces on that axis.
#[must_use]
pub fn direction_to_face(dir: DVec3) -> CubeFace {
    let a = dir.abs();

    if a.x > a.y && a.x > a.z {
        if dir.x > 0.0 {
            CubeFace::PosX
        } else {
            CubeFace::NegX
        }
    } else if a.y > a.x && a.y > a.z {
        if dir.y > 0.0 {
            CubeFace::PosY
        } else {
            CubeFace::NegY
        }
    } else if dir.z > 0.0 {
        CubeFace::PosZ
    } else {
        CubeFace::NegZ
    }
}

/// Normalised face coordinates of `dir` on `face`, each in `[-1, 1]` when the
/// direction belongs to that face.
///
/// The direction does not need to be unit length.
#[must_use]
pub fn direction_to_face_uv(dir: DVec3, face: CubeFace) -> (f64, f64) {
    let axes = face.axes();
    let m = axes.major.axis.get(dir).abs();
    let u = axes.u.sign * axes.u.axis.get(dir) / m;
    let v = axes.v.sign * axes.v.axis.get(dir) / m;
    (u, v)
}

/// Convert a direction to a pixel coordinate on a face of the given width.
///
/// Inverse of [`cube_coord_to_direction`](crate::cube_coord_to_direction) for
/// directions that land inside the face.
#[must_use]
pub fn direction_to_cube_coord(dir: DVec3, width: u32) -> CubeCoord {
    let face = direction_to_face(dir);
    let (u, v) = direction_to_face_uv(dir, face);
    let w = f64::from(width);

    CubeCoord::new(face, (u + 1.0) * w * 0.5 - 0.5, (v + 1.0) * w * 0.5 - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::cube_coord_to_direction;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_roundtrip_inside_band() {
        for face in CubeFace::ALL {
            for x in (32..224).step_by(17) {
                for y in (32..224).step_by(23) {
                    let (x, y) = (f64::from(x), f64::from(y));
                    let dir = cube_coord_to_direction(x, y, 256, face);
                    let back = direction_to_cube_coord(dir, 256);
                    assert_eq!(back.face, face, "face mismatch at ({x}, {y})");
                    assert!((back.x - x).abs() < EPSILON, "{face:?}: x {x} -> {}", back.x);
                    assert!((back.y - y).abs() < EPSILON, "{face:?}: y {y} -> {}", back.y);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_fractional_positions() {
        for face in CubeFace::ALL {
            let dir = cube_coord_to_direction(40.25, 190.75, 256, face);
            let back = direction_to_cube_coord(dir, 256);
            assert_eq!(back.face, face);
            assert!((back.x - 40.25).abs() < EPSILON);
            assert!((back.y - 190.75).abs() < EPSILON);
        }
    }

    #[test]
    fn test_face_detection_axis_aligned_directions() {
        assert_eq!(direction_to_face(DVec3::X), CubeFace::PosX);
        assert_eq!(direction_to_face(DVec3::NEG_X), CubeFace::NegX);
        assert_eq!(direction_to_face(DVec3::Y), CubeFace::PosY);
        assert_eq!(direction_to_face(DVec3::NEG_Y), CubeFace::NegY);
        assert_eq!(direction_to_face(DVec3::Z), CubeFace::PosZ);
        assert_eq!(direction_to_face(DVec3::NEG_Z), CubeFace::NegZ);
    }

    #[test]
    fn test_ties_resolve_towards_z() {
        assert_eq!(direction_to_face(DVec3::new(1.0, 1.0, 0.0)), CubeFace::NegZ);
        assert_eq!(direction_to_face(DVec3::new(1.0, 0.5, 1.0)), CubeFace::PosZ);
        assert_eq!(direction_to_face(DVec3::new(0.5, -1.0, -1.0)), CubeFace::NegZ);
        assert_eq!(direction_to_face(DVec3::new(1.0, 1.0, 1.0)), CubeFace::PosZ);
    }

    #[test]
    fn test_unnormalised_input() {
        let dir = cube_coord_to_direction(100.0, 50.0, 256, CubeFace::NegX) * 37.0;
        let back = direction_to_cube_coord(dir, 256);
        assert_eq!(back.face, CubeFace::NegX);
        assert!((back.x - 100.0).abs() < EPSILON);
        assert!((back.y - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_outside_face_reprojects_to_neighbor() {
        // Just past the +U edge of +X lies the -Z face, entering at its x = 0.
        let dir = cube_coord_to_direction(257.0, 64.0, 256, CubeFace::PosX);
        let back = direction_to_cube_coord(dir, 256);
        assert_eq!(back.face, CubeFace::NegZ);
        assert!(back.x < 2.0, "x = {}", back.x);
    }
}
