//! Face pixel coordinate to direction vector.

use glam::DVec3;

use crate::{CubeCoord, CubeFace};

/// Convert a pixel position on `face` to a unit direction.
///
/// `x` and `y` are centred with `2x - (w - 1)`, so texel centres of a face of
/// width `w` span `[-(w - 1), w - 1]` while the face plane sits at `±w`.
/// Positions outside the face are extrapolated along the same plane.
#[must_use]
pub fn cube_coord_to_direction(x: f64, y: f64, width: u32, face: CubeFace) -> DVec3 {
    let w = f64::from(width);
    let axes = face.axes();

    let mut v = DVec3::ZERO;
    axes.major.axis.set(&mut v, axes.major.sign * w);
    axes.u.axis.set(&mut v, axes.u.sign * (2.0 * x - (w - 1.0)));
    axes.v.axis.set(&mut v, axes.v.sign * (2.0 * y - (w - 1.0)));

    v.normalize()
}

/// Same as [`cube_coord_to_direction`], taking a [`CubeCoord`].
#[inline]
#[must_use]
pub fn project(coord: &CubeCoord, width: u32) -> DVec3 {
    cube_coord_to_direction(coord.x, coord.y, width, coord.face)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_face_center_maps_to_normal() {
        for face in CubeFace::ALL {
            let dir = cube_coord_to_direction(127.5, 127.5, 256, face);
            assert!(
                (dir - face.normal()).length() < EPSILON,
                "centre of {face:?} mapped to {dir:?}"
            );
        }
    }

    #[test]
    fn test_outputs_are_unit_length() {
        for face in CubeFace::ALL {
            for &(x, y) in &[(0.0, 0.0), (255.0, 0.0), (-1.5, 64.0), (257.0, 300.0)] {
                let dir = cube_coord_to_direction(x, y, 256, face);
                assert!((dir.length() - 1.0).abs() < EPSILON, "{face:?} ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_positive_x_face_layout() {
        // +X: increasing x heads towards -Z, increasing y towards -Y.
        let right = cube_coord_to_direction(255.0, 127.5, 256, CubeFace::PosX);
        assert!(right.z < 0.0 && right.y.abs() < EPSILON);
        let down = cube_coord_to_direction(127.5, 255.0, 256, CubeFace::PosX);
        assert!(down.y < 0.0 && down.z.abs() < EPSILON);
    }

    #[test]
    fn test_half_texel_past_edge_lies_on_edge() {
        // x = w - 0.5 is the outer edge of the last texel: the U component
        // equals the major component.
        for face in CubeFace::ALL {
            let dir = cube_coord_to_direction(255.5, 127.5, 256, face);
            let axes = face.axes();
            let major = axes.major.axis.get(dir).abs();
            let u = axes.u.axis.get(dir).abs();
            assert!((major - u).abs() < EPSILON, "{face:?}");
        }
    }

    #[test]
    fn test_project_matches_free_function() {
        let c = CubeCoord::new(CubeFace::NegY, 12.0, 200.0);
        assert_eq!(project(&c, 256), cube_coord_to_direction(12.0, 200.0, 256, CubeFace::NegY));
    }
}
