//! Cube-map geometry: face orientation table, face pixel coordinates, and the
//! projections between them and object-space directions.

mod cube_coord;
mod cube_face;
mod inverse;
mod projection;

pub use cube_coord::CubeCoord;
pub use cube_face::{Axis, CubeFace, FaceAxes, SignedAxis};
pub use inverse::{direction_to_cube_coord, direction_to_face, direction_to_face_uv};
pub use projection::{cube_coord_to_direction, project};
