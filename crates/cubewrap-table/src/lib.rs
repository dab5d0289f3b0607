//! Cube-map seam wrap table: synthesis from cube geometry, emission as a C++
//! constant array, and the sampler-side lookup that consumes it.

mod emit;
mod error;
mod sampler;
mod synthesis;
mod wrap_code;

pub use emit::{DEFAULT_SYMBOL, render_table};
pub use error::{CubeMapError, TableError};
pub use sampler::{CubeTexture, wrap_cube_coord};
pub use synthesis::{Probe, ProbeSample, TABLE_LEN, TableParams, WrapTable, evaluate_probe};
pub use wrap_code::{FACE_MASK, MIRROR_U, MIRROR_V, SWAP_UV, WrapCode};
