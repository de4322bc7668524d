//! Hand-rolled linear algebra for the software rasterizer.
//!
//! Only the operations the pipeline actually uses are implemented; this is
//! not a general-purpose math library.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
