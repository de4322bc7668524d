//! Perspective-correct triangle rasterization.
//!
//! One algorithm lives here: bounding-box traversal with edge functions,
//! which tests every pixel center in the triangle's screen-space bounding
//! box against three edge equations. It is simple, handles every triangle
//! orientation, and gives barycentric weights for free - the foundation of
//! GPU rasterization.

mod edgefunction;
pub mod shader;

pub use edgefunction::rasterize_triangle;
pub use shader::{Barycentric, FlatShader, FragmentShader, GouraudShader, PhongShader};
