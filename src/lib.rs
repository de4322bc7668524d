//! A CPU software rasterizer that renders a procedurally generated sphere.
//!
//! The pipeline projects each mesh triangle through a model-view-projection
//! matrix, traverses it with perspective-correct edge functions, resolves
//! visibility with a z-buffer and shades every covered pixel with a
//! Blinn-Phong lighting model under one of three interpolation strategies:
//! flat (per triangle), Gouraud (per vertex) and Phong (per pixel).
//!
//! The crate never opens a window: [`render::render_frame`] returns an owned
//! [`render::Framebuffer`] whose RGB byte buffer any display sink can paint.
//!
//! # Quick start
//!
//! ```no_run
//! use sphererizer::prelude::*;
//!
//! let mesh = generate_sphere(32, 16)?;
//! let fb = render_frame(
//!     &mesh,
//!     Mat4::translation(0.0, 0.0, -7.0) * Mat4::scaling(2.0, 2.0, 2.0),
//!     Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP),
//!     Mat4::frustum(-0.1, 0.1, -0.1, 0.1, 0.1, 100.0),
//!     &Material::green_plastic(),
//!     &PointLight::white_at(Vec3::new(-4.0, 4.0, -3.0)),
//!     Vec3::ZERO,
//!     ShadingMode::Phong,
//!     512,
//!     512,
//! );
//! # Ok::<(), sphererizer::MeshError>(())
//! ```

pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod render;
pub mod shading;

// Re-export commonly needed types at crate root for convenience
pub use light::PointLight;
pub use material::Material;
pub use mesh::{generate_sphere, Mesh, MeshError};
pub use render::{render_frame, Framebuffer};
pub use shading::ShadingMode;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use sphererizer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::light::PointLight;
    pub use crate::material::Material;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
    pub use crate::mesh::{generate_sphere, Mesh, MeshError};
    pub use crate::render::{render_frame, Framebuffer};
    pub use crate::shading::ShadingMode;
}
