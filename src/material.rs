//! Surface material parameters for the lighting model.

use crate::math::vec3::Vec3;

/// Blinn-Phong material coefficients.
///
/// All three coefficient triples are RGB reflectances in [0, 1]; `shininess`
/// is the specular exponent. Materials are plain configuration and are never
/// mutated during rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Material {
    pub const fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// The green plastic material used by the reference scene.
    pub const fn green_plastic() -> Self {
        Self::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.5),
            32.0,
        )
    }
}
