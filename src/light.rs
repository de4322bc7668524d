//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A point light with a separate scene-wide ambient term.
///
/// The light illuminates from a single world-space position; `color` scales
/// the diffuse and specular contributions while `ambient_intensity` scales
/// only the material's ambient reflectance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub ambient_intensity: f32,
}

impl PointLight {
    pub const fn new(position: Vec3, color: Vec3, ambient_intensity: f32) -> Self {
        Self {
            position,
            color,
            ambient_intensity,
        }
    }

    /// The white point light used by the reference scene.
    pub const fn white_at(position: Vec3) -> Self {
        Self::new(position, Vec3::ONE, 0.2)
    }
}
