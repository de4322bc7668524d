//! Shared lighting evaluation and gamma encoding.
//!
//! All three shading strategies call into the same ambient + diffuse +
//! specular model; they differ only in *where* the specular half of the model
//! is evaluated (per triangle, per vertex, or per pixel) and in the specular
//! formulation: the flat path uses the Blinn half-vector, the Gouraud and
//! Phong paths use the reflected light vector.

use std::fmt;

use crate::light::PointLight;
use crate::material::Material;
use crate::math::vec3::Vec3;

/// Display gamma used to encode linear lighting results.
pub const GAMMA: f32 = 2.2;

/// Which shading strategy the render pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// One lighting evaluation per triangle, at its centroid.
    Flat,
    /// One lighting evaluation per vertex; colors interpolated per pixel.
    Gouraud,
    /// Position and normal interpolated per pixel; lighting per pixel.
    #[default]
    Phong,
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadingMode::Flat => write!(f, "flat"),
            ShadingMode::Gouraud => write!(f, "gouraud"),
            ShadingMode::Phong => write!(f, "phong"),
        }
    }
}

/// Blinn-Phong lighting at a world-space point, using the half-vector
/// specular term.
///
/// Returns a linear-space color, unclamped.
pub fn blinn_phong(
    point: Vec3,
    normal: Vec3,
    eye: Vec3,
    material: &Material,
    light: &PointLight,
) -> Vec3 {
    let ambient = material.ambient * light.ambient_intensity;

    let light_dir = (light.position - point).normalize();
    let diffuse = material.diffuse * light.color * normal.dot(light_dir).max(0.0);

    let view_dir = (eye - point).normalize();
    let half_dir = (light_dir + view_dir).normalize();
    let spec = normal.dot(half_dir).max(0.0).powf(material.shininess);
    let specular = material.specular * light.color * spec;

    ambient + diffuse + specular
}

/// Phong lighting at a world-space point, using the reflected-light-vector
/// specular term.
///
/// Returns a linear-space color, unclamped.
pub fn phong(
    point: Vec3,
    normal: Vec3,
    eye: Vec3,
    material: &Material,
    light: &PointLight,
) -> Vec3 {
    let ambient = material.ambient * light.ambient_intensity;

    let light_dir = (light.position - point).normalize();
    let diffuse = material.diffuse * light.color * normal.dot(light_dir).max(0.0);

    let view_dir = (eye - point).normalize();
    let reflect_dir = (-light_dir).reflect(normal);
    let spec = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess);
    let specular = material.specular * light.color * spec;

    ambient + diffuse + specular
}

/// Clamps a linear color to [0, 1], gamma-encodes it and clamps again.
///
/// The result is a display-space color ready for 8-bit quantization.
pub fn gamma_encode(linear: Vec3) -> Vec3 {
    linear.clamp01().powf(1.0 / GAMMA).clamp01()
}
