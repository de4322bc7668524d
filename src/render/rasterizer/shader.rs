//! Fragment shaders for the three shading strategies.
//!
//! The rasterizer is attribute-agnostic: it finds covered pixels, builds the
//! perspective-correct [`Barycentric`] weights and asks a shader for the
//! final display-space color. The three shaders differ only in what they
//! interpolate and when lighting runs:
//!
//! - [`FlatShader`] carries one pre-lit color for the whole triangle.
//! - [`GouraudShader`] interpolates three pre-lit vertex colors.
//! - [`PhongShader`] interpolates world position and normal, then evaluates
//!   lighting per pixel.

use crate::light::PointLight;
use crate::material::Material;
use crate::math::vec3::Vec3;
use crate::shading;

/// Perspective-correct interpolation weights at one covered pixel.
///
/// Screen-space barycentric weights are linear in screen space, which is
/// *not* linear in world space under perspective. Every attribute is
/// therefore interpolated as `sum(lambda_i * A_i / w_i) / sum(lambda_i / w_i)`
/// with the clip-space `w` of each vertex.
pub struct Barycentric {
    lambda: [f32; 3],
    inv_w: [f32; 3],
    inv_w_sum: f32,
}

impl Barycentric {
    /// Builds the weights, or `None` when the 1/w denominator is too small
    /// to divide by. The rasterizer skips such pixels.
    pub(crate) fn new(lambda: [f32; 3], inv_w: [f32; 3]) -> Option<Self> {
        let inv_w_sum = lambda[0] * inv_w[0] + lambda[1] * inv_w[1] + lambda[2] * inv_w[2];
        if inv_w_sum.abs() < f32::EPSILON {
            return None;
        }
        Some(Self {
            lambda,
            inv_w,
            inv_w_sum,
        })
    }

    /// Raw screen-space barycentric weights; they sum to 1 by construction.
    pub fn lambda(&self) -> [f32; 3] {
        self.lambda
    }

    /// Perspective-correct interpolation of a scalar vertex attribute.
    #[inline]
    pub fn interpolate_scalar(&self, attr: [f32; 3]) -> f32 {
        (self.lambda[0] * attr[0] * self.inv_w[0]
            + self.lambda[1] * attr[1] * self.inv_w[1]
            + self.lambda[2] * attr[2] * self.inv_w[2])
            / self.inv_w_sum
    }

    /// Perspective-correct interpolation of a vector vertex attribute.
    #[inline]
    pub fn interpolate(&self, attr: [Vec3; 3]) -> Vec3 {
        (attr[0] * (self.lambda[0] * self.inv_w[0])
            + attr[1] * (self.lambda[1] * self.inv_w[1])
            + attr[2] * (self.lambda[2] * self.inv_w[2]))
            / self.inv_w_sum
    }
}

/// Per-pixel color computation for covered pixels.
///
/// `shade` returns a display-space (gamma-encoded) color in [0, 1]; the
/// framebuffer quantizes it to 8 bits per channel.
pub trait FragmentShader {
    fn shade(&self, bary: &Barycentric) -> Vec3;
}

/// Constant color for the whole triangle (flat shading).
pub struct FlatShader {
    color: Vec3,
}

impl FlatShader {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

impl FragmentShader for FlatShader {
    #[inline]
    fn shade(&self, _bary: &Barycentric) -> Vec3 {
        self.color
    }
}

/// Interpolates three pre-lit vertex colors (Gouraud shading).
pub struct GouraudShader {
    colors: [Vec3; 3],
}

impl GouraudShader {
    pub fn new(colors: [Vec3; 3]) -> Self {
        Self { colors }
    }
}

impl FragmentShader for GouraudShader {
    #[inline]
    fn shade(&self, bary: &Barycentric) -> Vec3 {
        bary.interpolate(self.colors)
    }
}

/// Interpolates world-space position and normal, then lights each pixel
/// (Phong shading).
///
/// The interpolated normal is renormalized before lighting: the weighted sum
/// of unit vectors is shorter than unit length everywhere except at the
/// vertices.
pub struct PhongShader<'a> {
    world_positions: [Vec3; 3],
    world_normals: [Vec3; 3],
    material: &'a Material,
    light: &'a PointLight,
    eye: Vec3,
}

impl<'a> PhongShader<'a> {
    pub fn new(
        world_positions: [Vec3; 3],
        world_normals: [Vec3; 3],
        material: &'a Material,
        light: &'a PointLight,
        eye: Vec3,
    ) -> Self {
        Self {
            world_positions,
            world_normals,
            material,
            light,
            eye,
        }
    }
}

impl FragmentShader for PhongShader<'_> {
    #[inline]
    fn shade(&self, bary: &Barycentric) -> Vec3 {
        let position = bary.interpolate(self.world_positions);
        let normal = bary.interpolate(self.world_normals).normalize();
        let linear = shading::phong(position, normal, self.eye, self.material, self.light);
        shading::gamma_encode(linear)
    }
}
