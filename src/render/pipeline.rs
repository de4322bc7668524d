//! Per-triangle transform stage and the frame rendering entry point.
//!
//! Each mesh triangle is transformed to clip space, handed to the shading
//! evaluator selected by [`ShadingMode`] and rasterized into a fresh
//! [`Framebuffer`]. One call computes one complete image; the caller may
//! redisplay the returned buffer indefinitely without recomputation.
//!
//! Triangles are processed sequentially. The loop is safe to parallelize per
//! triangle as long as the framebuffer's depth-compare-and-write stays atomic
//! per pixel (see the rasterizer module docs).

use crate::light::PointLight;
use crate::material::Material;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::render::framebuffer::Framebuffer;
use crate::render::rasterizer::{rasterize_triangle, FlatShader, GouraudShader, PhongShader};
use crate::shading::{self, ShadingMode};

/// Transforms a model-space position to world space, including the
/// homogeneous divide.
fn world_position(model: Mat4, position: Vec3) -> Vec3 {
    (model * Vec4::from_point(position)).homogeneous_divide()
}

/// World-space normal of a sphere-surface point.
///
/// Valid only because the mesh is a perfect sphere: the normal at any
/// surface point is the direction from the sphere's center to that point.
/// A general mesh would need true per-vertex normals instead.
fn sphere_normal(world: Vec3, center: Vec3) -> Vec3 {
    (world - center).normalize()
}

/// Renders one complete frame of `mesh` into a fresh framebuffer.
///
/// `eye` is the camera position in world space, used by the specular term;
/// it must agree with the `view` matrix. The sphere's world-space center is
/// derived from `model` for the normal shortcut above.
#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    mesh: &Mesh,
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    material: &Material,
    light: &PointLight,
    eye: Vec3,
    mode: ShadingMode,
    width: u32,
    height: u32,
) -> Framebuffer {
    let mvp = projection * view * model;
    let center = world_position(model, Vec3::ZERO);
    let mut fb = Framebuffer::new(width, height);

    for [v0, v1, v2] in mesh.triangles() {
        let clip = [
            mvp * Vec4::from_point(v0),
            mvp * Vec4::from_point(v1),
            mvp * Vec4::from_point(v2),
        ];
        let world = [
            world_position(model, v0),
            world_position(model, v1),
            world_position(model, v2),
        ];

        match mode {
            ShadingMode::Flat => {
                let centroid = (world[0] + world[1] + world[2]) / 3.0;
                let mut normal = (world[1] - world[0]).cross(world[2] - world[0]).normalize();
                // Face outward from the sphere center.
                if normal.dot(centroid - center) < 0.0 {
                    normal = -normal;
                }
                let linear = shading::blinn_phong(centroid, normal, eye, material, light);
                let color = shading::gamma_encode(linear);
                rasterize_triangle(clip, &FlatShader::new(color), &mut fb);
            }
            ShadingMode::Gouraud => {
                let colors = world.map(|w| {
                    let normal = sphere_normal(w, center);
                    shading::gamma_encode(shading::phong(w, normal, eye, material, light))
                });
                rasterize_triangle(clip, &GouraudShader::new(colors), &mut fb);
            }
            ShadingMode::Phong => {
                let normals = world.map(|w| sphere_normal(w, center));
                let shader = PhongShader::new(world, normals, material, light, eye);
                rasterize_triangle(clip, &shader, &mut fb);
            }
        }
    }

    fb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::generate_sphere;

    const SIZE: u32 = 128;

    /// The reference scene: a unit sphere scaled by 2 and pushed to
    /// z = -7, viewed from the origin down -Z, lit by a white point light.
    fn reference_scene() -> (Mesh, Mat4, Mat4, Mat4, Material, PointLight, Vec3) {
        let mesh = generate_sphere(32, 16).unwrap();
        let model = Mat4::translation(0.0, 0.0, -7.0) * Mat4::scaling(2.0, 2.0, 2.0);
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
        let projection = Mat4::frustum(-0.1, 0.1, -0.1, 0.1, 0.1, 100.0);
        let material = Material::green_plastic();
        let light = PointLight::white_at(Vec3::new(-4.0, 4.0, -3.0));
        (mesh, model, view, projection, material, light, Vec3::ZERO)
    }

    fn render(mode: ShadingMode) -> Framebuffer {
        let (mesh, model, view, projection, material, light, eye) = reference_scene();
        render_frame(
            &mesh, model, view, projection, &material, &light, eye, mode, SIZE, SIZE,
        )
    }

    #[test]
    fn flat_shaded_sphere_is_green_on_black() {
        let fb = render(ShadingMode::Flat);

        // The sphere sits in the middle of the frame; corners stay untouched.
        assert_eq!(fb.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(fb.pixel(SIZE as i32 - 1, SIZE as i32 - 1), Some([0, 0, 0]));
        assert_eq!(fb.depth()[0], f32::MAX);

        // The green-tinted material must dominate somewhere on the lit side.
        let greenish = fb
            .color()
            .chunks_exact(3)
            .any(|px| px[1] > px[0] && px[1] > px[2]);
        assert!(greenish);

        // Something was actually drawn.
        let covered = fb.depth().iter().filter(|&&d| d != f32::MAX).count();
        assert!(covered > 0);
    }

    #[test]
    fn rendering_twice_is_bit_identical() {
        for mode in [ShadingMode::Flat, ShadingMode::Gouraud, ShadingMode::Phong] {
            let a = render(mode);
            let b = render(mode);
            assert_eq!(a.color(), b.color(), "{mode} color buffers differ");
            assert_eq!(a.depth(), b.depth(), "{mode} depth buffers differ");
        }
    }

    #[test]
    fn all_modes_cover_the_same_silhouette() {
        let flat = render(ShadingMode::Flat);
        let gouraud = render(ShadingMode::Gouraud);
        let phong = render(ShadingMode::Phong);

        let coverage = |fb: &Framebuffer| {
            fb.depth()
                .iter()
                .map(|&d| d != f32::MAX)
                .collect::<Vec<_>>()
        };
        assert_eq!(coverage(&flat), coverage(&gouraud));
        assert_eq!(coverage(&gouraud), coverage(&phong));
    }

    #[test]
    fn smooth_modes_differ_from_flat_inside_the_silhouette() {
        let flat = render(ShadingMode::Flat);
        let phong = render(ShadingMode::Phong);
        assert_ne!(flat.color(), phong.color());
    }

    #[test]
    fn sphere_depth_is_nearest_at_the_center() {
        let fb = render(ShadingMode::Phong);
        let center_idx = (SIZE / 2 * SIZE + SIZE / 2) as usize;
        let center_depth = fb.depth()[center_idx];
        assert!(center_depth < f32::MAX);
        // Every other covered pixel is at least as far away, up to the
        // faceting of the tessellated surface.
        for &d in fb.depth() {
            if d != f32::MAX {
                assert!(d >= center_depth - 1e-4);
            }
        }
    }
}
