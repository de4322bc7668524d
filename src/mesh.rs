//! Procedural sphere geometry.
//!
//! The sphere is built ring-by-ring from spherical coordinates: interior
//! latitude rings first, then the north and south pole vertices. Triangle
//! indices split each interior quad along a diagonal and add a fan around
//! each pole, all wound counter-clockwise when viewed from outside.

use std::collections::TryReserveError;
use std::f32::consts::PI;

use thiserror::Error;

use crate::math::vec3::Vec3;

/// Errors produced while building mesh geometry.
///
/// Geometry generation is a pure function of its integer parameters, so the
/// only way it can fail is when the backing storage cannot be allocated.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("failed to allocate mesh buffers: {0}")]
    Allocation(#[from] TryReserveError),
}

/// An indexed triangle mesh.
///
/// `vertices` are model-space positions in generation order; `indices` holds
/// one `[v0, v1, v2]` triple per triangle, each entry referencing `vertices`
/// by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over the triangles as position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.iter().map(|&[a, b, c]| {
            [
                self.vertices[a as usize],
                self.vertices[b as usize],
                self.vertices[c as usize],
            ]
        })
    }
}

/// Generates a unit sphere mesh.
///
/// `width` is the number of longitude divisions (>= 2), `height` the number
/// of latitude divisions (>= 3). The result has `(height-2)*width + 2`
/// vertices and `(height-2)*(width-1)*2` triangles. The function is pure and
/// deterministic: the same parameters always produce bit-identical output.
///
/// # Errors
///
/// Returns [`MeshError::Allocation`] if the vertex or index buffer cannot be
/// allocated. There is no other failure mode.
pub fn generate_sphere(width: u32, height: u32) -> Result<Mesh, MeshError> {
    debug_assert!(width >= 2, "width must be at least 2");
    debug_assert!(height >= 3, "height must be at least 3");

    // Count in usize so extreme parameters cannot wrap; an overflowing
    // count saturates and fails the reservation below instead.
    let vertex_count = (height as usize - 2)
        .checked_mul(width as usize)
        .and_then(|n| n.checked_add(2))
        .unwrap_or(usize::MAX);
    let triangle_count = (height as usize - 2)
        .checked_mul(width as usize - 1)
        .and_then(|n| n.checked_mul(2))
        .unwrap_or(usize::MAX);

    let mut vertices = Vec::new();
    vertices.try_reserve_exact(vertex_count)?;
    let mut indices = Vec::new();
    indices.try_reserve_exact(triangle_count)?;

    // Interior latitude rings, pole to pole. theta is the polar angle from
    // +Y, phi the azimuthal angle around Y.
    for j in 1..height - 1 {
        for i in 0..width {
            let theta = j as f32 / (height - 1) as f32 * PI;
            let phi = i as f32 / (width - 1) as f32 * 2.0 * PI;
            vertices.push(Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                -theta.sin() * phi.sin(),
            ));
        }
    }

    let north_pole = (height - 2) * width;
    let south_pole = north_pole + 1;
    vertices.push(Vec3::new(0.0, 1.0, 0.0));
    vertices.push(Vec3::new(0.0, -1.0, 0.0));

    // Interior quads, two triangles each, both CCW from outside.
    for j in 0..height.saturating_sub(3) {
        for i in 0..width - 1 {
            indices.push([j * width + i, (j + 1) * width + i + 1, j * width + i + 1]);
            indices.push([j * width + i, (j + 1) * width + i, (j + 1) * width + i + 1]);
        }
    }

    // Pole fans. The south fan reverses the ring order so it also faces
    // outward.
    let bottom_ring = (height - 3) * width;
    for i in 0..width - 1 {
        indices.push([north_pole, i, i + 1]);
        indices.push([south_pole, bottom_ring + i + 1, bottom_ring + i]);
    }

    Ok(Mesh { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertex_and_triangle_counts_match_formula() {
        for (width, height) in [(2, 3), (3, 4), (8, 6), (32, 16), (64, 33)] {
            let mesh = generate_sphere(width, height).unwrap();
            assert_eq!(
                mesh.vertices().len(),
                ((height - 2) * width + 2) as usize,
                "vertex count for {width}x{height}"
            );
            assert_eq!(
                mesh.triangle_count(),
                ((height - 2) * (width - 1) * 2) as usize,
                "triangle count for {width}x{height}"
            );
        }
    }

    #[test]
    fn all_indices_are_in_bounds() {
        let mesh = generate_sphere(32, 16).unwrap();
        let n = mesh.vertices().len() as u32;
        for tri in mesh.indices() {
            for &idx in tri {
                assert!(idx < n);
            }
        }
    }

    #[test]
    fn every_vertex_lies_on_the_unit_sphere() {
        let mesh = generate_sphere(32, 16).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        // The sphere is centered at the origin, so an outward-facing
        // triangle's geometric normal points along its centroid.
        let mesh = generate_sphere(32, 16).unwrap();
        for [a, b, c] in mesh.triangles() {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn poles_come_last() {
        let mesh = generate_sphere(8, 6).unwrap();
        let n = mesh.vertices().len();
        assert_eq!(mesh.vertices()[n - 2], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.vertices()[n - 1], Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn absurd_dimensions_fail_with_allocation_error() {
        // Counts far beyond addressable memory must surface as a failed
        // reservation, never as a wrapped-around buffer size.
        let err = generate_sphere(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, MeshError::Allocation(_)));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_sphere(32, 16).unwrap();
        let b = generate_sphere(32, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn minimal_sphere_is_fans_only() {
        // height == 3 has a single interior ring, so every triangle touches
        // a pole.
        let mesh = generate_sphere(4, 3).unwrap();
        assert_eq!(mesh.triangle_count(), 6);
        let north = (mesh.vertices().len() - 2) as u32;
        let south = north + 1;
        for tri in mesh.indices() {
            assert!(tri.contains(&north) || tri.contains(&south));
        }
    }
}
