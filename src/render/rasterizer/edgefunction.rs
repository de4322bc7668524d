//! Edge function-based triangle traversal with depth testing.
//!
//! # Algorithm
//!
//! For an edge from point A to point B, the edge function at point C is
//!
//! ```text
//! E(C) = (C.x - A.x) * (B.y - A.y) - (C.y - A.y) * (B.x - A.x)
//! ```
//!
//! the 2D cross product of (B - A) and (C - A). Evaluated against all three
//! directed edges, a pixel center is inside the triangle iff all three values
//! share the sign of the triangle's signed twice-area, and dividing by that
//! area yields barycentric weights that sum to exactly 1.
//!
//! # Parallelism
//!
//! The traversal is embarrassingly parallel per triangle or per pixel tile:
//! the framebuffer is the only shared mutable state, and correctness only
//! requires that [`Framebuffer::shade_pixel`]'s depth-compare-and-write stays
//! atomic per pixel. This crate runs it sequentially.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use log::trace;

use super::shader::{Barycentric, FragmentShader};
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;
use crate::render::framebuffer::Framebuffer;

/// Below this, a clip-space `w` is treated as behind the camera or too
/// ill-conditioned to divide by.
const EPSILON_W: f32 = 1e-5;

/// Slack allowed on the NDC depth range before a fragment is discarded.
const DEPTH_RANGE_SLACK: f32 = 1e-5;

/// Signed parallelogram area of (b - a) x (c - a).
#[inline]
fn edge_function(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// Rasterizes one clip-space triangle into the framebuffer.
///
/// The caller supplies the per-vertex attributes inside `shader`; the
/// rasterizer only finds covered pixels, resolves depth and hands the
/// perspective-correct [`Barycentric`] weights to the shader.
///
/// Degenerate input - every vertex behind the near plane, a `w` too small to
/// divide by, zero screen area, or a vanishing interpolation denominator at
/// some pixel - is skipped silently; a projected triangle stream legitimately
/// contains such triangles and they simply contribute no pixels.
pub fn rasterize_triangle<S: FragmentShader>(clip: [Vec4; 3], shader: &S, fb: &mut Framebuffer) {
    // Behind-camera guard: nothing to draw when the whole triangle is at or
    // behind the eye plane. Individual near-zero w would make the
    // perspective divide explode, so those are dropped too.
    if clip.iter().all(|v| v.w < EPSILON_W) {
        return;
    }
    if clip.iter().any(|v| v.w.abs() < EPSILON_W) {
        return;
    }

    let inv_w = [1.0 / clip[0].w, 1.0 / clip[1].w, 1.0 / clip[2].w];
    let ndc = [
        clip[0].truncate() * inv_w[0],
        clip[1].truncate() * inv_w[1],
        clip[2].truncate() * inv_w[2],
    ];

    // NDC -> screen, flipping Y because rows grow downward on screen.
    let width = fb.width() as f32;
    let height = fb.height() as f32;
    let screen = [
        Vec2::new((ndc[0].x + 1.0) * 0.5 * width, (1.0 - ndc[0].y) * 0.5 * height),
        Vec2::new((ndc[1].x + 1.0) * 0.5 * width, (1.0 - ndc[1].y) * 0.5 * height),
        Vec2::new((ndc[2].x + 1.0) * 0.5 * width, (1.0 - ndc[2].y) * 0.5 * height),
    ];

    let area = edge_function(screen[0], screen[1], screen[2]);
    if area.abs() < f32::EPSILON {
        return;
    }

    // Clamped integer bounding box over pixel centers.
    let min_x = (screen[0].x.min(screen[1].x).min(screen[2].x).floor() as i32).max(0);
    let max_x =
        (screen[0].x.max(screen[1].x).max(screen[2].x).ceil() as i32).min(fb.width() as i32 - 1);
    let min_y = (screen[0].y.min(screen[1].y).min(screen[2].y).floor() as i32).max(0);
    let max_y =
        (screen[0].y.max(screen[1].y).max(screen[2].y).ceil() as i32).min(fb.height() as i32 - 1);

    let z_ndc = [ndc[0].z, ndc[1].z, ndc[2].z];
    let mut first_covered = true;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

            let w0 = edge_function(screen[1], screen[2], p);
            let w1 = edge_function(screen[2], screen[0], p);
            let w2 = edge_function(screen[0], screen[1], p);

            // Inside iff all edge values share the area's sign convention.
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if !inside {
                continue;
            }

            let lambda = [w0 / area, w1 / area, w2 / area];
            let Some(bary) = Barycentric::new(lambda, inv_w) else {
                continue;
            };

            let depth_ndc = bary.interpolate_scalar(z_ndc);
            if depth_ndc < -1.0 - DEPTH_RANGE_SLACK || depth_ndc > 1.0 + DEPTH_RANGE_SLACK {
                continue;
            }
            let depth = (depth_ndc + 1.0) * 0.5;

            if first_covered {
                trace!("first covered pixel ({x}, {y}), ndc depth {depth_ndc}");
                first_covered = false;
            }

            debug_assert!(x >= 0 && x < fb.width() as i32 && y >= 0 && y < fb.height() as i32);
            fb.shade_pixel(x, y, depth, || shader.shade(&bary));
        }
    }
}
