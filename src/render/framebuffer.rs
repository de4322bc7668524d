//! Owned color and depth buffers for one rendered image.
//!
//! The framebuffer is a value owned by the render pass and threaded through
//! it explicitly, never ambient global state. `color` is a flat
//! `width * height * 3` RGB byte array, row-major with the origin at the top
//! left; `depth` stores one normalized-device depth in [0, 1] per pixel and
//! is cleared to `f32::MAX`, which loses every strict less-than depth test.

use crate::math::vec3::Vec3;

pub struct Framebuffer {
    color: Vec<u8>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Creates cleared buffers: black color, far depth.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color: vec![0u8; size * 3],
            depth: vec![f32::MAX; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGB byte buffer, row-major from the top-left corner. This is what
    /// a display sink repaints.
    pub fn color(&self) -> &[u8] {
        &self.color
    }

    /// The per-pixel depth buffer in the same row-major order.
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize * 3;
            Some([self.color[idx], self.color[idx + 1], self.color[idx + 2]])
        } else {
            None
        }
    }

    /// Depth-compare-and-write for one pixel.
    ///
    /// If `depth` is strictly less than the stored value the new depth is
    /// written, `shade` is invoked exactly once and its display-space color
    /// is quantized to 8 bits per channel. Ties never overwrite, so draw
    /// order cannot change the result for non-coincident geometry. The whole
    /// compare-write sequence happens in this single call; parallel callers
    /// must keep it atomic per pixel.
    ///
    /// Out-of-bounds coordinates are skipped and return false. The
    /// rasterizer's clamped bounding box never produces them.
    #[inline]
    pub fn shade_pixel<F>(&mut self, x: i32, y: i32, depth: f32, shade: F) -> bool
    where
        F: FnOnce() -> Vec3,
    {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return false;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        if depth < self.depth[idx] {
            self.depth[idx] = depth;
            let color = shade().clamp01();
            self.color[idx * 3] = (color.x * 255.0).round() as u8;
            self.color[idx * 3 + 1] = (color.y * 255.0).round() as u8;
            self.color[idx * 3 + 2] = (color.z * 255.0).round() as u8;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffers_are_cleared() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.color().len(), 4 * 3 * 3);
        assert_eq!(fb.depth().len(), 4 * 3);
        assert!(fb.color().iter().all(|&c| c == 0));
        assert!(fb.depth().iter().all(|&d| d == f32::MAX));
    }

    #[test]
    fn nearer_depth_wins_and_quantizes() {
        let mut fb = Framebuffer::new(2, 2);
        assert!(fb.shade_pixel(1, 0, 0.5, || Vec3::new(1.0, 0.5, 0.0)));
        assert_eq!(fb.pixel(1, 0), Some([255, 128, 0]));
        // Farther fragment loses; color untouched.
        assert!(!fb.shade_pixel(1, 0, 0.7, || Vec3::ONE));
        assert_eq!(fb.pixel(1, 0), Some([255, 128, 0]));
        // Nearer fragment replaces.
        assert!(fb.shade_pixel(1, 0, 0.2, || Vec3::ONE));
        assert_eq!(fb.pixel(1, 0), Some([255, 255, 255]));
    }

    #[test]
    fn equal_depth_does_not_overwrite() {
        let mut fb = Framebuffer::new(1, 1);
        assert!(fb.shade_pixel(0, 0, 0.5, || Vec3::ONE));
        assert!(!fb.shade_pixel(0, 0, 0.5, || Vec3::ZERO));
        assert_eq!(fb.pixel(0, 0), Some([255, 255, 255]));
    }

    #[test]
    fn out_of_bounds_is_skipped() {
        let mut fb = Framebuffer::new(2, 2);
        assert!(!fb.shade_pixel(-1, 0, 0.0, || Vec3::ONE));
        assert!(!fb.shade_pixel(0, 2, 0.0, || Vec3::ONE));
        assert!(fb.color().iter().all(|&c| c == 0));
    }

    #[test]
    fn shade_callback_not_invoked_on_failed_test() {
        let mut fb = Framebuffer::new(1, 1);
        fb.shade_pixel(0, 0, 0.1, || Vec3::ONE);
        let mut called = false;
        fb.shade_pixel(0, 0, 0.9, || {
            called = true;
            Vec3::ZERO
        });
        assert!(!called);
    }
}
