//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - The coordinate system is right-handed, matching GL/glm: the camera looks
//!   down -Z and clip-space `w` equals `-z_view` under [`Mat4::frustum`].

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix (translation in the last column).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed view matrix looking from `eye` toward `target`.
    ///
    /// Matches `glm::lookAt`: with the eye at the origin looking down -Z and
    /// up = +Y this is the identity.
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        Self::new([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed perspective frustum matrix.
    ///
    /// Matches `glm::frustum`: maps the view-space frustum bounded by
    /// `(left, right, bottom, top)` at the near plane into clip space with
    /// `w = -z_view`, so geometry in front of the camera has `w > 0`.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Mat4::new([
            [
                2.0 * near / (right - left),
                0.0,
                (right + left) / (right - left),
                0.0,
            ],
            [
                0.0,
                2.0 * near / (top - bottom),
                (top + bottom) / (top - bottom),
                0.0,
            ],
            [
                0.0,
                0.0,
                -(far + near) / (far - near),
                -2.0 * far * near / (far - near),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-vector convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        Vec4::new(
            self.data[0][0] * v.x
                + self.data[0][1] * v.y
                + self.data[0][2] * v.z
                + self.data[0][3] * v.w,
            self.data[1][0] * v.x
                + self.data[1][1] * v.y
                + self.data[1][2] * v.z
                + self.data[1][3] * v.w,
            self.data[2][0] * v.x
                + self.data[2][1] * v.y
                + self.data[2][2] * v.z
                + self.data[2][3] * v.w,
            self.data[3][0] * v.x
                + self.data[3][1] * v.y
                + self.data[3][2] * v.z
                + self.data[3][3] * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_vector_unchanged() {
        let v = Vec4::point(1.0, -2.0, 3.0);
        assert_eq!(Mat4::identity() * v, v);
    }

    #[test]
    fn translation_then_scale_applies_right_to_left() {
        // Scale first, then translate.
        let m = Mat4::translation(10.0, 0.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
        let v = m * Vec4::point(1.0, 0.0, 0.0);
        assert_eq!(v.truncate(), Vec3::new(12.0, 0.0, 0.0));
    }

    #[test]
    fn look_at_origin_down_negative_z_is_identity() {
        let m = Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
        let v = Vec4::point(1.0, 2.0, -3.0);
        let out = m * v;
        assert_relative_eq!(out.x, v.x, epsilon = 1e-6);
        assert_relative_eq!(out.y, v.y, epsilon = 1e-6);
        assert_relative_eq!(out.z, v.z, epsilon = 1e-6);
        assert_relative_eq!(out.w, v.w, epsilon = 1e-6);
    }

    #[test]
    fn frustum_w_is_negated_view_z() {
        let m = Mat4::frustum(-0.1, 0.1, -0.1, 0.1, 0.1, 100.0);
        let clip = m * Vec4::point(0.0, 0.0, -7.0);
        assert_relative_eq!(clip.w, 7.0, epsilon = 1e-5);
    }

    #[test]
    fn frustum_maps_near_and_far_to_ndc_range() {
        let m = Mat4::frustum(-0.1, 0.1, -0.1, 0.1, 0.1, 100.0);
        let near = (m * Vec4::point(0.0, 0.0, -0.1)).homogeneous_divide();
        let far = (m * Vec4::point(0.0, 0.0, -100.0)).homogeneous_divide();
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn rotation_y_quarter_turn() {
        let m = Mat4::rotation_y(std::f32::consts::FRAC_PI_2);
        let v = (m * Vec4::point(1.0, 0.0, 0.0)).truncate();
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-6);
    }
}
