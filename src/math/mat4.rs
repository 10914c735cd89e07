//! 4x4 homogeneous transforms.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! # Example
//! ```ignore
//! let screen = viewport * projection * view;  // view applied first
//! let pixel = screen.transform_point(vertex);
//! ```

use std::ops::Mul;

use super::matrix::Matrix;
use super::vec3::Vec3;
use super::vec4::Vec4;

pub type Mat4 = Matrix<4, 4>;

impl Matrix<4, 4> {
    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-major convention).
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

    /// Creates the single-coefficient perspective matrix.
    ///
    /// Identity with `m[3][2] = coeff`, so a point ends up with
    /// `w = 1 + coeff * z` and the homogeneous divide shrinks it with distance.
    /// `coeff = 0` leaves `w = 1`: an orthographic projection.
    pub fn perspective(coeff: f32) -> Self {
        let mut m = Mat4::identity();
        m.set(3, 2, coeff);
        m
    }

    /// Creates a view matrix for a camera at `eye` looking at `center`.
    ///
    /// Builds the orthonormal basis
    /// - `z = normalize(eye - center)` (camera looks down `-z`)
    /// - `x = normalize(up × z)`
    /// - `y = z × x`
    ///
    /// and returns `Rotation(x, y, z) * Translation(-center)`.
    ///
    /// Returns `None` if `eye == center` or `up` is parallel to the viewing
    /// direction, since the basis is undefined in both cases.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Option<Self> {
        let z = (eye - center).try_normalize()?;
        let x = up.cross(z).try_normalize()?;
        let y = z.cross(x);

        // Rotation matrix (basis vectors as rows)
        let rotation = Mat4::new([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Some(rotation * Mat4::translation(-center.x, -center.y, -center.z))
    }

    /// Transform a point: appends `w = 1`, multiplies, then divides by `w`.
    ///
    /// Returns `None` when the resulting `w` is zero (the point sits on the
    /// eye plane of a perspective transform).
    pub fn transform_point(&self, p: Vec3) -> Option<Vec3> {
        (*self * Vec4::point(p)).homogeneous_divide()
    }

    /// Transform a direction: appends `w = 0` and skips the divide.
    ///
    /// Used for normals and light directions, which translations must not move.
    pub fn transform_vector(&self, d: Vec3) -> Vec3 {
        (*self * Vec4::direction(d)).xyz()
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            let [a, b, c, d] = self.row(r);
            Vec4::new(a, b, c, d).dot(v)
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}
