//! 4D vector for homogeneous coordinates.

use std::ops::{Add, Mul, Sub};

use super::vec3::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Embed a position (w=1) so translations apply to it.
    pub const fn point(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Embed a direction (w=0) so translations do not apply to it.
    pub const fn direction(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Convert to Vec3, discarding w.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Project back to 3D by dividing through by `w`.
    ///
    /// Returns `None` when `w` is zero or the result is not finite: the point
    /// lies on the plane through the eye and has no projection.
    pub fn homogeneous_divide(self) -> Option<Vec3> {
        if self.w == 0.0 || !self.w.is_finite() {
            return None;
        }
        let projected = Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w);
        projected.is_finite().then_some(projected)
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl From<Vec3> for Vec4 {
    /// Convert Vec3 to Vec4 as a point (w=1).
    fn from(v: Vec3) -> Self {
        Self::point(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_w() {
        let v = Vec4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.homogeneous_divide(), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn divide_by_zero_w_is_rejected() {
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, 0.0).homogeneous_divide(), None);
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, f32::NAN).homogeneous_divide(), None);
    }

    #[test]
    fn point_and_direction_differ_in_w() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec4::point(v).w, 1.0);
        assert_eq!(Vec4::direction(v).w, 0.0);
        assert_eq!(Vec4::point(v).xyz(), v);
    }
}
