//! Look-at camera.
//!
//! # Coordinate System
//!
//! Right-handed view space: the camera sits on the positive Z axis of its own
//! basis and looks toward `-Z`, so points nearer the eye have larger Z. The
//! depth test relies on this ("larger = nearer").

use crate::error::RenderError;
use crate::math::{Mat4, Vec3};

/// A camera at `eye` looking at `center`, with `up` as the roll hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, -1.0, 5.0), Vec3::ZERO, Vec3::UP)
    }
}

impl Camera {
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self { eye, center, up }
    }

    /// Distance from the eye to the point it looks at.
    pub fn distance(&self) -> f32 {
        (self.eye - self.center).magnitude()
    }

    /// Unit vector from the eye toward the center.
    pub fn direction(&self) -> Vec3 {
        (self.center - self.eye).normalize()
    }

    /// Builds the view ("look-at") matrix.
    ///
    /// Fails when the basis is undefined: `eye == center`, or `up` parallel
    /// to the viewing direction.
    pub fn view_matrix(&self) -> Result<Mat4, RenderError> {
        Mat4::look_at(self.eye, self.center, self.up).ok_or(RenderError::DegenerateCamera {
            eye: [self.eye.x, self.eye.y, self.eye.z],
            center: [self.center.x, self.center.y, self.center.z],
            up: [self.up.x, self.up.y, self.up.z],
        })
    }
}
