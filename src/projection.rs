//! Single-coefficient perspective projection.
//!
//! The [`Projection`] matrix is the identity with one off-diagonal entry,
//! `m[3][2] = coeff`. After the homogeneous divide a point at view-space depth
//! `z` is scaled by `1 / (1 + coeff * z)`, which foreshortens points further
//! from the eye when `coeff < 0`.

use crate::camera::Camera;
use crate::math::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    coeff: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::orthographic()
    }
}

impl Projection {
    pub fn perspective(coeff: f32) -> Self {
        Self { coeff }
    }

    /// No foreshortening: `coeff = 0`.
    pub fn orthographic() -> Self {
        Self::perspective(0.0)
    }

    /// Perspective for a camera: `coeff = -1 / |eye - center|`.
    ///
    /// A camera sitting on its target has no meaningful distance and falls
    /// back to orthographic.
    pub fn for_camera(camera: &Camera) -> Self {
        let distance = camera.distance();
        if distance > f32::EPSILON {
            Self::perspective(-1.0 / distance)
        } else {
            Self::orthographic()
        }
    }

    pub fn coeff(&self) -> f32 {
        self.coeff
    }

    pub fn is_orthographic(&self) -> bool {
        self.coeff == 0.0
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.coeff)
    }
}
