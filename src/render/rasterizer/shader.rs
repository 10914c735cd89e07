//! The two-stage shader contract the rasterizer drives.
//!
//! # Architecture
//!
//! The rasterizer handles:
//! - Bounding box computation
//! - Barycentric coordinate calculation and inside/outside testing
//! - Depth interpolation and the depth test
//!
//! The shader handles:
//! - Projecting each corner of a face to screen space (`vertex`)
//! - Carrying per-corner attributes ("varyings") to the pixel stage
//! - Interpolating those attributes and computing the final color (`fragment`)

use std::ops::{Add, Mul};

use crate::math::Vec3;

/// A rendering style, split into a per-corner and a per-pixel stage.
///
/// For every face the driver calls [`Shader::vertex`] for corners 0, 1 and 2
/// before the rasterizer calls [`Shader::fragment`] for any pixel of that
/// face. Varyings therefore live in the shader value, one slot per corner,
/// and are overwritten by the next face.
pub trait Shader {
    /// Project corner `corner` of face `face` to screen space and store the
    /// corner's varyings.
    ///
    /// Returns `None` when the corner has no projection (it lies on the eye
    /// plane); the face is then skipped.
    fn vertex(&mut self, face: usize, corner: usize) -> Option<Vec3>;

    /// Compute the color of a pixel from its barycentric weights.
    ///
    /// `lambda` holds three non-negative weights summing to 1. Returning
    /// `None` discards the pixel: neither the color nor the depth is written.
    fn fragment(&self, lambda: [f32; 3]) -> Option<u32>;
}

/// Interpolate a per-corner attribute with barycentric weights:
/// `λ₀·a₀ + λ₁·a₁ + λ₂·a₂`.
#[inline]
pub fn interpolate<T>(lambda: [f32; 3], values: [T; 3]) -> T
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    values[0] * lambda[0] + values[1] * lambda[1] + values[2] * lambda[2]
}
