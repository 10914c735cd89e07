//! Lighting types for the renderer.

use crate::math::Vec3;

/// A light infinitely far away, shining uniformly along one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector pointing from the surface toward the light.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, 1.0, 1.0))
    }
}

impl DirectionalLight {
    /// Create a light shining from `direction`. The direction is normalized.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Lambertian intensity `n · l` for a unit normal, clamped to `[0, 1]`.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_no_illumination() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 0.0);
    }

    #[test]
    fn test_angled_illumination() {
        let light = DirectionalLight::new(Vec3::new(0.0, 1.0, 1.0));
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(light.intensity(Vec3::UP), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_default_is_normalized() {
        assert_relative_eq!(DirectionalLight::default().direction.magnitude(), 1.0);
    }
}
