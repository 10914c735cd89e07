//! Render settings, built in code.

use crate::camera::Camera;
use crate::colors;
use crate::engine::ShadingMode;
use crate::light::DirectionalLight;
use crate::math::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Depth range the viewport maps `z` into; also scales the depth image.
    pub depth: f32,
    pub camera: Camera,
    pub light: DirectionalLight,
    pub shading: ShadingMode,
    /// Flat shading: color of a face lit head-on.
    pub base_color: u32,
    /// Flat shading: direction the viewer looks, for culling and intensity.
    pub view_dir: Vec3,
    pub background: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            depth: 255.0,
            camera: Camera::default(),
            light: DirectionalLight::default(),
            shading: ShadingMode::default(),
            base_color: colors::WHITE,
            view_dir: Vec3::FORWARD,
            background: colors::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }
}
