//! The model-to-screen transform pipeline.
//!
//! For any vertex `v`: `screen = Viewport · Projection · View · v`.
//!
//! [`RenderContext`] holds the three matrices for one render pass. It is built
//! once before any face is drawn and handed by reference to every stage that
//! needs it.

use crate::camera::Camera;
use crate::error::RenderError;
use crate::math::{Mat4, Vec3};
use crate::projection::Projection;

/// Maps the canonical `[-1, 1]` cube to a pixel rectangle and a depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Depth of the far end of the range: `z = -1` maps to 0, `z = 1` to `depth`.
    pub depth: f32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: u32, height: u32, depth: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            depth,
        }
    }

    /// Viewport covering a whole `width x height` target.
    pub fn full(width: u32, height: u32, depth: f32) -> Self {
        Self::new(0, 0, width, height, depth)
    }

    pub fn matrix(&self) -> Mat4 {
        let half_w = self.width as f32 / 2.0;
        let half_h = self.height as f32 / 2.0;
        let half_d = self.depth / 2.0;
        Mat4::translation(self.x as f32 + half_w, self.y as f32 + half_h, half_d)
            * Mat4::scaling(half_w, half_h, half_d)
    }
}

/// View, projection and viewport for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    view: Mat4,
    projection: Mat4,
    viewport: Mat4,
    /// Cached `viewport * projection * view`.
    screen: Mat4,
}

impl RenderContext {
    pub fn new(view: Mat4, projection: Mat4, viewport: Mat4) -> Self {
        Self {
            view,
            projection,
            viewport,
            screen: viewport * projection * view,
        }
    }

    /// Context for a camera: look-at view plus the camera's own perspective.
    pub fn from_camera(camera: &Camera, viewport: &Viewport) -> Result<Self, RenderError> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(RenderError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let view = camera.view_matrix()?;
        let projection = Projection::for_camera(camera);
        Ok(Self::new(view, projection.matrix(), viewport.matrix()))
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn viewport(&self) -> Mat4 {
        self.viewport
    }

    /// The full model-to-screen matrix.
    pub fn screen_matrix(&self) -> Mat4 {
        self.screen
    }

    /// `projection * view`: model space to (pre-viewport) clip space.
    pub fn clip_matrix(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Inverse-transpose of [`RenderContext::clip_matrix`], for transforming normals.
    pub fn normal_matrix(&self) -> Result<Mat4, RenderError> {
        self.clip_matrix()
            .inverse()
            .map(|inv| inv.transpose())
            .ok_or(RenderError::SingularMatrix {
                what: "projection * view",
            })
    }

    /// Map a model-space point to screen space: x,y in pixels, z in the
    /// viewport's depth range.
    ///
    /// Returns `None` for points on the eye plane, which have no projection.
    #[inline]
    pub fn to_screen(&self, p: Vec3) -> Option<Vec3> {
        self.screen.transform_point(p)
    }
}
