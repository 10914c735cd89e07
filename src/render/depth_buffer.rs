//! Per-pixel depth storage for hidden surface removal.
//!
//! Convention: **larger depth = nearer to the viewer**. A candidate passes
//! the test when it is at least as near as what is stored, so among equal
//! depths the most recent draw wins. The buffer starts at
//! [`DepthBuffer::FARTHEST`], which every finite depth beats.

use image::{GrayImage, Luma};

#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    /// "Nothing drawn here yet."
    pub const FARTHEST: f32 = f32::NEG_INFINITY;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depth_buffer: vec![Self::FARTHEST; (width as usize) * (height as usize)],
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

    /// Reset every pixel to [`DepthBuffer::FARTHEST`].
    pub fn clear(&mut self) {
        self.depth_buffer.fill(Self::FARTHEST);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Store a depth. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, depth: f32) {
        if let Some(idx) = self.index(x, y) {
            self.depth_buffer[idx] = depth;
        }
    }

    /// Depth test: `depth >= stored`. Out-of-bounds pixels never pass.
    #[inline]
    pub fn passes(&self, x: i32, y: i32, depth: f32) -> bool {
        self.get(x, y).is_some_and(|stored| depth >= stored)
    }

    pub fn values(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Grayscale visualization: `255 * depth / depth_range`, clamped, with
    /// untouched pixels black and the origin moved to the top-left.
    pub fn to_image(&self, depth_range: f32) -> GrayImage {
        let scale = if depth_range > 0.0 { 255.0 / depth_range } else { 0.0 };
        GrayImage::from_fn(self.width, self.height, |x, y| {
            let row = self.height - 1 - y;
            let depth = self.depth_buffer[(row * self.width + x) as usize];
            let value = if depth.is_finite() {
                (depth * scale).clamp(0.0, 255.0) as u8
            } else {
                0
            };
            Luma([value])
        })
    }
}
