//! Color buffer with bounds-checked 2D pixel access.
//!
//! Row `y = 0` is the **bottom** row, matching the viewport transform where
//! screen Y grows upward. [`FrameBuffer::to_image`] flips the rows so the
//! encoded image comes out upright.

use image::{Rgba, RgbaImage};

use crate::colors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, colors::BLACK)
    }

    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        Self {
            color_buffer: vec![color; (width as usize) * (height as usize)],
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

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Encode as an RGBA image with the origin moved to the top-left.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let row = self.height - 1 - y;
            let color = self.color_buffer[(row * self.width + x) as usize];
            Rgba(colors::to_rgba8(color))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{RED, WHITE};

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set(-1, 0, WHITE);
        fb.set(4, 0, WHITE);
        fb.set(0, 3, WHITE);
        assert!(fb.pixels().iter().all(|&c| c == colors::BLACK));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, -1), None);
    }

    #[test]
    fn set_then_get() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set(3, 2, RED);
        assert_eq!(fb.get(3, 2), Some(RED));
        assert_eq!(fb.pixels()[2 * 4 + 3], RED);
    }

    #[test]
    fn image_is_flipped_to_top_left_origin() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, RED);
        let img = fb.to_image();
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
