use std::path::Path;

use crate::colors;
use crate::math::Vec3;
use crate::mesh::LoadError;

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Clamp to the nearest edge texel.
    #[default]
    ClampToEdge,
    /// Tile the texture.
    Repeat,
}

/// Represents a 2D texture for texture mapping.
#[derive(Debug, Clone)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format, top row first.
    width: u32,
    height: u32,
    wrap: WrapMode,
}

impl Texture {
    /// Load a texture from an image file (TGA, PNG, JPG, ...).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| LoadError::Texture {
                path: path.display().to_string(),
                source,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();

        let data = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                colors::from_rgba8(r, g, b, a)
            })
            .collect();

        Self::from_pixels(width, height, data).ok_or_else(|| LoadError::EmptyTexture {
            path: path.display().to_string(),
        })
    }

    /// Wrap ARGB pixels (top row first). Returns `None` when the dimensions
    /// are zero or do not match the pixel count.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            wrap: WrapMode::default(),
        })
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// # UV Coordinate Convention
    /// - UV coordinates are in [0,1] range
    /// - (0,0) = bottom-left in OBJ convention, but textures are stored top-left origin
    /// - We flip V to correct for this: v_corrected = 1.0 - v
    ///
    /// Coordinates outside [0,1] follow the texture's [`WrapMode`].
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let (u, v) = match self.wrap {
            WrapMode::ClampToEdge => (u.clamp(0.0, 1.0), (1.0 - v).clamp(0.0, 1.0)),
            // rem_euclid handles negative values correctly, unlike %
            WrapMode::Repeat => (u.rem_euclid(1.0), (1.0 - v).rem_euclid(1.0)),
        };

        // NaN saturates to 0 in the cast.
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.data[(y * self.width + x) as usize]
    }

    /// Decode a tangent-free normal map texel: RGB `[0, 255]` to `[-1, 1]`.
    pub fn sample_normal(&self, u: f32, v: f32) -> Vec3 {
        let [r, g, b, _] = colors::to_rgba8(self.sample(u, v));
        let decode = |c: u8| c as f32 / 255.0 * 2.0 - 1.0;
        Vec3::new(decode(r), decode(g), decode(b))
    }

    /// The red channel as a raw `0.0..=255.0` value (grayscale maps).
    pub fn sample_scalar(&self, u: f32, v: f32) -> f32 {
        colors::to_rgba8(self.sample(u, v))[0] as f32
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED, WHITE};

    // Top row: RED GREEN, bottom row: BLUE WHITE.
    fn checker() -> Texture {
        Texture::from_pixels(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap()
    }

    #[test]
    fn v_axis_points_up() {
        let tex = checker();
        assert_eq!(tex.sample(0.25, 0.25), BLUE);
        assert_eq!(tex.sample(0.75, 0.75), GREEN);
    }

    #[test]
    fn clamp_to_edge_by_default() {
        let tex = checker();
        assert_eq!(tex.sample(-3.0, 0.25), BLUE);
        assert_eq!(tex.sample(7.0, 0.25), WHITE);
        assert_eq!(tex.sample(0.25, 9.0), RED);
        assert_eq!(tex.sample(1.0, 1.0), GREEN);
    }

    #[test]
    fn repeat_wraps() {
        let tex = checker().with_wrap(WrapMode::Repeat);
        assert_eq!(tex.sample(1.25, 0.25), BLUE);
        assert_eq!(tex.sample(-0.25, 0.25), WHITE);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        assert!(Texture::from_pixels(2, 2, vec![RED; 3]).is_none());
        assert!(Texture::from_pixels(0, 0, Vec::new()).is_none());
    }

    #[test]
    fn normal_map_decodes_to_unit_range() {
        let tex = Texture::from_pixels(1, 1, vec![colors::from_rgba8(255, 128, 0, 255)]).unwrap();
        let n = tex.sample_normal(0.5, 0.5);
        assert_eq!(n.x, 1.0);
        assert_eq!(n.z, -1.0);
        assert!(n.y.abs() < 0.01);
    }

    #[test]
    fn missing_texture_file_is_an_error() {
        assert!(matches!(
            Texture::from_file("no/such/texture.tga"),
            Err(LoadError::Texture { .. })
        ));
    }
}
