//! Errors surfaced while setting up or finishing a render.

use crate::mesh::LoadError;

/// Errors produced by the renderer.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("camera basis is undefined: eye {eye:?} and center {center:?} coincide or up {up:?} is parallel to the view direction")]
    DegenerateCamera {
        eye: [f32; 3],
        center: [f32; 3],
        up: [f32; 3],
    },

    #[error("{what} matrix is singular and has no inverse")]
    SingularMatrix { what: &'static str },

    #[error("viewport {width}x{height} has no pixels")]
    EmptyViewport { width: u32, height: u32 },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
