//! A CPU-based software rasterizer.
//!
//! This crate renders a triangle mesh into a 2D image without a GPU: vertices
//! go through a look-at camera, a one-coefficient perspective and a viewport,
//! triangles are filled with barycentric coordinates, visibility is resolved
//! with a per-pixel depth buffer, and a pluggable [`Shader`] colors each pixel.
//!
//! # Quick Start
//!
//! ```no_run
//! use softgl::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = Engine::new(RenderConfig::default());
//! let output = engine.render_file("obj/african_head.obj")?;
//! engine.save(&output, "output.tga", "zbuffer.tga")?;
//! # Ok(())
//! # }
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod model;
pub mod projection;
pub mod render;
pub mod shaders;
pub mod texture;
pub mod transform;

#[cfg(test)]
pub(crate) mod scratch;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use engine::{Engine, RenderOutput, ShadingMode};
pub use error::RenderError;
pub use mesh::{LoadError, Mesh};
pub use model::Model;
pub use projection::Projection;
pub use render::{DepthBuffer, FrameBuffer, RenderPass, RenderStats, Shader};
pub use transform::{RenderContext, Viewport};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use softgl::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::Camera;

    // Engine
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Engine, RenderOutput, ShadingMode};
    pub use crate::error::RenderError;

    // Model
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{LoadError, Mesh};
    pub use crate::model::Model;
    pub use crate::texture::{Texture, WrapMode};

    // Transform
    pub use crate::projection::Projection;
    pub use crate::transform::{RenderContext, Viewport};

    // Math
    pub use crate::math::{Mat4, Matrix, Vec2, Vec2i, Vec3, Vec4};

    // Rendering
    pub use crate::render::{
        interpolate, DepthBuffer, FrameBuffer, RenderPass, RenderStats, Shader,
    };
    pub use crate::shaders::{FlatShader, GouraudShader, PhongShader};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{fill_triangle, DepthBuffer, FrameBuffer, Shader};
}
