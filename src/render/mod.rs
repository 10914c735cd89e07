//! Rendering primitives: buffers, the triangle rasterizer and render passes.

pub mod depth_buffer;
pub mod framebuffer;
pub mod pass;
pub mod rasterizer;

pub use depth_buffer::DepthBuffer;
pub use framebuffer::FrameBuffer;
pub use pass::{RenderPass, RenderStats};
pub use rasterizer::{fill_triangle, interpolate, Shader};
