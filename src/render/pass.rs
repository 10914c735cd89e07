//! One rendering pass over one framebuffer.
//!
//! A [`RenderPass`] borrows the framebuffer, allocates a depth buffer of the
//! same size and counts what happens to every face. [`RenderPass::finish`]
//! hands the depth buffer back for debugging output.

use super::depth_buffer::DepthBuffer;
use super::framebuffer::FrameBuffer;
use super::rasterizer::{fill_triangle, Shader};
use crate::math::Vec3;

/// Per-pass counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces_drawn: usize,
    /// Rejected by back-face culling before rasterization.
    pub faces_culled: usize,
    /// A corner had no screen-space projection.
    pub faces_skipped: usize,
    pub fragments_written: usize,
}

pub struct RenderPass<'a> {
    framebuffer: &'a mut FrameBuffer,
    depth: DepthBuffer,
    stats: RenderStats,
}

impl<'a> RenderPass<'a> {
    /// Start a pass. The depth buffer starts at [`DepthBuffer::FARTHEST`].
    pub fn begin(framebuffer: &'a mut FrameBuffer) -> Self {
        let depth = DepthBuffer::new(framebuffer.width(), framebuffer.height());
        Self {
            framebuffer,
            depth,
            stats: RenderStats::default(),
        }
    }

    /// Run the vertex stage for the three corners of `face`, then rasterize.
    ///
    /// Returns `false` if the face was skipped because a corner could not
    /// be projected.
    pub fn draw_face<S: Shader + ?Sized>(&mut self, shader: &mut S, face: usize) -> bool {
        let mut screen = [Vec3::ZERO; 3];
        for (corner, slot) in screen.iter_mut().enumerate() {
            match shader.vertex(face, corner) {
                Some(p) => *slot = p,
                None => {
                    log::trace!("face {face}: corner {corner} has no projection, skipped");
                    self.stats.faces_skipped += 1;
                    return false;
                }
            }
        }

        self.draw_triangle(screen, shader);
        true
    }

    /// Rasterize an already projected triangle with a primed shader.
    pub fn draw_triangle<S: Shader + ?Sized>(&mut self, screen: [Vec3; 3], shader: &S) {
        let written = fill_triangle(screen, shader, &mut *self.framebuffer, &mut self.depth);
        self.stats.faces_drawn += 1;
        self.stats.fragments_written += written;
    }

    /// Record a face rejected before rasterization.
    pub fn cull(&mut self) {
        self.stats.faces_culled += 1;
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &*self.framebuffer
    }

    pub fn finish(self) -> (DepthBuffer, RenderStats) {
        (self.depth, self.stats)
    }
}
