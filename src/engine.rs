//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns the
//! framebuffer, builds the [`RenderContext`] from its configuration and drives
//! one [`RenderPass`] over every face of a model with the selected shader.

use std::path::Path;

use crate::colors;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::math::Vec3;
use crate::mesh::Mesh;
use crate::model::Model;
use crate::render::{DepthBuffer, FrameBuffer, RenderPass, RenderStats, Shader};
use crate::shaders::{facing_ratio, FlatShader, GouraudShader, PhongShader};
use crate::transform::{RenderContext, Viewport};

/// Shading presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// One color per face from the face normal; back faces culled.
    Flat,
    /// Per-vertex diffuse lighting over the diffuse map.
    Gouraud,
    /// Per-pixel lighting with normal and specular maps.
    #[default]
    Phong,
}

impl std::fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadingMode::Flat => write!(f, "Flat"),
            ShadingMode::Gouraud => write!(f, "Gouraud"),
            ShadingMode::Phong => write!(f, "Phong"),
        }
    }
}

/// What a render leaves behind besides the color image.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub depth: DepthBuffer,
    pub stats: RenderStats,
}

pub struct Engine {
    config: RenderConfig,
    framebuffer: FrameBuffer,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        let framebuffer = FrameBuffer::filled(config.width, config.height, config.background);
        Self {
            config,
            framebuffer,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_shading(&mut self, shading: ShadingMode) {
        self.config.shading = shading;
    }

    pub fn shading(&self) -> ShadingMode {
        self.config.shading
    }

    /// The most recently rendered frame.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Render `model` into the framebuffer, replacing the previous frame.
    pub fn render(&mut self, model: &Model) -> Result<RenderOutput, RenderError> {
        let viewport = Viewport::full(self.config.width, self.config.height, self.config.depth);
        let ctx = RenderContext::from_camera(&self.config.camera, &viewport)?;
        let mesh = model.mesh();

        self.framebuffer.clear(self.config.background);
        let mut pass = RenderPass::begin(&mut self.framebuffer);

        match self.config.shading {
            ShadingMode::Flat => {
                draw_flat(
                    &mut pass,
                    mesh,
                    &ctx,
                    self.config.base_color,
                    self.config.view_dir,
                );
            }
            ShadingMode::Gouraud => {
                let mut shader = GouraudShader::new(model, &ctx, self.config.light);
                draw_faces(&mut pass, &mut shader, mesh.face_count());
            }
            ShadingMode::Phong => {
                let mut shader = PhongShader::new(model, &ctx, self.config.light)?;
                draw_faces(&mut pass, &mut shader, mesh.face_count());
            }
        }

        let (depth, stats) = pass.finish();
        log::debug!(
            "{} pass over {}: {} faces drawn, {} culled, {} skipped, {} fragments",
            self.config.shading,
            mesh.name(),
            stats.faces_drawn,
            stats.faces_culled,
            stats.faces_skipped,
            stats.fragments_written
        );

        Ok(RenderOutput { depth, stats })
    }

    /// Load the model at `path`, texture maps included, and render it.
    pub fn render_file<P: AsRef<Path>>(&mut self, path: P) -> Result<RenderOutput, RenderError> {
        let model = Model::load(path)?;
        self.render(&model)
    }

    /// Write the current frame to `color_path` and `output`'s depth buffer to
    /// `depth_path`. The format follows each file's extension.
    pub fn save<C, D>(
        &self,
        output: &RenderOutput,
        color_path: C,
        depth_path: D,
    ) -> Result<(), RenderError>
    where
        C: AsRef<Path>,
        D: AsRef<Path>,
    {
        self.framebuffer.to_image().save(color_path.as_ref())?;
        output
            .depth
            .to_image(self.config.depth)
            .save(depth_path.as_ref())?;
        Ok(())
    }
}

/// Draw every face in mesh order.
fn draw_faces<S: Shader>(pass: &mut RenderPass<'_>, shader: &mut S, face_count: usize) {
    for face in 0..face_count {
        pass.draw_face(shader, face);
    }
}

/// Flat path: faces turned away from `view_dir` are culled, the rest are
/// drawn in `base_color` scaled by how directly they face the viewer.
fn draw_flat(
    pass: &mut RenderPass<'_>,
    mesh: &Mesh,
    ctx: &RenderContext,
    base_color: u32,
    view_dir: Vec3,
) {
    let mut shader = FlatShader::new(mesh, ctx, base_color);
    for face in 0..mesh.face_count() {
        let intensity = facing_ratio(mesh, face, view_dir);
        // Zero-area faces have a zero normal and land here too.
        if intensity <= 0.0 {
            pass.cull();
            continue;
        }
        shader.set_color(colors::modulate(base_color, intensity));
        pass.draw_face(&mut shader, face);
    }
}
