//! Command-line renderer.
//!
//! Usage: `softgl [MESH]`
//!
//! Renders the mesh (default `obj/african_head.obj`) with the default
//! configuration and writes `output.tga` (color) and `zbuffer.tga` (depth)
//! to the working directory. Set `RUST_LOG` for more detail.

use anyhow::Context;
use softgl::logging::{init_logging, DEFAULT_FILTER};
use softgl::{Engine, RenderConfig};

const DEFAULT_MESH: &str = "obj/african_head.obj";
const COLOR_OUTPUT: &str = "output.tga";
const DEPTH_OUTPUT: &str = "zbuffer.tga";

fn main() -> anyhow::Result<()> {
    init_logging(DEFAULT_FILTER);

    let mesh_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MESH.to_string());

    let config = RenderConfig::default();
    log::info!(
        "rendering {mesh_path} at {}x{} with {} shading",
        config.width,
        config.height,
        config.shading
    );
    let mut engine = Engine::new(config);
    let output = engine
        .render_file(&mesh_path)
        .with_context(|| format!("failed to render {mesh_path}"))?;
    engine
        .save(&output, COLOR_OUTPUT, DEPTH_OUTPUT)
        .with_context(|| format!("failed to write {COLOR_OUTPUT} and {DEPTH_OUTPUT}"))?;

    log::info!(
        "wrote {COLOR_OUTPUT} and {DEPTH_OUTPUT}: {} faces drawn, {} fragments",
        output.stats.faces_drawn,
        output.stats.fragments_written
    );
    Ok(())
}
