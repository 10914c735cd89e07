//! A mesh together with the texture maps its shaders read.
//!
//! Texture maps are looked up next to the OBJ file by naming convention:
//! `<stem>_diffuse.tga`, `<stem>_nm.tga` (normal map) and `<stem>_spec.tga`
//! (specular exponent). Each map is optional; the lookups below document the
//! fallback used when one is absent.

use std::path::{Path, PathBuf};

use crate::colors;
use crate::math::{Vec2, Vec3};
use crate::mesh::{LoadError, Mesh};
use crate::texture::Texture;

#[derive(Debug, Clone)]
pub struct Model {
    mesh: Mesh,
    diffuse: Option<Texture>,
    normal_map: Option<Texture>,
    specular: Option<Texture>,
}

impl Model {
    /// Wrap a mesh with no texture maps.
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            diffuse: None,
            normal_map: None,
            specular: None,
        }
    }

    /// Load a model from an OBJ file plus whichever texture maps sit beside it.
    ///
    /// A missing or unparsable OBJ file is an error. A missing texture map is
    /// only a warning, but a texture map that exists and fails to decode is an
    /// error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mesh = Mesh::from_obj(path)?;
        log::info!(
            "loaded {}: {} vertices, {} faces",
            path.display(),
            mesh.vertex_count(),
            mesh.face_count()
        );

        let mut model = Self::new(mesh);
        model.diffuse = load_map(path, "diffuse")?;
        model.normal_map = load_map(path, "nm")?;
        model.specular = load_map(path, "spec")?;
        Ok(model)
    }

    pub fn with_diffuse(mut self, texture: Texture) -> Self {
        self.diffuse = Some(texture);
        self
    }

    pub fn with_normal_map(mut self, texture: Texture) -> Self {
        self.normal_map = Some(texture);
        self
    }

    pub fn with_specular(mut self, texture: Texture) -> Self {
        self.specular = Some(texture);
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn has_diffuse(&self) -> bool {
        self.diffuse.is_some()
    }

    /// Diffuse color at `uv`; white without a diffuse map.
    pub fn diffuse(&self, uv: Vec2) -> u32 {
        self.diffuse
            .as_ref()
            .map_or(colors::WHITE, |tex| tex.sample(uv.x, uv.y))
    }

    /// Model-space normal from the normal map at `uv`, if there is one.
    pub fn normal(&self, uv: Vec2) -> Option<Vec3> {
        self.normal_map
            .as_ref()
            .map(|tex| tex.sample_normal(uv.x, uv.y))
    }

    /// Specular exponent at `uv`, if there is a specular map.
    pub fn specular(&self, uv: Vec2) -> Option<f32> {
        self.specular
            .as_ref()
            .map(|tex| tex.sample_scalar(uv.x, uv.y))
    }
}

fn map_path(obj_path: &Path, suffix: &str) -> PathBuf {
    let stem = obj_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    obj_path.with_file_name(format!("{stem}_{suffix}.tga"))
}

fn load_map(obj_path: &Path, suffix: &str) -> Result<Option<Texture>, LoadError> {
    let path = map_path(obj_path, suffix);
    if !path.is_file() {
        log::warn!("no {suffix} map at {}, using fallback", path.display());
        return Ok(None);
    }

    let texture = Texture::from_file(&path)?;
    log::debug!(
        "loaded {suffix} map {} ({}x{})",
        path.display(),
        texture.width(),
        texture.height()
    );
    Ok(Some(texture))
}
