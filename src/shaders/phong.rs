use crate::colors;
use crate::error::RenderError;
use crate::light::DirectionalLight;
use crate::math::{Mat4, Vec2, Vec3};
use crate::model::Model;
use crate::render::{interpolate, Shader};
use crate::transform::RenderContext;

/// Weight of the specular term relative to the diffuse term.
const SPECULAR_WEIGHT: f32 = 0.6;
/// Added to every channel so unlit surfaces are not pure black.
const AMBIENT: f32 = 5.0;

/// Per-pixel Phong lighting with normal and specular maps.
///
/// Normals come from the normal map when the model has one, otherwise from
/// the interpolated vertex normals. Both normals and the light are carried
/// into clip space (`m = projection * view`, normals by `m⁻¹ᵀ`) before
/// lighting, so the reflected ray's z measures how directly it hits the eye.
pub struct PhongShader<'a> {
    model: &'a Model,
    ctx: &'a RenderContext,
    /// Inverse-transpose of the clip matrix.
    mit: Mat4,
    /// Light direction in clip space, normalized.
    light: Vec3,
    // Varyings, one slot per corner.
    uv: [Vec2; 3],
    normal: [Vec3; 3],
}

impl<'a> PhongShader<'a> {
    /// Fails when the clip matrix has no inverse.
    pub fn new(
        model: &'a Model,
        ctx: &'a RenderContext,
        light: DirectionalLight,
    ) -> Result<Self, RenderError> {
        let m = ctx.clip_matrix();
        let mit = ctx.normal_matrix()?;
        Ok(Self {
            model,
            ctx,
            mit,
            light: m.transform_vector(light.direction).normalize(),
            uv: [Vec2::ZERO; 3],
            normal: [Vec3::ZERO; 3],
        })
    }
}

impl Shader for PhongShader<'_> {
    fn vertex(&mut self, face: usize, corner: usize) -> Option<Vec3> {
        let mesh = self.model.mesh();
        self.uv[corner] = mesh.uv(face, corner);
        self.normal[corner] = mesh.normal(face, corner);
        self.ctx.to_screen(mesh.position(face, corner))
    }

    fn fragment(&self, lambda: [f32; 3]) -> Option<u32> {
        let uv = interpolate(lambda, self.uv);
        let normal = self
            .model
            .normal(uv)
            .unwrap_or_else(|| interpolate(lambda, self.normal));

        let n = self.mit.transform_vector(normal).normalize();
        let l = self.light;
        let n_dot_l = n.dot(l);

        let diffuse = n_dot_l.max(0.0);
        let reflected = (n * (2.0 * n_dot_l) - l).normalize();
        let specular = self
            .model
            .specular(uv)
            .map_or(0.0, |exponent| reflected.z.max(0.0).powf(exponent));

        let lit = diffuse + SPECULAR_WEIGHT * specular;
        let color = colors::map_channels(self.model.diffuse(uv), |c| {
            (AMBIENT + c * lit).min(255.0)
        });
        Some(color)
    }
}
