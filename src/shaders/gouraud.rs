use crate::colors;
use crate::light::DirectionalLight;
use crate::math::{Vec2, Vec3};
use crate::model::Model;
use crate::render::{interpolate, Shader};
use crate::transform::RenderContext;

/// Per-vertex diffuse lighting, interpolated across the face and applied to
/// the diffuse map (white without one).
pub struct GouraudShader<'a> {
    model: &'a Model,
    ctx: &'a RenderContext,
    light: DirectionalLight,
    // Varyings, one slot per corner.
    intensity: [f32; 3],
    uv: [Vec2; 3],
}

impl<'a> GouraudShader<'a> {
    pub fn new(model: &'a Model, ctx: &'a RenderContext, light: DirectionalLight) -> Self {
        Self {
            model,
            ctx,
            light,
            intensity: [0.0; 3],
            uv: [Vec2::ZERO; 3],
        }
    }
}

impl Shader for GouraudShader<'_> {
    fn vertex(&mut self, face: usize, corner: usize) -> Option<Vec3> {
        let mesh = self.model.mesh();
        self.intensity[corner] = self.light.intensity(mesh.normal(face, corner));
        self.uv[corner] = mesh.uv(face, corner);
        self.ctx.to_screen(mesh.position(face, corner))
    }

    fn fragment(&self, lambda: [f32; 3]) -> Option<u32> {
        let intensity = interpolate(lambda, self.intensity);
        let uv = interpolate(lambda, self.uv);
        Some(colors::modulate(self.model.diffuse(uv), intensity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{from_rgba8, BLACK, RED, WHITE};
    use crate::shaders::test_support::{facing_triangle, identity_context};
    use crate::texture::Texture;

    fn primed(shader: &mut GouraudShader<'_>) {
        for corner in 0..3 {
            assert!(shader.vertex(0, corner).is_some());
        }
    }

    #[test]
    fn lit_face_takes_diffuse_color() {
        let model = Model::new(facing_triangle());
        let ctx = identity_context();
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        let mut shader = GouraudShader::new(&model, &ctx, light);
        primed(&mut shader);
        assert_eq!(shader.fragment([0.5, 0.25, 0.25]), Some(WHITE));
    }

    #[test]
    fn face_turned_away_is_black() {
        let model = Model::new(facing_triangle());
        let ctx = identity_context();
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0));
        let mut shader = GouraudShader::new(&model, &ctx, light);
        primed(&mut shader);
        assert_eq!(shader.fragment([0.5, 0.25, 0.25]), Some(BLACK));
    }

    #[test]
    fn grazing_light_halves_brightness() {
        let model = Model::new(facing_triangle());
        let ctx = identity_context();
        // n · l = cos(60°) = 0.5
        let light = DirectionalLight::new(Vec3::new(3.0_f32.sqrt(), 0.0, 1.0));
        let mut shader = GouraudShader::new(&model, &ctx, light);
        primed(&mut shader);
        let gray = from_rgba8(127, 127, 127, 255);
        assert_eq!(shader.fragment([1.0, 0.0, 0.0]), Some(gray));
    }

    #[test]
    fn samples_diffuse_map_at_interpolated_uv() {
        let texture = Texture::from_pixels(1, 1, vec![RED]).unwrap();
        let model = Model::new(facing_triangle()).with_diffuse(texture);
        let ctx = identity_context();
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        let mut shader = GouraudShader::new(&model, &ctx, light);
        primed(&mut shader);
        assert_eq!(shader.fragment([0.0, 1.0, 0.0]), Some(RED));
    }
}
