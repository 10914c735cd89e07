use crate::math::Vec3;
use crate::mesh::Mesh;
use crate::render::Shader;
use crate::transform::RenderContext;

/// How directly face `face` looks back along `view_dir`: the unit geometric
/// normal dotted with `-view_dir`.
///
/// Non-positive means the face points away from the viewer. The same value
/// serves as the flat light intensity.
pub fn facing_ratio(mesh: &Mesh, face: usize, view_dir: Vec3) -> f32 {
    mesh.face_normal(face).dot(-view_dir.normalize())
}

/// Constant color across the whole face.
///
/// The driver computes the color per face (see [`facing_ratio`]) and sets
/// it before drawing; the shader itself only projects corners.
pub struct FlatShader<'a> {
    mesh: &'a Mesh,
    ctx: &'a RenderContext,
    color: u32,
}

impl<'a> FlatShader<'a> {
    pub fn new(mesh: &'a Mesh, ctx: &'a RenderContext, color: u32) -> Self {
        Self { mesh, ctx, color }
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }
}

impl Shader for FlatShader<'_> {
    fn vertex(&mut self, face: usize, corner: usize) -> Option<Vec3> {
        self.ctx.to_screen(self.mesh.position(face, corner))
    }

    fn fragment(&self, _lambda: [f32; 3]) -> Option<u32> {
        Some(self.color)
    }
}
