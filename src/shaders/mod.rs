//! Shader implementations.
//!
//! Each shader borrows what it reads (mesh or model, render context) for one
//! pass and keeps its varyings in per-corner slots. See
//! [`Shader`](crate::render::Shader) for the calling contract.

mod flat;
mod gouraud;
mod phong;

pub use flat::{facing_ratio, FlatShader};
pub use gouraud::GouraudShader;
pub use phong::PhongShader;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::math::{Mat4, Vec2, Vec3};
    use crate::mesh::{Face, Mesh};
    use crate::transform::{RenderContext, Viewport};

    /// A single triangle in the z = 0 plane facing +Z, with uvs.
    pub fn facing_triangle() -> Mesh {
        let face = Face {
            positions: [0, 1, 2],
            uvs: Some([0, 1, 2]),
            normals: None,
        };
        Mesh::new(
            "tri",
            vec![
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.5, -0.5, 0.0),
                Vec3::new(0.0, 0.5, 0.0),
            ],
            Vec::new(),
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
            vec![face],
        )
        .unwrap()
    }

    /// No camera, no perspective: model space maps straight onto a 16x16 target.
    pub fn identity_context() -> RenderContext {
        RenderContext::new(
            Mat4::identity(),
            Mat4::identity(),
            Viewport::full(16, 16, 2.0).matrix(),
        )
    }
}
