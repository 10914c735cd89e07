//! Linear algebra: small fixed-size vectors and const-generic matrices.

pub mod mat4;
pub mod matrix;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use matrix::Matrix;
pub use vec2::{Vec2, Vec2i};
pub use vec3::Vec3;
pub use vec4::Vec4;
