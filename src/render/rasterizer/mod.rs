//! Triangle rasterization.
//!
//! [`fill_triangle`] walks the triangle's clamped bounding box, computes
//! barycentric weights for every pixel (see [`edgefunction`]), interpolates
//! depth, runs the depth test and only then asks the shader for a color.

pub mod edgefunction;
pub mod shader;

pub use edgefunction::{barycentric, bounding_box, is_inside, signed_area, DEGENERATE};
pub use shader::{interpolate, Shader};

use super::depth_buffer::DepthBuffer;
use super::framebuffer::FrameBuffer;
use crate::math::{Vec2, Vec3};

/// Fill one screen-space triangle, returning the number of pixels written.
///
/// `screen` holds pixel x,y and depth z per corner; x,y are snapped to the
/// nearest pixel first so corner weights come out exact. A pixel is written
/// only if it is inside the triangle, its interpolated depth is at least the
/// stored depth, and the shader does not discard it.
pub fn fill_triangle<S: Shader + ?Sized>(
    screen: [Vec3; 3],
    shader: &S,
    framebuffer: &mut FrameBuffer,
    depth: &mut DepthBuffer,
) -> usize {
    debug_assert_eq!(
        (framebuffer.width(), framebuffer.height()),
        (depth.width(), depth.height()),
        "Depth buffer size doesn't match the frame buffer"
    );

    if !screen.iter().all(Vec3::is_finite) {
        return 0;
    }
    let tri = screen.map(|v| Vec3::new(v.x.round(), v.y.round(), v.z));

    // Degenerate triangle: every pixel would get the sentinel weights.
    if signed_area(&tri).abs() < f32::EPSILON as f64 {
        return 0;
    }

    let (min, max) = bounding_box(&tri, framebuffer.width(), framebuffer.height());
    let depths = [tri[0].z, tri[1].z, tri[2].z];
    let mut written = 0;

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let lambda = barycentric(&tri, Vec2::new(x as f32, y as f32));
            if !is_inside(lambda) {
                continue;
            }

            let z = interpolate(lambda, depths);
            if !depth.passes(x, y, z) {
                continue;
            }

            // Discard happens after the depth test and leaves both buffers alone.
            if let Some(color) = shader.fragment(lambda) {
                framebuffer.set(x, y, color);
                depth.set(x, y, z);
                written += 1;
            }
        }
    }

    written
}
