//! Barycentric coordinates from edge functions.
//!
//! # Construction
//!
//! For a triangle `a, b, c` and a pixel `p`, the weights `(1 - u - v, u, v)`
//! satisfy `p = a + u·(b - a) + v·(c - a)`. Writing that per axis gives two
//! equations, and both are orthogonal to `(u, v, 1)`:
//!
//! ```text
//! sx = (b.x - a.x, c.x - a.x, a.x - p.x)
//! sy = (b.y - a.y, c.y - a.y, a.y - p.y)
//! (u, v, 1) ∥ sx × sy
//! ```
//!
//! So `u = cross.x / cross.z` and `v = cross.y / cross.z`. `cross.z` is twice
//! the signed triangle area (the edge function of `a → b` evaluated at `c`);
//! when it vanishes the triangle is degenerate and has no interior.
//!
//! Every pixel of the bounding box is tested; a negative weight means the
//! pixel lies outside. This handles both windings without a separate test.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use crate::math::{Vec2, Vec2i, Vec3};

/// Weights reported for a degenerate triangle. The negative component makes
/// every caller treat the point as outside.
pub const DEGENERATE: [f32; 3] = [-1.0, 1.0, 1.0];

/// Twice the signed area of `tri` in the x,y plane, in `f64` so screen
/// coordinates far outside the buffer do not overflow.
#[inline]
pub fn signed_area(tri: &[Vec3; 3]) -> f64 {
    let [a, b, c] = tri.map(|v| (v.x as f64, v.y as f64));
    (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)
}

/// Barycentric weights of `p` with respect to the triangle `tri` (x,y only).
///
/// Returns [`DEGENERATE`] for a zero-area triangle. The cross product runs in
/// `f64`; only the final weights are narrowed.
#[inline]
pub fn barycentric(tri: &[Vec3; 3], p: Vec2) -> [f32; 3] {
    let [a, b, c] = tri.map(|v| (v.x as f64, v.y as f64));
    let (px, py) = (p.x as f64, p.y as f64);
    let sx = [b.0 - a.0, c.0 - a.0, a.0 - px];
    let sy = [b.1 - a.1, c.1 - a.1, a.1 - py];

    let u = sx[1] * sy[2] - sx[2] * sy[1];
    let v = sx[2] * sy[0] - sx[0] * sy[2];
    let area = sx[0] * sy[1] - sx[1] * sy[0];
    if area.abs() < f32::EPSILON as f64 {
        return DEGENERATE;
    }

    [
        (1.0 - (u + v) / area) as f32,
        (u / area) as f32,
        (v / area) as f32,
    ]
}

/// True when all weights are non-negative: the point is inside or on an edge.
#[inline]
pub fn is_inside(lambda: [f32; 3]) -> bool {
    lambda.iter().all(|&w| w >= 0.0)
}

/// Integer bounding box `(min, max)` of a triangle, clamped to
/// `[0, width - 1] x [0, height - 1]`. Inclusive on both ends; `min > max`
/// on either axis means nothing is on screen.
pub fn bounding_box(tri: &[Vec3; 3], width: u32, height: u32) -> (Vec2i, Vec2i) {
    let min_x = tri[0].x.min(tri[1].x).min(tri[2].x).floor() as i32;
    let max_x = tri[0].x.max(tri[1].x).max(tri[2].x).ceil() as i32;
    let min_y = tri[0].y.min(tri[1].y).min(tri[2].y).floor() as i32;
    let max_y = tri[0].y.max(tri[1].y).max(tri[2].y).ceil() as i32;

    // Clip to framebuffer bounds
    (
        Vec2i::new(min_x.max(0), min_y.max(0)),
        Vec2i::new(
            max_x.min(width as i32 - 1),
            max_y.min(height as i32 - 1),
        ),
    )
}
