use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softgl::bench::{fill_triangle, DepthBuffer, FrameBuffer, Shader};
use softgl::math::Vec3;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

/// Constant color; measures the rasterizer rather than the lighting.
struct Solid(u32);

impl Shader for Solid {
    fn vertex(&mut self, _face: usize, _corner: usize) -> Option<Vec3> {
        None
    }

    fn fragment(&self, _lambda: [f32; 3]) -> Option<u32> {
        Some(self.0)
    }
}

fn create_buffers() -> (FrameBuffer, DepthBuffer) {
    (
        FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
        DepthBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
    )
}

fn small_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ]
}

fn medium_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ]
}

fn large_triangle() -> [Vec3; 3] {
    [
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let shader = Solid(0xFFFF0000);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("barycentric", name), &triangle, |b, tri| {
            let (mut fb, mut depth) = create_buffers();
            b.iter(|| fill_triangle(black_box(*tri), &shader, &mut fb, &mut depth));
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");
    let shader = Solid(0xFFFF0000);

    // Generate a grid of small triangles
    let triangles: Vec<[Vec3; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                [
                    Vec3::new(x, y, 0.0),
                    Vec3::new(x + 35.0, y, 0.0),
                    Vec3::new(x + 17.5, y + 25.0, 0.0),
                ]
            })
        })
        .collect();

    group.bench_function("barycentric_400_triangles", |b| {
        let (mut fb, mut depth) = create_buffers();
        b.iter(|| {
            for tri in &triangles {
                fill_triangle(black_box(*tri), &shader, &mut fb, &mut depth);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
