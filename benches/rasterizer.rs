use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softras::colors;
use softras::math::vec3::Vec3;
use softras::math::vec4::Vec4;
use softras::render::{
    BackBuffer, EdgeFunctionRasterizer, FlatShader, InterpolatedShader, Rasterizer,
    ScreenTriangle,
};
use softras::{Mesh, Scene, Transform};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn screen_triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> ScreenTriangle {
    ScreenTriangle::new([
        Vec4::new(a.0, a.1, 0.5, 1.0),
        Vec4::new(b.0, b.1, 0.5, 2.0),
        Vec4::new(c.0, c.1, 0.5, 3.0),
    ])
}

fn small_triangle() -> ScreenTriangle {
    screen_triangle((100.0, 100.0), (120.0, 100.0), (110.0, 120.0))
}

fn medium_triangle() -> ScreenTriangle {
    screen_triangle((100.0, 100.0), (300.0, 100.0), (200.0, 300.0))
}

fn large_triangle() -> ScreenTriangle {
    screen_triangle((50.0, 50.0), (750.0, 100.0), (400.0, 550.0))
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let rasterizer = EdgeFunctionRasterizer::new();
    let flat = FlatShader::new(colors::RED);
    let interpolated = InterpolatedShader::new([colors::RED, colors::GREEN, colors::BLUE]);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("flat", name), &triangle, |b, tri| {
            let mut buffer = BackBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                buffer.clear(colors::BLACK);
                rasterizer.fill_triangle(black_box(tri), &mut buffer, &flat)
            });
        });

        group.bench_with_input(BenchmarkId::new("interpolated", name), &triangle, |b, tri| {
            let mut buffer = BackBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                buffer.clear(colors::BLACK);
                rasterizer.fill_triangle(black_box(tri), &mut buffer, &interpolated)
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let rasterizer = EdgeFunctionRasterizer::new();
    let shader = FlatShader::new(colors::RED);

    // Grid of small triangles
    let triangles: Vec<ScreenTriangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                screen_triangle((x, y), (x + 35.0, y), (x + 17.5, y + 25.0))
            })
        })
        .collect();

    group.bench_function("edge_function_400_triangles", |b| {
        let mut buffer = BackBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            buffer.clear(colors::BLACK);
            for tri in &triangles {
                rasterizer.fill_triangle(black_box(tri), &mut buffer, &shader);
            }
        });
    });

    group.finish();
}

fn benchmark_scene_frame(c: &mut Criterion) {
    let mut scene = Scene::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    scene
        .set_projection(
            0.1,
            100.0,
            std::f32::consts::FRAC_PI_2,
            BUFFER_WIDTH as f32 / BUFFER_HEIGHT as f32,
        )
        .expect("valid projection");

    let mut transform = Transform::new();
    transform
        .set_position(Vec3::new(0.0, 0.0, 5.0))
        .set_rotation(Vec3::new(0.4, 0.6, 0.0));
    let mut cube = Mesh::cube();
    cube.set_world_matrix(transform.to_matrix());
    scene.add_mesh(cube);

    c.bench_function("cube_frame", |b| {
        b.iter(|| scene.render().expect("frame renders"));
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_scene_frame
);
criterion_main!(benches);
