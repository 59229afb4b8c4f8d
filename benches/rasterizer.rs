use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastly::render::{draw_line, fill_triangle, Aabb, PixelBuffer};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;
const COLOR: u32 = 0x00_FF_00_00;

fn small_triangle() -> [[i32; 2]; 3] {
    [[100, 100], [120, 100], [110, 120]]
}

fn medium_triangle() -> [[i32; 2]; 3] {
    [[100, 100], [300, 100], [200, 300]]
}

fn large_triangle() -> [[i32; 2]; 3] {
    [[50, 50], [750, 100], [400, 550]]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("fill", name), &triangle, |b, tri| {
            let mut buffer = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            let aabb =
                Aabb::of_triangle(tri[0], tri[1], tri[2]).clamp_to(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                fill_triangle(
                    &mut buffer,
                    black_box(tri[0]),
                    black_box(tri[1]),
                    black_box(tri[2]),
                    aabb,
                    COLOR,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles
    let triangles: Vec<[[i32; 2]; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                [[x, y], [x + 35, y], [x + 17, y + 25]]
            })
        })
        .collect();

    group.bench_function("fill_400_triangles", |b| {
        let mut buffer = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            for tri in &triangles {
                let aabb =
                    Aabb::of_triangle(tri[0], tri[1], tri[2]).clamp_to(BUFFER_WIDTH, BUFFER_HEIGHT);
                fill_triangle(
                    &mut buffer,
                    black_box(tri[0]),
                    black_box(tri[1]),
                    black_box(tri[2]),
                    aabb,
                    COLOR,
                );
            }
        });
    });

    group.finish();
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    group.bench_function("horizontal_fast_path", |b| {
        let mut buffer = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            draw_line(&mut buffer, black_box(10), 300, black_box(790), 300, COLOR);
        });
    });

    group.bench_function("vertical_fast_path", |b| {
        let mut buffer = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            draw_line(&mut buffer, 400, black_box(10), 400, black_box(590), COLOR);
        });
    });

    group.bench_function("general_diagonal", |b| {
        let mut buffer = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            draw_line(
                &mut buffer,
                black_box(10),
                black_box(20),
                black_box(790),
                black_box(580),
                COLOR,
            );
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_lines
);
criterion_main!(benches);
