use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nmath::ga::{self, Blade};
use nmath::matrix::{self, square};
use nmath::vector;

fn bench_mult(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_mult");
    for size in [16usize, 64, 128] {
        let a: Vec<f32> = (0..size * size).map(|i| (i % 100) as f32).collect();
        let b: Vec<f32> = (0..size * size).map(|i| (i % 37) as f32).collect();
        let mut dst = vec![0.0f32; size * size];

        group.bench_with_input(BenchmarkId::new("mult", size), &size, |bench, &n| {
            bench.iter(|| {
                square::mult(&mut dst, black_box(&a), black_box(&b), n).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("multt", size), &size, |bench, &n| {
            bench.iter(|| {
                square::multt(&mut dst, black_box(&a), black_box(&b), n).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let (n, m) = (256, 128);
    let src: Vec<f32> = (0..n * m).map(|i| i as f32).collect();
    let mut dst = vec![0.0f32; n * m];

    c.bench_function("transpose_256x128", |bench| {
        bench.iter(|| {
            matrix::transpose(&mut dst, black_box(&src), n, m).unwrap();
        })
    });
}

fn bench_vector(c: &mut Criterion) {
    let a: Vec<f32> = (0..4096).map(|i| (i % 13) as f32).collect();
    let b: Vec<f32> = (0..4096).map(|i| (i % 7) as f32).collect();

    c.bench_function("dot_4096", |bench| {
        bench.iter(|| vector::dot(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_geometric_product(c: &mut Criterion) {
    let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let b = ga::basis::<f32>(Blade::E123);
    let mut dst = [0.0f32; 8];

    c.bench_function("geometric_product", |bench| {
        bench.iter(|| {
            ga::geometric_product(&mut dst, black_box(&a), black_box(&b));
        })
    });
}

criterion_group!(
    benches,
    bench_mult,
    bench_transpose,
    bench_vector,
    bench_geometric_product
);
criterion_main!(benches);
