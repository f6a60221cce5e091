//! Benchmarks for mesh analysis.
//!
//! Run with: cargo bench -p mesh-measure

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use mesh_measure::{MeasureParams, analyze_with};
use mesh_types::{TriangleMesh, Vector3, unit_cube};

/// A grid of `n * n * n` unit cubes, 12 triangles each.
fn cube_grid(n: usize) -> TriangleMesh {
    let mut triangles = Vec::with_capacity(n * n * n * 12);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let offset = Vector3::new(x as f64, y as f64, z as f64) * 2.0;
                triangles.extend(unit_cube().translated(offset).into_triangles());
            }
        }
    }
    TriangleMesh::from_triangles(triangles).unwrap()
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for n in [5, 20, 40] {
        let mesh = cube_grid(n);
        group.throughput(Throughput::Elements(mesh.triangle_count() as u64));

        let count = mesh.triangle_count();
        let sequential = MeasureParams::sequential();
        let parallel = MeasureParams::default().parallel_threshold(0);

        group.bench_with_input(BenchmarkId::new("sequential", count), &mesh, |b, m| {
            b.iter(|| analyze_with(black_box(m), &sequential));
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &mesh, |b, m| {
            b.iter(|| analyze_with(black_box(m), &parallel));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
