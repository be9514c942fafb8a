//! Benchmarks for nine-patch mesh construction.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use npatch_mesh::divs::trim_y_divs;
use npatch_mesh::{MeshPlan, build_mesh, plan_mesh};
use npatch_types::Rect;

fn divisions(n: usize, extent: i32) -> Vec<i32> {
    (1..=n as i32).map(|i| i * extent / (n as i32 + 1)).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_build");
    let bounds = Rect::from_ltrb(0.0, 0.0, 1920.0, 1080.0);

    for n in [2, 8, 32, 128] {
        let x_divs = divisions(n, 512);
        let y_divs = divisions(n.min(2), 512);
        let label = format!("{n}x{}", y_divs.len());

        group.bench_function(BenchmarkId::new("build", &label), |b| {
            b.iter(|| {
                let y = trim_y_divs(&y_divs, 512);
                match plan_mesh(&bounds, 512, 512, &x_divs, y) {
                    MeshPlan::Mesh(params) => Some(build_mesh(&params, &bounds)),
                    MeshPlan::BitmapRect(_) => None,
                }
            });
        });
    }

    group.finish();
}

fn bench_square_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_square");
    let bounds = Rect::from_ltrb(0.0, 0.0, 4096.0, 4096.0);

    for n in [4, 16, 64] {
        let divs = divisions(n, 1024);
        let label = format!("{n}");

        group.bench_function(BenchmarkId::new("build", &label), |b| {
            b.iter(|| match plan_mesh(&bounds, 1024, 1024, &divs, &divs) {
                MeshPlan::Mesh(params) => Some(build_mesh(&params, &bounds)),
                MeshPlan::BitmapRect(_) => None,
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_square_grids);
criterion_main!(benches);
