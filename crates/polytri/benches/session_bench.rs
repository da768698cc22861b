//! Criterion benchmarks for incremental construction and the bridge round trip.
//! Focus sizes: vertices per polygon in {8, 32, 128}, three nested levels.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polytri::api::{
    draw_nested_stars, FanEngine, MarshallingBridge, PolygonValidityEngine, ReplayToken, StarCfg,
};

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    for &n in &[8usize, 32, 128] {
        let cfg = StarCfg {
            vertex_count: n,
            ..StarCfg::default()
        };
        let stars = draw_nested_stars(cfg, 3, ReplayToken::new(2025, 0));

        group.bench_with_input(BenchmarkId::new("build_nested", n), &stars, |b, stars| {
            b.iter(|| {
                let mut engine = PolygonValidityEngine::new();
                for star in stars {
                    for &v in star.vertices() {
                        let _ = engine.try_add_vertex(v);
                    }
                    let _ = engine.try_close_polygon();
                }
                engine
            })
        });

        group.bench_with_input(BenchmarkId::new("triangulate_fan", n), &stars, |b, stars| {
            b.iter_batched(
                || MarshallingBridge::new(FanEngine::new()),
                |mut bridge| bridge.triangulate(stars),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
