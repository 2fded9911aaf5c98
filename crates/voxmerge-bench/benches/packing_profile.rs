//! Whole-profile benchmark: place a seeded packing grain by grain.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use voxmerge_bench::{packing_profile, place_grain};
use voxmerge_core::SegmentId;
use voxmerge_segment::{Registry, RegistryConfig, VoxelDomain};

/// Benchmark: 200 radius-4 grains in a 96³ domain.
fn bench_packing_200(c: &mut Criterion) {
    let grains = packing_profile(42, 200, 4, 96);

    c.bench_function("packing_200_grains", |b| {
        b.iter(|| {
            let config = RegistryConfig::with_domain(VoxelDomain::cube(96));
            let mut registry = Registry::new(config).unwrap();
            for (i, grain) in grains.iter().enumerate() {
                place_grain(&mut registry, SegmentId(i as u32), grain).unwrap();
            }
            black_box(registry.len());
        });
    });
}

criterion_group!(benches, bench_packing_200);
criterion_main!(benches);
