//! Performance measurement for support queries and build ordering

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use brickbond::algorithm::scheduler::StrideScheduler;
use brickbond::spatial::support::is_base_built;
use brickbond::spatial::tiling::Tiling;
use brickbond::spatial::wall::{BondKind, WallSpec};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures the support check over every brick of a half-built wall
fn bench_base_built_scan(c: &mut Criterion) {
    let Ok(spec) = WallSpec::new(2000.0, 2300.0, 210.0, 100.0, 50.0, 10.0, 12.5, BondKind::Wild)
    else {
        return;
    };
    let Ok(mut tiling) = Tiling::build(&spec, 12345) else {
        return;
    };
    let Ok(scheduler) = StrideScheduler::new(&spec, 800.0, 1000.0) else {
        return;
    };
    if scheduler.schedule(&mut tiling).is_err() {
        return;
    }

    c.bench_function("base_built_scan", |b| {
        b.iter(|| {
            let supported = tiling
                .bricks()
                .iter()
                .filter(|brick| is_base_built(&tiling, brick))
                .count();
            black_box(supported);
        });
    });
}

/// Measures grouping a finished schedule into its build order
fn bench_build_order(c: &mut Criterion) {
    let Ok(spec) =
        WallSpec::new(2000.0, 2300.0, 210.0, 100.0, 50.0, 10.0, 12.5, BondKind::Stretcher)
    else {
        return;
    };
    let Ok(mut tiling) = Tiling::build(&spec, 0) else {
        return;
    };
    let Ok(schedule) = StrideScheduler::new(&spec, 800.0, 500.0)
        .and_then(|scheduler| scheduler.schedule(&mut tiling))
    else {
        return;
    };

    c.bench_function("build_order", |b| {
        b.iter(|| black_box(schedule.build_order(&tiling, black_box(false)).len()));
    });
}

criterion_group!(benches, bench_base_built_scan, bench_build_order);
criterion_main!(benches);
