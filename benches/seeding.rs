//! Benchmark seed finding throughput on synthetic barrel events.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f32::consts::PI;

use taraka_seed::{Seedfinder, SeedfinderConfig, SpacePoint, SpacePointGrid};

/// Sample `n_tracks` ideal helix tracks through the beam axis on six
/// barrel layers.
fn barrel_event(n_tracks: usize) -> Vec<SpacePoint> {
    let radii = [25.0f32, 45.0, 65.0, 90.0, 115.0, 140.0];
    let mut points = Vec::with_capacity(n_tracks * radii.len());

    for track in 0..n_tracks {
        let gamma = 2.0 * PI * track as f32 / n_tracks as f32 - PI;
        // alternate bending direction and vary the momentum a little
        let helix_radius = if track % 2 == 0 { 2000.0 } else { -2400.0 };
        let (sin_g, cos_g) = gamma.sin_cos();
        let cx = helix_radius * cos_g;
        let cy = helix_radius * sin_g;

        for (layer, &r) in radii.iter().enumerate() {
            let alpha = 2.0 * (r / (2.0 * helix_radius)).asin();
            let x = cx - helix_radius * (gamma - alpha).cos();
            let y = cy - helix_radius * (gamma - alpha).sin();
            points.push(SpacePoint::new(x, y, 0.0, layer as i32, 0.01, 0.01));
        }
    }
    points
}

fn bench_config() -> SeedfinderConfig {
    SeedfinderConfig {
        r_max: 160.0,
        delta_r_min: 5.0,
        delta_r_max: 160.0,
        collision_region_min: -250.0,
        collision_region_max: 250.0,
        min_pt: 500.0,
        b_field_in_z: 0.00199724,
        impact_max: 10.0,
        sigma_scattering: 1.0,
        ..SeedfinderConfig::default()
    }
}

fn bench_grid_build(c: &mut Criterion) {
    let config = bench_config();
    let mut group = c.benchmark_group("grid_build");

    for n_tracks in [10usize, 50, 200] {
        let points = barrel_event(n_tracks);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_tracks),
            &points,
            |b, points| {
                b.iter(|| {
                    SpacePointGrid::build(black_box(points), &config.grid_config()).unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_create_seeds(c: &mut Criterion) {
    let config = bench_config();
    let finder = Seedfinder::new(config.clone()).unwrap();
    let mut group = c.benchmark_group("create_seeds");

    for n_tracks in [10usize, 50, 200] {
        let points = barrel_event(n_tracks);
        let grid = SpacePointGrid::build(&points, &config.grid_config()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n_tracks), &grid, |b, grid| {
            b.iter(|| finder.create_seeds(black_box(grid)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_build, bench_create_seeds);
criterion_main!(benches);
