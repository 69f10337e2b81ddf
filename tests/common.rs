//! Test utilities for the seeding pipeline.
//!
//! Synthetic events are built from ideal tracks: straight rays through
//! the beam axis and circles passing through it, sampled at the layer
//! radii of a barrel detector.

#![allow(dead_code)]

use taraka_seed::{SeedfinderConfig, SpacePoint};

/// Reference configuration of a small silicon barrel.
pub fn reference_config() -> SeedfinderConfig {
    SeedfinderConfig {
        r_max: 160.0,
        delta_r_min: 5.0,
        delta_r_max: 160.0,
        collision_region_min: -250.0,
        collision_region_max: 250.0,
        z_min: -2800.0,
        z_max: 2800.0,
        cot_theta_max: 7.40627,
        min_pt: 500.0,
        b_field_in_z: 0.00199724,
        beam_pos: (0.0, 0.0),
        impact_max: 10.0,
        sigma_scattering: 1.0,
        rad_length_per_seed: 0.05,
    }
}

/// Points of a straight ray from the origin at azimuth `gamma`,
/// sampled at the given radii with `z = cot_theta * r`.
pub fn ray_points(gamma: f32, cot_theta: f32, radii: &[f32], first_layer: i32) -> Vec<SpacePoint> {
    let (sin_g, cos_g) = gamma.sin_cos();
    radii
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            SpacePoint::new(
                r * cos_g,
                r * sin_g,
                cot_theta * r,
                first_layer + i as i32,
                0.01,
                0.01,
            )
        })
        .collect()
}

/// Points of a transverse circle through the beam axis.
///
/// The circle has the given helix radius, touches the origin and heads
/// off at azimuth `gamma`; it is sampled at the given transverse radii
/// with `z = 0`. Such a track has zero impact parameter and identical
/// curvature for every duplet, so every cut sees an ideal helix.
pub fn helix_points(
    helix_radius: f32,
    gamma: f32,
    radii: &[f32],
    first_layer: i32,
) -> Vec<SpacePoint> {
    let (sin_g, cos_g) = gamma.sin_cos();
    let cx = helix_radius * cos_g;
    let cy = helix_radius * sin_g;

    radii
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            let alpha = 2.0 * (r / (2.0 * helix_radius)).asin();
            let x = cx - helix_radius * (gamma - alpha).cos();
            let y = cy - helix_radius * (gamma - alpha).sin();
            SpacePoint::new(x, y, 0.0, first_layer + i as i32, 0.01, 0.01)
        })
        .collect()
}

/// Layer-tag triple of a seed, for comparing seed sets across
/// geometric transformations.
pub fn layer_triplet(seed: &taraka_seed::Seed) -> (i32, i32, i32) {
    (seed.bottom.layer, seed.middle.layer, seed.top.layer)
}
