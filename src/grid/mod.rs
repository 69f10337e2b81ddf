//! Cylindrical (φ, z) binning of space points.
//!
//! The grid is the neighbour structure of the seed finder: a point's
//! duplet partners can only sit in its own bin or an adjacent one, so
//! the φ bin width is derived from the arc a minimum-pT helix sweeps
//! across the detector and the z bin width from the forward-angle
//! limit. Bins store their points sorted by ascending transverse
//! radius; the grid is immutable once built.

mod config;
pub mod group;

pub use config::GridConfig;
pub use group::{AdjacentBinFinder, BinFinder, BinGroup, BinnedGroupIterator};

use std::f32::consts::PI;

use crate::core::types::{InternalSpacePoint, SpacePoint};
use crate::error::{Result, SeedingError};

/// Integer coordinates of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinCoord {
    /// φ bin index in [0, n_phi_bins)
    pub phi: usize,
    /// z bin index in [0, n_z_bins)
    pub z: usize,
}

/// Immutable (φ, z) grid of beam-frame space points.
#[derive(Debug)]
pub struct SpacePointGrid {
    config: GridConfig,

    /// Number of φ bins (full turn, equal width).
    n_phi: usize,

    /// Number of z bins over [z_min, z_max].
    n_z: usize,

    phi_bin_width: f32,
    z_bin_width: f32,

    /// Bin storage, row-major: index = z * n_phi + phi.
    bins: Vec<Vec<InternalSpacePoint>>,
}

impl SpacePointGrid {
    /// Bin the input points.
    ///
    /// Points with `r > r_max` or z outside `[z_min, z_max]` are
    /// dropped. Points with non-finite coordinates or negative
    /// variances abort the build with [`SeedingError::InputInvalid`];
    /// no partial grid is returned.
    pub fn build(points: &[SpacePoint], config: &GridConfig) -> Result<Self> {
        config.validate()?;

        let n_phi = phi_bin_count(config);
        let n_z = z_bin_count(config);
        let phi_bin_width = 2.0 * PI / n_phi as f32;
        let z_bin_width = (config.z_max - config.z_min) / n_z as f32;

        let mut grid = Self {
            config: config.clone(),
            n_phi,
            n_z,
            phi_bin_width,
            z_bin_width,
            bins: vec![Vec::new(); n_phi * n_z],
        };

        let mut accepted = 0usize;
        for point in points {
            validate_point(point)?;

            let internal = InternalSpacePoint::new(*point, config.beam_pos);
            if internal.r > config.r_max {
                continue;
            }
            let Some(iz) = grid.z_bin_of(internal.z) else {
                continue;
            };
            let iphi = grid.phi_bin_of(crate::core::math::azimuth(internal.x, internal.y));
            let index = grid.bin_index(BinCoord { phi: iphi, z: iz });
            grid.bins[index].push(internal);
            accepted += 1;
        }

        // Ascending r within each bin; ties are broken on (z, x, y) so
        // the stored order never depends on the input permutation.
        for bin in &mut grid.bins {
            bin.sort_by(|a, b| {
                a.r.total_cmp(&b.r)
                    .then(a.z.total_cmp(&b.z))
                    .then(a.x.total_cmp(&b.x))
                    .then(a.y.total_cmp(&b.y))
            });
        }

        log::debug!(
            "space point grid built: {} x {} bins ({} of {} points accepted)",
            n_phi,
            n_z,
            accepted,
            points.len()
        );
        Ok(grid)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of φ bins.
    #[inline]
    pub fn n_phi_bins(&self) -> usize {
        self.n_phi
    }

    /// Number of z bins.
    #[inline]
    pub fn n_z_bins(&self) -> usize {
        self.n_z
    }

    /// Points of one bin, sorted by ascending r.
    #[inline]
    pub fn bin(&self, coord: BinCoord) -> &[InternalSpacePoint] {
        &self.bins[self.bin_index(coord)]
    }

    /// Total number of binned points.
    pub fn len(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Whether the grid holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(Vec::is_empty)
    }

    /// All bin coordinates in ascending (z, φ) order.
    pub fn coords(&self) -> impl Iterator<Item = BinCoord> + '_ {
        (0..self.n_z)
            .flat_map(move |z| (0..self.n_phi).map(move |phi| BinCoord { phi, z }))
    }

    /// Iterate the non-empty middle bins with their neighbourhoods.
    pub fn groups<'a>(
        &'a self,
        bottom_finder: &'a dyn BinFinder,
        top_finder: &'a dyn BinFinder,
    ) -> BinnedGroupIterator<'a> {
        BinnedGroupIterator::new(self, bottom_finder, top_finder)
    }

    #[inline]
    fn bin_index(&self, coord: BinCoord) -> usize {
        coord.z * self.n_phi + coord.phi
    }

    /// φ bin index for an azimuth in [-π, π].
    #[inline]
    pub fn phi_bin_of(&self, phi: f32) -> usize {
        let bin = ((phi + PI) / self.phi_bin_width) as usize;
        // atan2 can return exactly +π, which lands one past the end
        bin.min(self.n_phi - 1)
    }

    /// z bin index, or `None` outside [z_min, z_max].
    #[inline]
    pub fn z_bin_of(&self, z: f32) -> Option<usize> {
        if z < self.config.z_min || z > self.config.z_max {
            return None;
        }
        let bin = ((z - self.config.z_min) / self.z_bin_width) as usize;
        Some(bin.min(self.n_z - 1))
    }
}

/// Number of φ bins such that no duplet partner of a track above the
/// minimum pT lies more than one bin away.
///
/// The width is the azimuthal arc between the minimum-pT helix's
/// intersections with the outer (`r_max`) and inner
/// (`r_max - delta_r_max`) acceptance circles.
fn phi_bin_count(config: &GridConfig) -> usize {
    let min_helix_radius = config.min_helix_radius();

    let max_r2 = config.r_max * config.r_max;
    let x_outer = max_r2 / (2.0 * min_helix_radius);
    let y_outer = (max_r2 - x_outer * x_outer).sqrt();
    let outer_angle = (x_outer / y_outer).atan();

    let mut inner_angle = 0.0;
    if config.r_max > config.delta_r_max {
        let inner_r2 = (config.r_max - config.delta_r_max).powi(2);
        let x_inner = inner_r2 / (2.0 * min_helix_radius);
        let y_inner = (inner_r2 - x_inner * x_inner).sqrt();
        inner_angle = (x_inner / y_inner).atan();
    }

    (((2.0 * PI) / (outer_angle - inner_angle)).floor() as usize).max(1)
}

/// Number of z bins: one per maximal duplet z extent.
fn z_bin_count(config: &GridConfig) -> usize {
    let z_bin_size = config.cot_theta_max * config.delta_r_max;
    (((config.z_max - config.z_min) / z_bin_size).floor() as usize).max(1)
}

fn validate_point(point: &SpacePoint) -> Result<()> {
    for (name, value) in [
        ("x", point.x),
        ("y", point.y),
        ("z", point.z),
        ("r", point.r),
    ] {
        if !value.is_finite() {
            return Err(SeedingError::InputInvalid(format!(
                "coordinate {name} is not finite: {value}"
            )));
        }
    }
    for (name, value) in [
        ("variance_r", point.variance_r),
        ("variance_z", point.variance_z),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(SeedingError::InputInvalid(format!(
                "{name} must be finite and non-negative, got {value}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GridConfig {
        GridConfig {
            min_pt: 500.0,
            b_field_in_z: 0.00199724,
            r_max: 160.0,
            z_min: -2800.0,
            z_max: 2800.0,
            delta_r_max: 160.0,
            cot_theta_max: 7.40627,
            beam_pos: (0.0, 0.0),
        }
    }

    fn sp(x: f32, y: f32, z: f32) -> SpacePoint {
        SpacePoint::new(x, y, z, 0, 0.01, 0.01)
    }

    #[test]
    fn test_bin_counts_reference_detector() {
        let config = test_config();
        // min helix radius 834.5 mm: outer angle ~0.0963 rad, inner 0
        assert_eq!(phi_bin_count(&config), 65);
        // 5600 mm / (7.40627 * 160 mm) = 4.7
        assert_eq!(z_bin_count(&config), 4);
    }

    #[test]
    fn test_every_accepted_point_lands_in_one_bin() {
        let points = vec![
            sp(10.0, 0.0, 0.0),
            sp(0.0, 50.0, 100.0),
            sp(-70.0, -70.0, -1000.0),
        ];
        let grid = SpacePointGrid::build(&points, &test_config()).unwrap();
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_out_of_acceptance_points_dropped() {
        let points = vec![
            sp(200.0, 0.0, 0.0),  // r > r_max
            sp(10.0, 0.0, 3000.0), // z > z_max
            sp(10.0, 0.0, -3000.0),
            sp(50.0, 0.0, 0.0),
        ];
        let grid = SpacePointGrid::build(&points, &test_config()).unwrap();
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_bins_sorted_by_radius() {
        let points = vec![sp(150.0, 0.0, 0.0), sp(10.0, 0.0, 0.0), sp(50.0, 0.0, 0.0)];
        let grid = SpacePointGrid::build(&points, &test_config()).unwrap();

        let coord = BinCoord {
            phi: grid.phi_bin_of(0.0),
            z: grid.z_bin_of(0.0).unwrap(),
        };
        let bin = grid.bin(coord);
        assert_eq!(bin.len(), 3);
        assert!(bin[0].r < bin[1].r && bin[1].r < bin[2].r);
    }

    #[test]
    fn test_non_finite_point_aborts_build() {
        let points = vec![sp(10.0, 0.0, 0.0), sp(f32::NAN, 0.0, 0.0)];
        let err = SpacePointGrid::build(&points, &test_config()).unwrap_err();
        assert!(matches!(err, SeedingError::InputInvalid(_)));
    }

    #[test]
    fn test_negative_variance_aborts_build() {
        let mut point = sp(10.0, 0.0, 0.0);
        point.variance_z = -1.0;
        let err = SpacePointGrid::build(&[point], &test_config()).unwrap_err();
        assert!(matches!(err, SeedingError::InputInvalid(_)));
    }

    #[test]
    fn test_invalid_config_aborts_build() {
        let config = GridConfig {
            r_max: -1.0,
            ..test_config()
        };
        let err = SpacePointGrid::build(&[], &config).unwrap_err();
        assert!(matches!(err, SeedingError::ConfigInvalid(_)));
    }

    #[test]
    fn test_phi_wraps_at_pi() {
        let grid = SpacePointGrid::build(&[], &test_config()).unwrap();
        assert_eq!(grid.phi_bin_of(PI), grid.n_phi_bins() - 1);
        assert_eq!(grid.phi_bin_of(-PI), 0);
    }

    #[test]
    fn test_z_edges_stay_in_range() {
        let grid = SpacePointGrid::build(&[], &test_config()).unwrap();
        assert_eq!(grid.z_bin_of(-2800.0), Some(0));
        assert_eq!(grid.z_bin_of(2800.0), Some(grid.n_z_bins() - 1));
        assert_eq!(grid.z_bin_of(2800.1), None);
    }

    #[test]
    fn test_beam_shift_applied() {
        let config = GridConfig {
            beam_pos: (-0.5, -0.5),
            ..test_config()
        };
        let grid = SpacePointGrid::build(&[sp(10.0, 0.0, 0.0)], &config).unwrap();
        let coord = grid.coords().find(|c| !grid.bin(*c).is_empty()).unwrap();
        let internal = &grid.bin(coord)[0];
        assert!((internal.x - 10.5).abs() < 1e-6);
        assert!((internal.external().x - 10.0).abs() < 1e-6);
    }
}
