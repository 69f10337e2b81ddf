//! Seed finder configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedingError};
use crate::grid::GridConfig;

/// Kinematic and geometric configuration of the seed finder.
///
/// Lengths in mm, momenta in MeV, field in kT·mm/MeV units. All fields
/// must be finite; [`SeedfinderConfig::validate`] is called by
/// [`Seedfinder::new`](crate::seeding::Seedfinder::new) and rejects
/// inconsistent values before any processing starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedfinderConfig {
    /// Maximum transverse radius of considered points, in mm.
    pub r_max: f32,

    /// Minimum radial gap between duplet partners, in mm.
    pub delta_r_min: f32,

    /// Maximum radial gap between duplet partners, in mm.
    pub delta_r_max: f32,

    /// Lower edge of the allowed z origin band, in mm.
    pub collision_region_min: f32,

    /// Upper edge of the allowed z origin band, in mm.
    pub collision_region_max: f32,

    /// Lower z acceptance in mm.
    pub z_min: f32,

    /// Upper z acceptance in mm.
    pub z_max: f32,

    /// Forward-angle limit |Δz/Δr|.
    pub cot_theta_max: f32,

    /// Lower pT bound in MeV.
    ///
    /// Sizes the grid and sets the minimum helix diameter.
    pub min_pt: f32,

    /// Magnetic field along z.
    pub b_field_in_z: f32,

    /// Transverse offset (x, y) of the interaction region, in mm.
    pub beam_pos: (f32, f32),

    /// Maximum transverse impact parameter, in mm.
    pub impact_max: f32,

    /// Multiplier on the multiple-scattering angle budget.
    pub sigma_scattering: f32,

    /// Material budget crossed per seed, in radiation lengths.
    ///
    /// Feeds the Highland scattering term.
    pub rad_length_per_seed: f32,
}

impl Default for SeedfinderConfig {
    fn default() -> Self {
        Self {
            r_max: 600.0,
            delta_r_min: 5.0,
            delta_r_max: 270.0,
            collision_region_min: -150.0,
            collision_region_max: 150.0,
            z_min: -2800.0,
            z_max: 2800.0,
            cot_theta_max: 7.40627, // eta = 2.7
            min_pt: 400.0,          // 400 MeV
            b_field_in_z: 0.00208,  // ~2 T
            beam_pos: (0.0, 0.0),
            impact_max: 20.0,
            sigma_scattering: 5.0,
            rad_length_per_seed: 0.05,
        }
    }
}

impl SeedfinderConfig {
    /// Grid configuration implied by this finder configuration.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            min_pt: self.min_pt,
            b_field_in_z: self.b_field_in_z,
            r_max: self.r_max,
            z_min: self.z_min,
            z_max: self.z_max,
            delta_r_max: self.delta_r_max,
            cot_theta_max: self.cot_theta_max,
            beam_pos: self.beam_pos,
        }
    }

    /// Check the configuration for finiteness and consistency.
    pub fn validate(&self) -> Result<()> {
        // shared fields carry the same constraints as the grid
        self.grid_config().validate()?;

        for (name, value) in [
            ("delta_r_min", self.delta_r_min),
            ("collision_region_min", self.collision_region_min),
            ("collision_region_max", self.collision_region_max),
            ("impact_max", self.impact_max),
            ("sigma_scattering", self.sigma_scattering),
            ("rad_length_per_seed", self.rad_length_per_seed),
        ] {
            if !value.is_finite() {
                return Err(SeedingError::ConfigInvalid(format!(
                    "{name} is not finite: {value}"
                )));
            }
        }

        if self.delta_r_min < 0.0 || self.delta_r_min > self.delta_r_max {
            return Err(SeedingError::ConfigInvalid(format!(
                "radial gap band is empty: delta_r_min {} delta_r_max {}",
                self.delta_r_min, self.delta_r_max
            )));
        }
        if self.collision_region_min > self.collision_region_max {
            return Err(SeedingError::ConfigInvalid(format!(
                "collision region is empty: [{}, {}]",
                self.collision_region_min, self.collision_region_max
            )));
        }
        if self.impact_max < 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "impact_max must be non-negative, got {}",
                self.impact_max
            )));
        }
        if self.sigma_scattering <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "sigma_scattering must be positive, got {}",
                self.sigma_scattering
            )));
        }
        if self.rad_length_per_seed <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "rad_length_per_seed must be positive, got {}",
                self.rad_length_per_seed
            )));
        }
        Ok(())
    }
}

/// Constants derived once from a validated [`SeedfinderConfig`].
///
/// Owned by the `Seedfinder`; never user-supplied.
#[derive(Debug, Clone)]
pub(crate) struct DerivedConfig {
    /// Highland multiple-scattering term for the configured material.
    pub highland: f32,

    /// Squared scattering angle of a minimum-pT track.
    pub max_scattering_angle2: f32,

    /// pT (MeV) per helix radius (mm): 300 · B.
    pub pt_per_helix_radius: f32,

    /// Squared helix diameter of a minimum-pT track.
    pub min_helix_diameter2: f32,

    /// Squared scattering-to-curvature conversion.
    pub pt2_per_radius: f32,
}

impl DerivedConfig {
    pub fn from_config(config: &SeedfinderConfig) -> Self {
        let t = config.rad_length_per_seed;
        // Highland formula, 13.6 MeV multiple-scattering constant
        let highland = 13.6 * t.sqrt() * (1.0 + 0.038 * t.ln());
        let max_scattering_angle = highland / config.min_pt;
        let pt_per_helix_radius = 300.0 * config.b_field_in_z;

        Self {
            highland,
            max_scattering_angle2: max_scattering_angle * max_scattering_angle,
            pt_per_helix_radius,
            min_helix_diameter2: (config.min_pt * 2.0 / pt_per_helix_radius).powi(2),
            pt2_per_radius: (highland / pt_per_helix_radius).powi(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_valid() {
        assert!(SeedfinderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_radial_band_rejected() {
        let config = SeedfinderConfig {
            delta_r_min: 300.0,
            delta_r_max: 270.0,
            ..SeedfinderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_collision_region_rejected() {
        let config = SeedfinderConfig {
            collision_region_min: 150.0,
            collision_region_max: -150.0,
            ..SeedfinderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = SeedfinderConfig {
            impact_max: f32::INFINITY,
            ..SeedfinderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_config_mirrors_shared_fields() {
        let config = SeedfinderConfig::default();
        let grid = config.grid_config();
        assert_relative_eq!(grid.r_max, config.r_max);
        assert_relative_eq!(grid.cot_theta_max, config.cot_theta_max);
        assert_relative_eq!(grid.delta_r_max, config.delta_r_max);
    }

    #[test]
    fn test_derived_constants() {
        let config = SeedfinderConfig {
            min_pt: 500.0,
            b_field_in_z: 0.00199724,
            rad_length_per_seed: 0.05,
            ..SeedfinderConfig::default()
        };
        let derived = DerivedConfig::from_config(&config);

        // 13.6 * sqrt(0.05) * (1 + 0.038 * ln 0.05) = 2.695
        assert_relative_eq!(derived.highland, 2.695, epsilon = 1e-3);
        assert_relative_eq!(derived.pt_per_helix_radius, 0.599172, epsilon = 1e-6);
        // (2 * 500 / 0.599172)^2
        assert_relative_eq!(
            derived.min_helix_diameter2,
            (1000.0f32 / 0.599172).powi(2),
            max_relative = 1e-5
        );
        assert!(derived.max_scattering_angle2 > 0.0);
        assert!(derived.pt2_per_radius > 0.0);
    }
}
