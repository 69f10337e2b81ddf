//! Space point grid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedingError};

/// Configuration for the (φ, z) space point grid.
///
/// Lengths are in mm, momenta in MeV, the field in kT·mm/MeV units so
/// that a track of transverse momentum pT bends with helix radius
/// `pT / (300 · bFieldInZ)` mm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Lower pT bound of tracks the grid must resolve, in MeV.
    ///
    /// Together with `b_field_in_z` and `r_max` this fixes the φ bin
    /// width: no partner of a track above this pT can bend further than
    /// one φ bin across the detector.
    pub min_pt: f32,

    /// Magnetic field along z.
    pub b_field_in_z: f32,

    /// Maximum transverse radius of accepted points, in mm.
    pub r_max: f32,

    /// Lower z acceptance in mm.
    pub z_min: f32,

    /// Upper z acceptance in mm.
    pub z_max: f32,

    /// Maximum radial gap between duplet partners, in mm.
    pub delta_r_max: f32,

    /// Forward-angle limit |Δz/Δr| used to size the z bins.
    pub cot_theta_max: f32,

    /// Transverse offset (x, y) of the interaction region, in mm.
    pub beam_pos: (f32, f32),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_pt: 400.0,        // 400 MeV
            b_field_in_z: 0.00208, // ~2 T
            r_max: 600.0,
            z_min: -2800.0,
            z_max: 2800.0,
            delta_r_max: 270.0,
            cot_theta_max: 7.40627, // eta = 2.7
            beam_pos: (0.0, 0.0),
        }
    }
}

impl GridConfig {
    /// Bending radius of a track at the minimum pT, in mm.
    #[inline]
    pub fn min_helix_radius(&self) -> f32 {
        self.min_pt / (300.0 * self.b_field_in_z)
    }

    /// Check the configuration for finiteness and consistency.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_pt", self.min_pt),
            ("b_field_in_z", self.b_field_in_z),
            ("r_max", self.r_max),
            ("z_min", self.z_min),
            ("z_max", self.z_max),
            ("delta_r_max", self.delta_r_max),
            ("cot_theta_max", self.cot_theta_max),
            ("beam_pos.x", self.beam_pos.0),
            ("beam_pos.y", self.beam_pos.1),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SeedingError::ConfigInvalid(format!(
                    "{name} is not finite: {value}"
                )));
            }
        }

        if self.min_pt <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "min_pt must be positive, got {}",
                self.min_pt
            )));
        }
        if self.b_field_in_z <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "b_field_in_z must be positive, got {}",
                self.b_field_in_z
            )));
        }
        if self.r_max <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "r_max must be positive, got {}",
                self.r_max
            )));
        }
        if self.z_min >= self.z_max {
            return Err(SeedingError::ConfigInvalid(format!(
                "z range is empty: z_min {} >= z_max {}",
                self.z_min, self.z_max
            )));
        }
        if self.delta_r_max <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "delta_r_max must be positive, got {}",
                self.delta_r_max
            )));
        }
        if self.cot_theta_max <= 0.0 {
            return Err(SeedingError::ConfigInvalid(format!(
                "cot_theta_max must be positive, got {}",
                self.cot_theta_max
            )));
        }
        // The φ bin width is derived from the arc of a minimum-pT helix
        // across the detector, which requires that helix to reach r_max.
        if 2.0 * self.min_helix_radius() <= self.r_max {
            return Err(SeedingError::ConfigInvalid(format!(
                "minimum-pT helix (radius {} mm) cannot reach r_max {} mm",
                self.min_helix_radius(),
                self.r_max
            )));
        }
        Ok(())
    }
}
