//! Two-stage per-middle seed filter.
//!
//! Stage one weighs every accepted triplet of a fixed (bottom, middle)
//! pair: compatible tops on the same helix boost each other, large
//! impact parameters penalise. Stage two sorts one middle point's
//! candidates, caps them and applies the experiment's final pruning.

use serde::{Deserialize, Serialize};

use crate::core::types::{InternalSpacePoint, Seed};

use super::experiment::{DefaultExperimentCuts, ExperimentCuts};

/// Configuration for the seed filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedFilterConfig {
    /// Allowed gap between two inverse helix diameters for the tracks
    /// to be considered the same, in 1/mm.
    pub delta_inv_helix_diameter: f32,

    /// Linear impact-parameter penalty on the weight.
    pub impact_weight_factor: f32,

    /// Weight bonus per compatible top found on the same helix.
    pub compat_seed_weight: f32,

    /// Minimum radial distance between tops considered for the bonus,
    /// in mm.
    pub delta_r_min: f32,

    /// Maximum number of seeds kept per middle point.
    pub max_seeds_per_sp_m: usize,

    /// Maximum number of compatibility bonuses per triplet.
    pub compat_seed_limit: usize,
}

impl Default for SeedFilterConfig {
    fn default() -> Self {
        Self {
            delta_inv_helix_diameter: 0.00003,
            impact_weight_factor: 1.0,
            compat_seed_weight: 200.0,
            delta_r_min: 5.0,
            max_seeds_per_sp_m: 10,
            compat_seed_limit: 2,
        }
    }
}

/// A weighted triplet under filtering.
///
/// Lives only while its middle point is being processed; surviving
/// candidates are converted to [`Seed`]s when the middle is done.
#[derive(Debug, Clone)]
pub struct CandidateSeed<'a> {
    pub bottom: &'a InternalSpacePoint,
    pub middle: &'a InternalSpacePoint,
    pub top: &'a InternalSpacePoint,
    /// z of the beam-axis extrapolation of the bottom duplet, in mm
    pub z_origin: f32,
    pub weight: f32,
}

/// Weighs, caps and prunes the triplets of one middle point.
pub struct SeedFilter {
    config: SeedFilterConfig,
    experiment_cuts: Box<dyn ExperimentCuts>,
}

impl SeedFilter {
    /// Create a filter with the default no-op experiment cuts.
    pub fn new(config: SeedFilterConfig) -> Self {
        Self::with_cuts(config, Box::new(DefaultExperimentCuts))
    }

    /// Create a filter with user-supplied experiment cuts.
    pub fn with_cuts(config: SeedFilterConfig, experiment_cuts: Box<dyn ExperimentCuts>) -> Self {
        Self {
            config,
            experiment_cuts,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SeedFilterConfig {
        &self.config
    }

    /// Stage one: weigh all triplets sharing a (bottom, middle) pair.
    ///
    /// `tops`, `curvatures` and `impacts` are parallel vectors from the
    /// triplet search. Survivors of the experiment's single-seed cut
    /// are appended to `output`.
    pub fn filter_2sp_fixed<'a>(
        &self,
        bottom: &'a InternalSpacePoint,
        middle: &'a InternalSpacePoint,
        tops: &[&'a InternalSpacePoint],
        curvatures: &[f32],
        impacts: &[f32],
        z_origin: f32,
        output: &mut Vec<CandidateSeed<'a>>,
    ) {
        debug_assert_eq!(tops.len(), curvatures.len());
        debug_assert_eq!(tops.len(), impacts.len());

        let mut compatible_r: Vec<f32> = Vec::with_capacity(self.config.compat_seed_limit);

        for (i, &top) in tops.iter().enumerate() {
            let lower_limit = curvatures[i] - self.config.delta_inv_helix_diameter;
            let upper_limit = curvatures[i] + self.config.delta_inv_helix_diameter;
            let current_r = top.r;

            let mut weight = -(impacts[i] * self.config.impact_weight_factor);
            compatible_r.clear();

            for (j, other) in tops.iter().enumerate() {
                if j == i {
                    continue;
                }
                // a boost partner must be a genuinely different measurement
                if (current_r - other.r).abs() < self.config.delta_r_min {
                    continue;
                }
                // and lie on the same helix within tolerance
                if curvatures[j] < lower_limit || curvatures[j] > upper_limit {
                    continue;
                }
                let is_new = compatible_r
                    .iter()
                    .all(|&seen_r| (seen_r - other.r).abs() >= self.config.delta_r_min);
                if is_new {
                    compatible_r.push(other.r);
                    weight += self.config.compat_seed_weight;
                }
                if compatible_r.len() >= self.config.compat_seed_limit {
                    break;
                }
            }

            weight += self.experiment_cuts.seed_weight(bottom, middle, top);
            if !self.experiment_cuts.single_seed_cut(weight, bottom, middle, top) {
                continue;
            }

            output.push(CandidateSeed {
                bottom,
                middle,
                top,
                z_origin,
                weight,
            });
        }
    }

    /// Stage two: order, cap and prune one middle point's candidates.
    ///
    /// Candidates are sorted by descending weight with a deterministic
    /// tie-break on ascending (top r, bottom r, top z, bottom z), capped
    /// at `max_seeds_per_sp_m`, handed to the experiment's per-middle
    /// pruning and finally appended to `output` as seeds.
    pub fn filter_1sp_fixed(&self, mut candidates: Vec<CandidateSeed<'_>>, output: &mut Vec<Seed>) {
        candidates.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then(a.top.r.total_cmp(&b.top.r))
                .then(a.bottom.r.total_cmp(&b.bottom.r))
                .then(a.top.z.total_cmp(&b.top.z))
                .then(a.bottom.z.total_cmp(&b.bottom.z))
        });
        candidates.truncate(self.config.max_seeds_per_sp_m);

        let survivors = self.experiment_cuts.cut_per_middle_sp(candidates);
        output.extend(survivors.into_iter().map(|candidate| {
            Seed::new(
                *candidate.bottom.external(),
                *candidate.middle.external(),
                *candidate.top.external(),
                candidate.z_origin,
                candidate.weight,
            )
        }));
    }
}

impl Default for SeedFilter {
    fn default() -> Self {
        Self::new(SeedFilterConfig::default())
    }
}

impl std::fmt::Debug for SeedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedFilter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
