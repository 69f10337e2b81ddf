//! Seed finding pipeline: duplets, conformal transform, triplets,
//! filtering and the driving [`Seedfinder`].

mod config;
mod duplet;
mod experiment;
mod filter;
mod lin_circle;
mod triplet;

pub use config::SeedfinderConfig;
pub use duplet::{search_duplets_into, DupletRole};
pub use experiment::{DefaultExperimentCuts, ExperimentCuts};
pub use filter::{CandidateSeed, SeedFilter, SeedFilterConfig};
pub use lin_circle::{transform_coordinates, LinCircle};

use config::DerivedConfig;

use crate::core::types::{InternalSpacePoint, Seed};
use crate::error::Result;
use crate::grid::{AdjacentBinFinder, BinGroup, SpacePointGrid};

/// Triplet seed finder.
///
/// Holds only immutable state (configuration, derived constants and the
/// seed filter), so one instance can serve concurrent calls over
/// disjoint middle-bin groups. All per-middle working buffers live in
/// the call frame.
#[derive(Debug)]
pub struct Seedfinder {
    config: SeedfinderConfig,
    derived: DerivedConfig,
    filter: SeedFilter,
}

impl Seedfinder {
    /// Create a finder with the default seed filter.
    ///
    /// Fails with [`SeedingError::ConfigInvalid`](crate::SeedingError)
    /// when the configuration is non-finite or inconsistent.
    pub fn new(config: SeedfinderConfig) -> Result<Self> {
        Self::with_filter(config, SeedFilter::default())
    }

    /// Create a finder with a custom seed filter (and through it,
    /// custom experiment cuts).
    pub fn with_filter(config: SeedfinderConfig, filter: SeedFilter) -> Result<Self> {
        config.validate()?;
        let derived = DerivedConfig::from_config(&config);
        Ok(Self {
            config,
            derived,
            filter,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SeedfinderConfig {
        &self.config
    }

    /// Get the seed filter.
    pub fn filter(&self) -> &SeedFilter {
        &self.filter
    }

    /// Find all seeds of one middle-bin group.
    ///
    /// For every middle point of the group's middle bin, bottom
    /// partners are drawn from the group's bottom bins and top partners
    /// from its top bins; middles lacking either side are skipped. The
    /// output order is fixed by the bin order of the grid and the
    /// filter's deterministic sort.
    pub fn create_seeds_for_group(&self, grid: &SpacePointGrid, group: &BinGroup) -> Vec<Seed> {
        let mut seeds = Vec::new();

        // scratch owned by this call, not by the finder: concurrent
        // group calls must not share mutable state
        let mut bottoms: Vec<&InternalSpacePoint> = Vec::new();
        let mut tops: Vec<&InternalSpacePoint> = Vec::new();
        let mut lin_bottoms: Vec<LinCircle> = Vec::new();
        let mut lin_tops: Vec<LinCircle> = Vec::new();
        let mut candidates: Vec<CandidateSeed> = Vec::new();

        for middle in grid.bin(group.middle()) {
            search_duplets_into(
                DupletRole::Bottom,
                group.bottom().iter().flat_map(|&coord| grid.bin(coord)),
                middle,
                &self.config,
                &mut bottoms,
            );
            if bottoms.is_empty() {
                continue;
            }

            search_duplets_into(
                DupletRole::Top,
                group.top().iter().flat_map(|&coord| grid.bin(coord)),
                middle,
                &self.config,
                &mut tops,
            );
            if tops.is_empty() {
                continue;
            }

            transform_coordinates(middle, &bottoms, DupletRole::Bottom, &mut lin_bottoms);
            transform_coordinates(middle, &tops, DupletRole::Top, &mut lin_tops);

            candidates.clear();
            triplet::search_triplets(
                middle,
                &bottoms,
                &tops,
                &lin_bottoms,
                &lin_tops,
                &self.config,
                &self.derived,
                &self.filter,
                &mut candidates,
            );

            self.filter
                .filter_1sp_fixed(std::mem::take(&mut candidates), &mut seeds);
        }

        log::debug!(
            "group ({}, {}): {} seeds",
            group.middle().phi,
            group.middle().z,
            seeds.len()
        );
        seeds
    }

    /// Find all seeds of a grid, visiting every middle-bin group with
    /// the 3×3 neighbourhood on both sides.
    pub fn create_seeds(&self, grid: &SpacePointGrid) -> Vec<Seed> {
        let finder = AdjacentBinFinder;
        let mut seeds = Vec::new();
        for group in grid.groups(&finder, &finder) {
            seeds.extend(self.create_seeds_for_group(grid, &group));
        }
        seeds
    }
}
