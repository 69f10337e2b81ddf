//! TarakaSeed - Triplet seed finding for helical track reconstruction
//!
//! Given the space points measured by a silicon tracking detector, the
//! crate enumerates (bottom, middle, top) triplets compatible with a
//! helical trajectory from the interaction region, scores them and
//! returns the survivors as starting points for a track fit.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   seeding/                          │  ← Pipeline
//! │   (duplets, conformal transform, triplets, filter)  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     grid/                           │  ← Binning
//! │        (φ-z grid, neighbourhoods, iteration)        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    config/                          │  ← Loading
//! │              (YAML, section defaults)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                  (types, math)                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Pipeline
//!
//! 1. [`SpacePointGrid::build`] bins the input points in (φ, z), with
//!    the φ bin width derived from the minimum-pT helix arc so duplet
//!    partners never sit more than one bin apart.
//! 2. [`BinnedGroupIterator`] walks the non-empty middle bins in a
//!    fixed order, yielding the bottom and top neighbourhoods.
//! 3. For each middle point, the duplet search selects partners under
//!    radial-gap, forward-angle and origin cuts, and the conformal
//!    transform maps each duplet to a point in (U, V) where circles
//!    through the middle become straight lines.
//! 4. The triplet search fits that line per (bottom, top) pair and
//!    applies the multiple-scattering, minimum-pT and impact cuts.
//! 5. The [`SeedFilter`] weighs candidates, boosts tops that agree on
//!    the helix, caps the yield per middle point and applies optional
//!    experiment-specific cuts.
//!
//! # Example
//!
//! ```
//! use taraka_seed::{Seedfinder, SeedfinderConfig, SpacePoint, SpacePointGrid};
//!
//! let config = SeedfinderConfig {
//!     r_max: 160.0,
//!     min_pt: 500.0,
//!     b_field_in_z: 0.00199724,
//!     impact_max: 10.0,
//!     ..SeedfinderConfig::default()
//! };
//!
//! let points = vec![
//!     SpacePoint::new(10.0, 0.0, 0.0, 0, 0.0, 0.0),
//!     SpacePoint::new(50.0, 0.0, 0.0, 1, 0.0, 0.0),
//!     SpacePoint::new(150.0, 0.0, 0.0, 2, 0.0, 0.0),
//! ];
//!
//! let grid = SpacePointGrid::build(&points, &config.grid_config()).unwrap();
//! let finder = Seedfinder::new(config).unwrap();
//! let seeds = finder.create_seeds(&grid);
//! assert_eq!(seeds.len(), 1);
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Errors and configuration loading
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Layer 3: Space point binning (depends on core)
// ============================================================================
pub mod grid;

// ============================================================================
// Layer 4: Seeding pipeline (depends on core, grid)
// ============================================================================
pub mod seeding;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use crate::core::types::{InternalSpacePoint, Seed, SpacePoint};

// Errors
pub use error::{Result, SeedingError};

// Configuration loading
pub use config::{ConfigLoadError, SeedingConfig};

// Grid
pub use grid::{
    AdjacentBinFinder, BinCoord, BinFinder, BinGroup, BinnedGroupIterator, GridConfig,
    SpacePointGrid,
};

// Seeding
pub use seeding::{
    CandidateSeed, DefaultExperimentCuts, DupletRole, ExperimentCuts, LinCircle, SeedFilter,
    SeedFilterConfig, Seedfinder, SeedfinderConfig,
};
