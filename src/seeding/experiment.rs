//! Experiment-specific seed cuts.
//!
//! Detectors differ in which seeds they consider promising; the core
//! exposes exactly three hooks and never inspects their logic. The
//! default implementation is a no-op so the pipeline works out of the
//! box.

use crate::core::types::InternalSpacePoint;

use super::filter::CandidateSeed;

/// Plug-in for experiment-specific seed weighting and pruning.
pub trait ExperimentCuts: Send + Sync {
    /// Weight bonus or malus for one triplet, added after the default
    /// compatibility weighting.
    fn seed_weight(
        &self,
        bottom: &InternalSpacePoint,
        middle: &InternalSpacePoint,
        top: &InternalSpacePoint,
    ) -> f32;

    /// Whether a weighted triplet is kept at all.
    fn single_seed_cut(
        &self,
        weight: f32,
        bottom: &InternalSpacePoint,
        middle: &InternalSpacePoint,
        top: &InternalSpacePoint,
    ) -> bool;

    /// Final pruning of one middle point's seeds.
    ///
    /// `seeds` arrives sorted by descending weight and already capped.
    /// Implementations may drop entries but must not reorder entries of
    /// equal weight and must not introduce new ones.
    fn cut_per_middle_sp<'a>(&self, seeds: Vec<CandidateSeed<'a>>) -> Vec<CandidateSeed<'a>>;
}

/// No-op cuts: every seed keeps its default weight and survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExperimentCuts;

impl ExperimentCuts for DefaultExperimentCuts {
    fn seed_weight(
        &self,
        _bottom: &InternalSpacePoint,
        _middle: &InternalSpacePoint,
        _top: &InternalSpacePoint,
    ) -> f32 {
        0.0
    }

    fn single_seed_cut(
        &self,
        _weight: f32,
        _bottom: &InternalSpacePoint,
        _middle: &InternalSpacePoint,
        _top: &InternalSpacePoint,
    ) -> bool {
        true
    }

    fn cut_per_middle_sp<'a>(&self, seeds: Vec<CandidateSeed<'a>>) -> Vec<CandidateSeed<'a>> {
        seeds
    }
}
