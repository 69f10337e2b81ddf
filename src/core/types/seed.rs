//! Output seed type.

use serde::{Deserialize, Serialize};

use super::SpacePoint;

/// An ordered triplet of space points consistent with a helical track.
///
/// Seeds are returned by value and keep no ties to the finder's internal
/// state. `z` is the estimated vertex z from the bottom duplet; `weight`
/// is the final filter score (higher is better).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Innermost space point
    pub bottom: SpacePoint,
    /// Middle space point
    pub middle: SpacePoint,
    /// Outermost space point
    pub top: SpacePoint,
    /// Estimated vertex z in mm
    pub z: f32,
    /// Filter weight of the surviving triplet
    pub weight: f32,
}

impl Seed {
    /// Create a new seed.
    #[inline]
    pub fn new(bottom: SpacePoint, middle: SpacePoint, top: SpacePoint, z: f32, weight: f32) -> Self {
        Self {
            bottom,
            middle,
            top,
            z,
            weight,
        }
    }
}
