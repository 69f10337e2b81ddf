//! Space point types for seed finding.
//!
//! [`SpacePoint`] is the external measurement handed to the finder.
//! [`InternalSpacePoint`] is the working copy used inside the grid and
//! the seeding pipeline: its coordinates are translated into the beam
//! frame so that all origin and impact cuts can assume the interaction
//! region sits on the z axis.

use serde::{Deserialize, Serialize};

use crate::core::math;

/// A 3D measurement reconstructed from one or more detector hits.
///
/// Lengths are in millimetres. `r` is the transverse radius and is kept
/// consistent with `(x, y)` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacePoint {
    /// Global x coordinate in mm
    pub x: f32,
    /// Global y coordinate in mm
    pub y: f32,
    /// Global z coordinate in mm
    pub z: f32,
    /// Transverse radius in mm, √(x² + y²)
    pub r: f32,
    /// Variance of the radial measurement in mm²
    pub variance_r: f32,
    /// Variance of the z measurement in mm²
    pub variance_z: f32,
    /// Detector layer tag
    pub layer: i32,
}

impl SpacePoint {
    /// Create a new space point with `r` derived from `(x, y)`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, layer: i32, variance_r: f32, variance_z: f32) -> Self {
        Self {
            x,
            y,
            z,
            r: math::radius(x, y),
            variance_r,
            variance_z,
            layer,
        }
    }

    /// Azimuthal angle in [-π, π].
    #[inline]
    pub fn phi(&self) -> f32 {
        math::azimuth(self.x, self.y)
    }
}

/// Working copy of a space point in the beam frame.
///
/// Coordinates are shifted by the configured beam position and `r` is
/// recomputed from the shifted transverse coordinates. The untranslated
/// external point is retained so that output seeds reference the
/// caller's measurements, not the shifted copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalSpacePoint {
    /// Beam-frame x coordinate in mm
    pub x: f32,
    /// Beam-frame y coordinate in mm
    pub y: f32,
    /// z coordinate in mm
    pub z: f32,
    /// Beam-frame transverse radius in mm
    pub r: f32,
    /// Variance of the radial measurement in mm²
    pub variance_r: f32,
    /// Variance of the z measurement in mm²
    pub variance_z: f32,
    /// Quality score slot, zero until assigned
    quality: f32,
    /// The external point this copy was made from
    external: SpacePoint,
}

impl InternalSpacePoint {
    /// Create the beam-frame copy of an external point.
    #[inline]
    pub fn new(external: SpacePoint, beam_pos: (f32, f32)) -> Self {
        let x = external.x - beam_pos.0;
        let y = external.y - beam_pos.1;
        Self {
            x,
            y,
            z: external.z,
            r: math::radius(x, y),
            variance_r: external.variance_r,
            variance_z: external.variance_z,
            quality: 0.0,
            external,
        }
    }

    /// The external point this copy was made from.
    #[inline]
    pub fn external(&self) -> &SpacePoint {
        &self.external
    }

    /// Current quality score.
    #[inline]
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Assign a quality score.
    #[inline]
    pub fn set_quality(&mut self, quality: f32) {
        self.quality = quality;
    }
}
