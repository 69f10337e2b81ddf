//! Triplet search: combine bottom and top duplets of one middle point.
//!
//! Works entirely on the conformal images of the duplets. The two
//! points (U_b, V_b) and (U_t, V_t) define a line V = A·U + B whose
//! parameters give the helix diameter and transverse impact parameter
//! in closed form; triplets failing the multiple-scattering budget, the
//! minimum-pT bound or the impact cut are dropped here.

use crate::core::types::InternalSpacePoint;

use super::config::{DerivedConfig, SeedfinderConfig};
use super::filter::{CandidateSeed, SeedFilter};
use super::lin_circle::LinCircle;

/// Search all (bottom × top) duplet combinations of one middle point.
///
/// `bottoms`/`tops` are the duplet survivors, `lin_bottoms`/`lin_tops`
/// their conformal images in matching order. Accepted triplets of each
/// bottom are weighed by the filter's first stage; the resulting
/// candidates are appended to `candidates` for the per-middle second
/// stage.
#[allow(clippy::too_many_arguments)]
pub(crate) fn search_triplets<'a>(
    middle: &'a InternalSpacePoint,
    bottoms: &[&'a InternalSpacePoint],
    tops: &[&'a InternalSpacePoint],
    lin_bottoms: &[LinCircle],
    lin_tops: &[LinCircle],
    config: &SeedfinderConfig,
    derived: &DerivedConfig,
    filter: &SeedFilter,
    candidates: &mut Vec<CandidateSeed<'a>>,
) {
    let sigma2 = config.sigma_scattering * config.sigma_scattering;

    let mut top_sp: Vec<&InternalSpacePoint> = Vec::with_capacity(tops.len());
    let mut curvatures: Vec<f32> = Vec::with_capacity(tops.len());
    let mut impacts: Vec<f32> = Vec::with_capacity(tops.len());

    for (b_index, &bottom) in bottoms.iter().enumerate() {
        let lb = &lin_bottoms[b_index];
        let cot_theta_b = lb.cot_theta;
        let z_origin = lb.z0;

        // 1/sin²θ of the bottom duplet, scattering budget at minimum pT
        let i_sin_theta2 = 1.0 + cot_theta_b * cot_theta_b;
        let scattering_in_region2 = derived.max_scattering_angle2 * i_sin_theta2 * sigma2;

        top_sp.clear();
        curvatures.clear();
        impacts.clear();

        for (t_index, &top) in tops.iter().enumerate() {
            let lt = &lin_tops[t_index];

            let error2 = lt.er
                + lb.er
                + 2.0
                    * (cot_theta_b * lt.cot_theta * middle.variance_r + middle.variance_z)
                    * lb.i_delta_r
                    * lt.i_delta_r;
            let delta_cot_theta = cot_theta_b - lt.cot_theta;
            let delta_cot_theta2 = delta_cot_theta * delta_cot_theta;

            // slope residual beyond the measurement error, compared
            // against the scattering budget at minimum pT first
            let mut residual2 = 0.0;
            let exceeds_error = delta_cot_theta2 - error2 > 0.0;
            if exceeds_error {
                let delta_abs = delta_cot_theta.abs();
                let error = error2.sqrt();
                residual2 = delta_cot_theta2 + error2 - 2.0 * delta_abs * error;
                if residual2 > scattering_in_region2 {
                    continue;
                }
            }

            let du = lt.u - lb.u;
            if du == 0.0 {
                continue;
            }

            // line fit through the two conformal images
            let a = (lt.v - lb.v) / du;
            let s2 = 1.0 + a * a;
            let b = lb.v - a * lb.u;
            let b2 = b * b;

            // helix diameter below the minimum-pT bound
            if s2 < b2 * derived.min_helix_diameter2 {
                continue;
            }

            // refine the scattering cut with the actual seed pT
            let i_helix_diameter2 = b2 / s2;
            let pt2_scatter = 4.0 * i_helix_diameter2 * derived.pt2_per_radius;
            let p2_scatter = pt2_scatter * i_sin_theta2;
            if exceeds_error && residual2 > p2_scatter * sigma2 {
                continue;
            }

            let impact = ((a - b * middle.r) * middle.r).abs();
            if impact > config.impact_max {
                continue;
            }

            top_sp.push(top);
            curvatures.push(b / s2.sqrt());
            impacts.push(impact);
        }

        if !top_sp.is_empty() {
            filter.filter_2sp_fixed(
                bottom,
                middle,
                &top_sp,
                &curvatures,
                &impacts,
                z_origin,
                candidates,
            );
        }
    }
}
