//! Conformal transform of duplets.
//!
//! With the middle point as origin, a circle through the transverse
//! positions of the duplet becomes a straight line in the (U, V) plane:
//!
//! ```text
//! U = u / (Δx² + Δy²)      u = radial offset along φ_M
//! V = v / (Δx² + Δy²)      v = tangential offset
//! ```
//!
//! A three-point helix fit in (x, y) therefore reduces to a line fit
//! through the bottom and top images, which the triplet search performs
//! in closed form.

use crate::core::types::InternalSpacePoint;

use super::duplet::DupletRole;

/// Conformal image of one duplet, middle point at the origin.
#[derive(Debug, Clone, Copy)]
pub struct LinCircle {
    /// z of the straight-line extrapolation to the beam axis, in mm
    pub z0: f32,
    /// Signed forward slope Δz/Δr of the duplet
    pub cot_theta: f32,
    /// Inverse transverse gap 1/√(Δx² + Δy²)
    pub i_delta_r: f32,
    /// Combined measurement variance term of the duplet
    pub er: f32,
    /// Conformal abscissa
    pub u: f32,
    /// Conformal ordinate
    pub v: f32,
}

/// Transform duplet partners into conformal coordinates.
///
/// `partners` must be the survivors of the duplet search for `middle`
/// with the same `role`; the output order matches the input order. For
/// bottom partners the sign of `cot_theta` is flipped so the slope is
/// directly comparable between the two duplets of a triplet.
///
/// # Arguments
/// * `middle` - the shared middle point
/// * `partners` - accepted duplet partners
/// * `role` - bottom or top, fixing the cot θ sign
/// * `output` - transform buffer (cleared before filling)
pub fn transform_coordinates(
    middle: &InternalSpacePoint,
    partners: &[&InternalSpacePoint],
    role: DupletRole,
    output: &mut Vec<LinCircle>,
) {
    output.clear();
    output.reserve(partners.len());

    let cos_phi_m = middle.x / middle.r;
    let sin_phi_m = middle.y / middle.r;
    let sign = match role {
        DupletRole::Bottom => -1.0,
        DupletRole::Top => 1.0,
    };

    for partner in partners {
        let dx = partner.x - middle.x;
        let dy = partner.y - middle.y;
        let dz = partner.z - middle.z;

        let u = dx * cos_phi_m + dy * sin_phi_m;
        let v = dy * cos_phi_m - dx * sin_phi_m;

        let i_delta_r2 = 1.0 / (dx * dx + dy * dy);
        let i_delta_r = i_delta_r2.sqrt();
        let cot_theta = dz * i_delta_r * sign;

        output.push(LinCircle {
            z0: middle.z - middle.r * cot_theta,
            cot_theta,
            i_delta_r,
            er: ((middle.variance_z + partner.variance_z)
                + cot_theta * cot_theta * (middle.variance_r + partner.variance_r))
                * i_delta_r2,
            u: u * i_delta_r2,
            v: v * i_delta_r2,
        });
    }
}
