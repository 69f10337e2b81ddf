//! Duplet search: partner selection for a fixed middle point.

use crate::core::types::InternalSpacePoint;

use super::config::SeedfinderConfig;

/// Which side of the middle point a duplet partner sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DupletRole {
    /// Partner inside the middle radius
    Bottom,
    /// Partner outside the middle radius
    Top,
}

/// Select the duplet partners of `middle` among `partners`.
///
/// A partner survives when its signed radial gap lies in
/// `[delta_r_min, delta_r_max]`, the duplet's forward angle satisfies
/// `|cotθ| ≤ cot_theta_max` and the straight-line extrapolation to the
/// beam axis falls inside the collision region. Partners are visited in
/// input order and survivors preserve it.
///
/// # Arguments
/// * `role` - bottom or top partner selection
/// * `partners` - candidate points, typically chained neighbour bins
/// * `middle` - the fixed middle point
/// * `config` - cut values
/// * `output` - survivor buffer (cleared before filling)
pub fn search_duplets_into<'a, I>(
    role: DupletRole,
    partners: I,
    middle: &InternalSpacePoint,
    config: &SeedfinderConfig,
    output: &mut Vec<&'a InternalSpacePoint>,
) where
    I: IntoIterator<Item = &'a InternalSpacePoint>,
{
    output.clear();

    for partner in partners {
        let delta_r = match role {
            DupletRole::Bottom => middle.r - partner.r,
            DupletRole::Top => partner.r - middle.r,
        };
        if delta_r < config.delta_r_min || delta_r > config.delta_r_max {
            continue;
        }
        // equal radii would divide by zero below; only reachable when
        // delta_r_min is configured to zero
        if delta_r == 0.0 {
            continue;
        }

        let cot_theta = match role {
            DupletRole::Bottom => (middle.z - partner.z) / delta_r,
            DupletRole::Top => (partner.z - middle.z) / delta_r,
        };
        if cot_theta.abs() > config.cot_theta_max {
            continue;
        }

        let z_origin = middle.z - middle.r * cot_theta;
        if z_origin < config.collision_region_min || z_origin > config.collision_region_max {
            continue;
        }

        output.push(partner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SpacePoint;

    fn internal(x: f32, y: f32, z: f32) -> InternalSpacePoint {
        InternalSpacePoint::new(SpacePoint::new(x, y, z, 0, 0.01, 0.01), (0.0, 0.0))
    }

    fn config() -> SeedfinderConfig {
        SeedfinderConfig {
            delta_r_min: 5.0,
            delta_r_max: 200.0,
            collision_region_min: -250.0,
            collision_region_max: 250.0,
            cot_theta_max: 7.40627,
            ..SeedfinderConfig::default()
        }
    }

    #[test]
    fn test_accepts_partner_in_band() {
        let middle = internal(50.0, 0.0, 0.0);
        let bottom = internal(10.0, 0.0, 0.0);
        let mut out = Vec::new();

        search_duplets_into(DupletRole::Bottom, [&bottom], &middle, &config(), &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_rejects_gap_outside_band() {
        let middle = internal(50.0, 0.0, 0.0);
        let too_close = internal(48.0, 0.0, 0.0); // gap 2 < 5
        let too_far = internal(300.0, 0.0, 0.0); // gap 250 > 200
        let mut out = Vec::new();

        search_duplets_into(
            DupletRole::Bottom,
            [&too_close],
            &middle,
            &config(),
            &mut out,
        );
        assert!(out.is_empty());

        search_duplets_into(DupletRole::Top, [&too_far], &middle, &config(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_wrong_side() {
        let middle = internal(50.0, 0.0, 0.0);
        let outside = internal(100.0, 0.0, 0.0);
        let mut out = Vec::new();

        // as a bottom candidate the gap is negative
        search_duplets_into(DupletRole::Bottom, [&outside], &middle, &config(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_equal_radius() {
        let middle = internal(50.0, 0.0, 0.0);
        let same_r = internal(0.0, 50.0, 10.0);
        let mut out = Vec::new();

        let config = SeedfinderConfig {
            delta_r_min: 0.0,
            ..config()
        };
        search_duplets_into(DupletRole::Bottom, [&same_r], &middle, &config, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_forward_angle() {
        let middle = internal(50.0, 0.0, 400.0);
        let bottom = internal(10.0, 0.0, 0.0); // cot theta = 10
        let mut out = Vec::new();

        search_duplets_into(DupletRole::Bottom, [&bottom], &middle, &config(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_origin_outside_collision_region() {
        // colinear in (r, z) but extrapolating to z = 400 on the axis
        let middle = internal(50.0, 0.0, 400.0);
        let bottom = internal(10.0, 0.0, 400.0);
        let mut out = Vec::new();

        search_duplets_into(DupletRole::Bottom, [&bottom], &middle, &config(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_survivors_preserve_input_order() {
        let middle = internal(100.0, 0.0, 0.0);
        let a = internal(10.0, 0.0, 0.0);
        let b = internal(40.0, 0.0, 0.0);
        let c = internal(70.0, 0.0, 0.0);
        let mut out = Vec::new();

        search_duplets_into(
            DupletRole::Bottom,
            [&b, &a, &c],
            &middle,
            &config(),
            &mut out,
        );
        let radii: Vec<f32> = out.iter().map(|sp| sp.r).collect();
        assert_eq!(radii, vec![40.0, 10.0, 70.0]);
    }

    #[test]
    fn test_top_role_signs() {
        let middle = internal(50.0, 0.0, 100.0);
        let top = internal(150.0, 0.0, 300.0); // cot theta = 2, z origin = 0
        let mut out = Vec::new();

        search_duplets_into(DupletRole::Top, [&top], &middle, &config(), &mut out);
        assert_eq!(out.len(), 1);
    }
}
