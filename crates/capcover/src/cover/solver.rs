//! Bisection on cap height and the derived angular quantities.

use std::f64::consts::PI;

use super::types::{CapGeometry, CoverCfg};

/// Surface area `2πRh` of a single spherical cap of height `h`.
#[inline]
pub fn cap_surface_area(radius: f64, height: f64) -> f64 {
    2.0 * PI * radius * height
}

/// Combined surface area of `num_caps` identical caps of height `h`.
#[inline]
pub fn total_cap_area(radius: f64, height: f64, num_caps: usize) -> f64 {
    num_caps as f64 * cap_surface_area(radius, height)
}

/// Cap height at which `num_caps` caps jointly match the sphere area `4πR²`.
///
/// Bisection on `[0, R]`: the overshoot predicate
/// `total_cap_area(mid) > 4πR²` is monotone in `h`, so each step halves the
/// bracket; the last midpoint is returned once the bracket width is at most
/// `cfg.tolerance`.
///
/// Pre: `radius > 0`, `num_caps >= 1`, `cfg.tolerance > 0`. Not validated;
/// out-of-range inputs are caller bugs.
///
/// Boundary: for `num_caps == 1` the target area exceeds the reachable
/// `2πR·R`, the upper bound never moves, and the result converges to
/// `radius`. Callers that sweep down to one cap must treat that value as
/// under-constrained rather than a solution.
pub fn optimal_cap_height(radius: f64, num_caps: usize, cfg: CoverCfg) -> f64 {
    let target = 4.0 * PI * radius * radius;
    let mut h_min = 0.0;
    let mut h_max = radius;
    let mut h_mid = 0.5 * (h_min + h_max);
    while h_max - h_min > cfg.tolerance {
        h_mid = 0.5 * (h_min + h_max);
        if total_cap_area(radius, h_mid, num_caps) > target {
            h_max = h_mid;
        } else {
            h_min = h_mid;
        }
    }
    h_mid
}

/// Half-angle `φ = 2·asin(h / 2R)` subtended by a cap of height `h`, radians.
///
/// Domain: `h ≤ 2R`, always satisfied for heights out of the solver
/// (`h ≤ R`).
#[inline]
pub fn half_angle(height: f64, radius: f64) -> f64 {
    2.0 * (height / (2.0 * radius)).asin()
}

/// Arc length `2πR·sin(φ)` of the circle at the cap boundary's latitude.
#[inline]
pub fn rim_arc_length(half_angle: f64, radius: f64) -> f64 {
    2.0 * PI * radius * half_angle.sin()
}

/// Solve and derive in one step: the per-cap-count row of a sweep.
pub fn cap_geometry(radius: f64, num_caps: usize, cfg: CoverCfg) -> CapGeometry {
    let height = optimal_cap_height(radius, num_caps, cfg);
    let phi = half_angle(height, radius);
    CapGeometry {
        height,
        half_angle: phi,
        arc_length: rim_arc_length(phi, radius),
    }
}
