//! Coverage-balance cap height solver.
//!
//! Purpose
//! - Given a sphere radius and a cap count, find the cap height at which the
//!   caps' combined surface area `N · 2πRh` equals the full sphere area
//!   `4πR²`, then derive the cap's half-angle and rim arc length.
//!
//! Why bisection
//! - `total_cap_area` is linear (hence strictly increasing) in `h` for fixed
//!   `R` and `N ≥ 1`, so the overshoot predicate is monotone on `[0, R]` and
//!   interval halving converges unconditionally in
//!   `O(log2(R / tolerance))` steps.
//!
//! Code cross-refs: `placement` consumes nothing from here; the two modules
//! meet only in callers that pair a height with a set of center directions.

mod solver;
mod types;

pub use solver::{
    cap_geometry, cap_surface_area, half_angle, optimal_cap_height, rim_arc_length,
    total_cap_area,
};
pub use types::{CapGeometry, CoverCfg};
