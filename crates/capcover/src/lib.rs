//! Spherical cap covering geometry.
//!
//! Two concerns, both pure computation over real-valued vectors:
//! - `cover`: solve for the cap height at which N identical caps jointly
//!   match the sphere's surface area (coverage balance), plus the angular
//!   quantities derived from that height.
//! - `placement`: symmetric cap center directions from Platonic-solid
//!   vertices, and the rotation aligning the canonical polar cap patch
//!   onto any center.
//!
//! The rendering side lives elsewhere; this crate only hands it heights,
//! directions, and rotation matrices (see `crates/cli` for the artifact
//! formats).

pub mod api;
pub mod cover;
pub mod placement;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so call sites read like the formulas.
pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cover::{
        cap_geometry, cap_surface_area, half_angle, optimal_cap_height, rim_arc_length,
        total_cap_area, CapGeometry, CoverCfg,
    };
    pub use crate::placement::{
        cap_centers, pole, rotation_aligning, PlacementError, Polyhedron,
    };
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
