//! Curated flat re-export surface.
//!
//! Prefer these re-exports in experiments and downstream tools so call sites
//! stay stable while the module layout evolves.

// Coverage-balance solver and derived quantities
pub use crate::cover::{
    cap_geometry, cap_surface_area, half_angle, optimal_cap_height, rim_arc_length,
    total_cap_area, CapGeometry, CoverCfg,
};
// Symmetric placements and patch alignment
pub use crate::placement::{
    cap_centers, pole, rotation_aligning, PlacementError, Polyhedron,
};
// Reproducible direction sampling
pub use crate::placement::rand::{draw_unit_direction, ReplayToken};
