//! Symmetric cap placement and patch alignment.
//!
//! Purpose
//! - Produce one center direction per cap by normalizing and scaling the
//!   vertices of the regular polyhedron whose vertex count matches the cap
//!   count (4, 6, 8, or 12 caps), and build the rotation that carries the
//!   canonical polar patch axis onto any center.
//!
//! Why fixed vertex tables
//! - The four supported counts are exactly the Platonic solids with
//!   equivalent-vertex symmetry used here; literal coordinate tables keep the
//!   supported set explicit and testable, and avoid dragging in general
//!   polytope generation for four constant lists.
//!
//! Code cross-refs: `polyhedra::{Polyhedron, PlacementError, cap_centers}`,
//! `rotation::{rotation_aligning, pole}`, `rand::{ReplayToken,
//! draw_unit_direction}`.

mod polyhedra;
pub mod rand;
mod rotation;

pub use polyhedra::{cap_centers, PlacementError, Polyhedron};
pub use rotation::{pole, rotation_aligning};

#[cfg(test)]
mod tests;
