//! Cap geometry table for a sweep of cap counts on one sphere.
//!
//! Prints, per cap count, the solved height fraction, the half-angle in
//! degrees, and the rim arc length. Counts beyond the placement set are
//! included on purpose: the height solver is count-agnostic.

use capcover::cover::{cap_geometry, CoverCfg};

fn main() {
    let radius = 1.0;
    let counts = [2usize, 4, 6, 8, 12, 20];

    println!("For a sphere with radius R = {radius}:");
    for &num_caps in &counts {
        let g = cap_geometry(radius, num_caps, CoverCfg::default());
        println!(
            "Number of Caps: {num_caps}, Optimal Cap Height Fraction: {:.6}, phi: {:.6}, L: {:.6}",
            g.height,
            g.half_angle.to_degrees(),
            g.arc_length
        );
    }
}
