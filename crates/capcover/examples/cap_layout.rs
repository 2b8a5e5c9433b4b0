//! End-to-end layout report: solved height plus per-cap center and the
//! rotation that carries the polar patch onto it.

use capcover::cover::{cap_geometry, CoverCfg};
use capcover::placement::{cap_centers, pole, rotation_aligning};

fn main() {
    let radius = 1.0;
    let num_caps = 6;

    let g = cap_geometry(radius, num_caps, CoverCfg::default());
    println!(
        "caps={num_caps} height={:.6} phi_deg={:.6} arc_length={:.6}",
        g.height,
        g.half_angle.to_degrees(),
        g.arc_length
    );

    let centers = cap_centers(radius, num_caps).expect("supported cap count");
    for (i, d) in centers.iter().enumerate() {
        let m = rotation_aligning(pole(), *d);
        let image = m * pole() * radius;
        println!(
            "cap {i}: center=({:+.4}, {:+.4}, {:+.4}) pole_image=({:+.4}, {:+.4}, {:+.4})",
            d.x, d.y, d.z, image.x, image.y, image.z
        );
    }
}
