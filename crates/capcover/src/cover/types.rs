//! Solver configuration and result bundle.

/// Solver configuration (stopping width).
#[derive(Clone, Copy, Debug)]
pub struct CoverCfg {
    /// Bisection terminates when the bracket width drops to this value.
    /// Absolute, in `h`-space; no guarantee on derived quantities beyond
    /// first-order propagation.
    pub tolerance: f64,
}

impl Default for CoverCfg {
    fn default() -> Self {
        Self { tolerance: 1e-6 }
    }
}

/// Per-cap-count geometry: the solved height and its derived angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapGeometry {
    /// Cap height `h ∈ [0, R]` along the polar axis.
    pub height: f64,
    /// Half-angle `φ = 2·asin(h / 2R)` subtended by the cap, radians.
    pub half_angle: f64,
    /// Rim arc length `2πR·sin(φ)` at the cap boundary's latitude.
    pub arc_length: f64,
}
