//! Platonic-solid vertex tables and the placement entry point.

use std::fmt;

use nalgebra::Vector3;

// Golden ratio, for the icosahedron's three golden rectangles.
const PHI: f64 = 1.618_033_988_749_894_9;

/// Tetrahedron as four alternating-sign corners of the unit cube.
const TETRAHEDRON: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

/// Octahedron as ±1 along each coordinate axis.
const OCTAHEDRON: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Cube as all sign combinations of (1, 1, 1).
const CUBE: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
];

/// Icosahedron from three mutually orthogonal golden rectangles.
const ICOSAHEDRON: [[f64; 3]; 12] = [
    [0.0, 1.0, PHI],
    [0.0, 1.0, -PHI],
    [0.0, -1.0, PHI],
    [0.0, -1.0, -PHI],
    [1.0, PHI, 0.0],
    [1.0, -PHI, 0.0],
    [-1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, 1.0],
    [PHI, 0.0, -1.0],
    [-PHI, 0.0, -1.0],
];

/// The regular polyhedra whose vertices serve as cap centers.
///
/// Tagged dispatch keyed by cap count; the supported-count set and its vertex
/// tables are one data structure rather than a branch ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polyhedron {
    Tetrahedron,
    Octahedron,
    Cube,
    Icosahedron,
}

impl Polyhedron {
    /// Polyhedron with exactly `count` vertices, if one is supported.
    pub fn from_cap_count(count: usize) -> Option<Self> {
        match count {
            4 => Some(Self::Tetrahedron),
            6 => Some(Self::Octahedron),
            8 => Some(Self::Cube),
            12 => Some(Self::Icosahedron),
            _ => None,
        }
    }

    /// Canonical vertex listing (unnormalized literals, fixed order).
    pub fn vertices(self) -> &'static [[f64; 3]] {
        match self {
            Self::Tetrahedron => &TETRAHEDRON,
            Self::Octahedron => &OCTAHEDRON,
            Self::Cube => &CUBE,
            Self::Icosahedron => &ICOSAHEDRON,
        }
    }

    #[inline]
    pub fn vertex_count(self) -> usize {
        self.vertices().len()
    }
}

/// Error type for placement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Requested count has no equivalent-vertex regular polyhedron here.
    InvalidCapCount { count: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapCount { count } => {
                write!(f, "unsupported cap count {count}: expected 4, 6, 8, or 12")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Cap center directions: the chosen polyhedron's vertices, each normalized
/// to unit length and scaled to `radius`, in listing order.
///
/// Post: exactly `num_caps` vectors, each of norm `radius`.
pub fn cap_centers(radius: f64, num_caps: usize) -> Result<Vec<Vector3<f64>>, PlacementError> {
    let poly = Polyhedron::from_cap_count(num_caps)
        .ok_or(PlacementError::InvalidCapCount { count: num_caps })?;
    Ok(poly
        .vertices()
        .iter()
        .map(|&[x, y, z]| Vector3::new(x, y, z).normalize() * radius)
        .collect())
}
