//! Reproducible random unit directions (replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of uniformly distributed
//!   directions on the unit sphere, used to probe patch alignment in tests
//!   and benches without hand-picking targets.
//!
//! Model
//! - Uniform `z` over [-1, 1] and uniform azimuth over [0, 2π) give the
//!   uniform distribution on S². Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one uniform direction on the unit sphere.
pub fn draw_unit_direction(tok: ReplayToken) -> Vector3<f64> {
    let mut rng = tok.to_std_rng();
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vector3::new(r * theta.cos(), r * theta.sin(), z)
}
