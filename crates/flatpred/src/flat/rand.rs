//! Random exact point configurations (deterministic replay).
//!
//! Purpose
//! - Small seeded sampler feeding property tests and benches with
//!   integer-grid rational points of any ambient dimension. Determinism
//!   uses a replay token `(seed, index)` mixed into a single RNG, so a
//!   failing case can be reproduced from its token alone.

use nalgebra::DVector;
use num_rational::Ratio;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::build::flat_orientation;

/// Exact scalar used by the samplers.
pub type Rational = Ratio<i64>;

/// Integer-grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    /// Ambient dimension of drawn points.
    pub dim: usize,
    /// Coordinates are drawn uniformly from `-span..=span`.
    pub span: i64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self { dim: 3, span: 6 }
    }
}

/// Replay token; `(seed, index)` pairs make every draw reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ self.index.wrapping_mul(0x9e37_79b9_7f4a_7c15))
    }
}

/// Draw `count` grid points.
pub fn draw_points(count: usize, cfg: GridCfg, token: ReplayToken) -> Vec<DVector<Rational>> {
    let mut rng = token.rng();
    (0..count)
        .map(|_| {
            DVector::from_iterator(
                cfg.dim,
                (0..cfg.dim).map(|_| Rational::from_integer(rng.gen_range(-cfg.span..=cfg.span))),
            )
        })
        .collect()
}

/// Draw until the set is affinely independent, bumping the token index on
/// every rejected draw.
///
/// Needs `count <= cfg.dim + 1`; with a generous `span` a handful of
/// redraws suffices.
pub fn draw_independent_points(
    count: usize,
    cfg: GridCfg,
    token: ReplayToken,
) -> Vec<DVector<Rational>> {
    debug_assert!(
        count <= cfg.dim + 1,
        "cannot span more than dim+1 independent points"
    );
    let mut index = token.index;
    loop {
        let pts = draw_points(
            count,
            cfg,
            ReplayToken {
                seed: token.seed,
                index,
            },
        );
        if flat_orientation(&pts).is_ok() {
            return pts;
        }
        index = index.wrapping_add(1);
    }
}
