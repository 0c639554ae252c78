//! Random shape trees (replay tokens).
//!
//! Purpose
//! - Deterministic sampler for benches and property tests: every tree is
//!   reproducible from a `(seed, index)` token.
//!
//! Model
//! - Below `max_depth`, each node is a compound with probability
//!   `compound_prob`, a decorator with probability `decorator_prob`, and a
//!   leaf otherwise. At `max_depth` only leaves are drawn.
//! - Leaf sizes are uniform in `[min_size, max_size]`, clamped to
//!   `[1e-6, MAX_LEAF_SIZE]` (non-finite bounds fall back to the clamp).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::build::{circle, compound, polygon, rectangle, rotated, scaled, spacer};
use crate::shape::{Layout, Rotation, ShapeRef};

/// Upper clamp on leaf sizes; keeps every sampled box far from overflow.
pub const MAX_LEAF_SIZE: f64 = 1e100;

/// Tree sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TreeCfg {
    pub max_depth: usize,
    /// Children per compound, clamped to at least 1.
    pub max_children: usize,
    pub compound_prob: f64,
    pub decorator_prob: f64,
    /// Allow spacers among the leaves.
    pub spacers: bool,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for TreeCfg {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_children: 4,
            compound_prob: 0.4,
            decorator_prob: 0.2,
            spacers: true,
            min_size: 1.0,
            max_size: 50.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Draw one random tree.
pub fn draw_tree(cfg: TreeCfg, tok: ReplayToken) -> ShapeRef {
    let mut rng = tok.to_std_rng();
    draw_node(&cfg, &mut rng, 0)
}

fn draw_node<R: Rng>(cfg: &TreeCfg, rng: &mut R, depth: usize) -> ShapeRef {
    if depth < cfg.max_depth {
        let u: f64 = rng.gen();
        if u < cfg.compound_prob {
            let layout = match rng.gen_range(0..3) {
                0 => Layout::Layered,
                1 => Layout::Vertical,
                _ => Layout::Horizontal,
            };
            let n = rng.gen_range(1..=cfg.max_children.max(1));
            let children: Vec<ShapeRef> =
                (0..n).map(|_| draw_node(cfg, rng, depth + 1)).collect();
            if let Ok(s) = compound(layout, children) {
                return s;
            }
        } else if u < cfg.compound_prob + cfg.decorator_prob {
            let child = draw_node(cfg, rng, depth + 1);
            if rng.gen_bool(0.5) {
                let rot = match rng.gen_range(0..3) {
                    0 => Rotation::R90,
                    1 => Rotation::R180,
                    _ => Rotation::R270,
                };
                return rotated(child, rot);
            }
            let (sx, sy) = (rng.gen_range(0.25..4.0), rng.gen_range(0.25..4.0));
            if let Ok(s) = scaled(child, sx, sy) {
                return s;
            }
        }
    }
    draw_leaf(cfg, rng)
}

fn draw_leaf<R: Rng>(cfg: &TreeCfg, rng: &mut R) -> ShapeRef {
    let lo = cfg.min_size.max(1e-6).min(MAX_LEAF_SIZE);
    let hi = cfg.max_size.min(MAX_LEAF_SIZE).max(lo * (1.0 + 1e-9));
    let kinds = if cfg.spacers { 4 } else { 3 };
    loop {
        let size = rng.gen_range(lo..=hi);
        let leaf = match rng.gen_range(0..kinds) {
            0 => circle(size / 2.0),
            1 => rectangle(size, rng.gen_range(lo..=hi)),
            2 => polygon(rng.gen_range(3..=12), size / 2.0),
            _ => spacer(size, rng.gen_range(0.0..=hi)),
        };
        // Sizes are positive and finite by construction; the loop only guards
        // against degenerate configs.
        if let Ok(s) = leaf {
            return s;
        }
    }
}
