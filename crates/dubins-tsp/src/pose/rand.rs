//! Random tour instances (uniform box + replay tokens).
//!
//! Purpose
//! - Deterministic sampler of oriented sites for benches, property tests, and
//!   the CLI `generate` command. The same `(seed, index)` token always yields
//!   the same instance.
//!
//! Model
//! - Positions uniform in `[-half_extent, half_extent]²`.
//! - Headings uniform in `[0, 2π)` or all zero.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Configuration;
use crate::tour::Node;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SiteCfg {
    pub count: usize,
    /// Half side length of the square the positions are drawn from.
    pub half_extent: f64,
    /// Draw headings uniformly; otherwise every site faces +x.
    pub random_heading: bool,
}

impl Default for SiteCfg {
    fn default() -> Self {
        Self {
            count: 20,
            half_extent: 10.0,
            random_heading: true,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

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

/// Draw `cfg.count` sites with ids `0..count`.
pub fn draw_sites(cfg: SiteCfg, tok: ReplayToken) -> Vec<Node<usize>> {
    let mut rng = tok.to_std_rng();
    // The sampled interval width, and its scale inside the sampler, must stay finite.
    let h = cfg.half_extent.abs().max(f64::MIN_POSITIVE).min(f64::MAX / 4.0);
    (0..cfg.count)
        .map(|id| {
            let x = rng.gen_range(-h..=h);
            let y = rng.gen_range(-h..=h);
            let heading = if cfg.random_heading {
                rng.gen::<f64>() * std::f64::consts::TAU
            } else {
                0.0
            };
            Node::new(id, Configuration::new(x, y, heading))
        })
        .collect()
}
