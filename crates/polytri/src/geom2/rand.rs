//! Random simple polygons in 2D (star-shaped, radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic input for property tests, benches and the demo session:
//!   every draw is a simple polygon, so feeding its vertices in order to the
//!   validity engine must be accepted.
//!
//! Model
//! - `n` angles around `center`, equally spaced plus bounded jitter, kept in
//!   increasing order; one jittered radius per angle. Consecutive angular gaps
//!   stay below π, which makes the vertex cycle star-shaped around `center`
//!   and therefore simple.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Polygon, MIN_POLYGON_VERTICES};

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: usize,
    pub center: Point,
    pub base_radius: f64,
    /// Relative radial jitter: radii lie in `base_radius * [1 - j, 1 + j]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    /// Angular jitter as a fraction of the base spacing. Clamped so gaps stay below π.
    pub angle_jitter_frac: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            center: Point::new(0.0, 0.0),
            base_radius: 100.0,
            radial_jitter: 0.25,
            angle_jitter_frac: 0.3,
        }
    }
}

impl StarCfg {
    /// Effective `(vertex count, angle jitter, radial jitter)` after clamping.
    fn clamped(&self) -> (usize, f64, f64) {
        let n = self.vertex_count.max(MIN_POLYGON_VERTICES);
        // max gap = delta * (1 + 2 aj) < π
        let aj_cap = ((n as f64 / 2.0 - 1.0) / 2.0 - 0.01).max(0.0);
        let aj = self.angle_jitter_frac.clamp(0.0, 0.49).min(aj_cap);
        (n, aj, self.radial_jitter.clamp(0.0, 0.9))
    }

    /// `(min, max)` distance of any drawn vertex from `center`.
    pub fn radius_bounds(&self) -> (f64, f64) {
        let (_, _, rj) = self.clamped();
        (self.base_radius * (1.0 - rj), self.base_radius * (1.0 + rj))
    }

    /// Lower bound on the distance from `center` to any edge of a drawn polygon.
    pub fn inradius_bound(&self) -> f64 {
        let (n, aj, _) = self.clamped();
        let max_gap = std::f64::consts::TAU / n as f64 * (1.0 + 2.0 * aj);
        self.radius_bounds().0 * (max_gap / 2.0).cos()
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    fn rng(self) -> StdRng {
        // SplitMix64 finalizer over both halves of the token.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a simple star-shaped polygon, counterclockwise around `cfg.center`.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.rng();
    let (n, aj, rj) = cfg.clamped();
    let delta = std::f64::consts::TAU / n as f64;
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let c = cfg.center.to_vector();
    let vertices = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = cfg.base_radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            Point::from(c + Vector2::new(th.cos(), th.sin()) * r)
        })
        .collect();
    Polygon::from_checked(vertices)
}

/// Draw `levels` star polygons around one center, each strictly inside the previous.
///
/// Depth `k` polygon is a hole for odd `k`. Radii shrink geometrically so the
/// outermost vertex of level `k+1` stays closer to the center than any edge of level `k`.
pub fn draw_nested_stars(cfg: StarCfg, levels: usize, tok: ReplayToken) -> Vec<Polygon> {
    let shrink = 0.9 * cfg.inradius_bound() / cfg.radius_bounds().1;
    let mut out = Vec::with_capacity(levels);
    let mut level_cfg = cfg;
    let mut t = tok;
    for _ in 0..levels {
        out.push(draw_star_polygon(level_cfg, t));
        level_cfg.base_radius *= shrink;
        t = t.next();
    }
    out
}
