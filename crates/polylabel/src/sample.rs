//! Random star-shaped polygons (angular/radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic test and bench inputs: simple polygons of controllable
//!   vertex count and spikiness, optionally with one hole.
//!
//! Model
//! - `n` equally spaced angles with bounded angular jitter (strictly below half
//!   the spacing, so the ring stays simple), jittered radii around `radius`.
//! - The optional hole is the outer ring scaled toward the center; scaling a
//!   star-shaped ring toward its kernel point keeps it strictly inside.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PolylabelError, Result};
use crate::geom::{Point, Polygon, Ring};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub radius: f64,
    pub center: Point,
    /// Hole as a fraction of the outer ring, clamped to [0.05, 0.9]. `None`: no hole.
    pub hole_scale: Option<f64>,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            radius: 100.0,
            center: Point::zeros(),
            hole_scale: None,
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

    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a random star-shaped polygon.
///
/// With at least 4 vertices every angular gap stays below π, so `cfg.center`
/// is strictly inside the outer ring. Fails for a non-finite or non-positive
/// radius, or a non-finite center.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Result<Polygon> {
    if !(cfg.radius.is_finite() && cfg.radius > 0.0) {
        return Err(PolylabelError::InvalidGeometry {
            message: format!("star radius must be finite and positive, got {}", cfg.radius),
        });
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;

    let outer: Ring = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = cfg.radius * (1.0 + u);
            cfg.center + Point::new(th.cos(), th.sin()) * r
        })
        .collect();

    let mut rings = vec![outer];
    if let Some(s) = cfg.hole_scale {
        let s = s.clamp(0.05, 0.9);
        let hole: Ring = rings[0]
            .iter()
            .rev()
            .map(|p| cfg.center + (p - cfg.center) * s)
            .collect();
        rings.push(hole);
    }
    Polygon::new(rings)
}
