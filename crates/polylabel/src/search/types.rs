//! Search configuration, scoring and results.

use crate::cfg::DEFAULT_PRECISION;
use crate::error::{PolylabelError, Result};
use crate::geom::{centroid, Point, Polygon};

/// How cells are ranked and compared against the incumbent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scoring {
    /// Distance discounted by `|p - centroid| / max_size` for inside points.
    #[default]
    CentroidBiased,
    /// Raw signed distance.
    Distance,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelCfg {
    /// Stop refining once no cell can beat the incumbent by more than this.
    pub precision: f64,
    pub scoring: Scoring,
}

impl Default for LabelCfg {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            scoring: Scoring::default(),
        }
    }
}

impl LabelCfg {
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(PolylabelError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(())
    }
}

/// Fitness function bound to one polygon: `(point, distance) -> score`.
#[derive(Clone, Copy, Debug)]
pub struct Fitness {
    pub scoring: Scoring,
    pub centroid: Point,
    pub max_size: f64,
}

impl Fitness {
    pub fn new(scoring: Scoring, polygon: &Polygon) -> Self {
        Self {
            scoring,
            centroid: centroid(polygon),
            max_size: polygon.bounds().max_size(),
        }
    }

    /// Outside points (`distance <= 0`) keep their raw distance under either
    /// scoring so the least-bad of them still compare sensibly.
    #[inline]
    pub fn score(&self, p: Point, distance: f64) -> f64 {
        match self.scoring {
            Scoring::Distance => distance,
            Scoring::CentroidBiased if distance <= 0.0 => distance,
            Scoring::CentroidBiased => {
                distance * (1.0 - (p - self.centroid).norm() / self.max_size)
            }
        }
    }
}

/// Outcome of `solve`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub point: Point,
    /// Signed distance from `point` to the outline.
    pub distance: f64,
    pub fitness: f64,
    /// Number of cells evaluated (including the seed cells).
    pub probed: usize,
}
