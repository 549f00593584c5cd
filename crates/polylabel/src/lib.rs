//! Pole of inaccessibility for polygons with holes.
//!
//! The pole is the interior point farthest from the outline. We find it with a
//! best-first branch-and-bound over square cells: every cell carries the exact
//! signed distance at its center and an upper bound over its whole square, and
//! cells whose bound cannot beat the incumbent by more than `precision` are
//! dropped instead of split.
//!
//! Layout
//! - `queue`: comparator-driven binary heap (no geometry).
//! - `geom`: points, rings, polygons, signed distance, centroid.
//! - `search`: cells, scoring, and the driver (`polylabel`, `solve`).
//! - `geojson`, `sample`, `convert` (feature `geo`): ways to get a `Polygon`.

mod cfg;
pub mod error;
pub mod geojson;
pub mod geom;
pub mod queue;
pub mod sample;
pub mod search;

#[cfg(feature = "geo")]
pub mod convert;

pub use error::{PolylabelError, Result};
pub use geom::{centroid, segment_distance_sq, signed_distance, Bounds, Point, Polygon, Ring};
pub use queue::PriorityQueue;
pub use search::{polylabel, solve, Cell, LabelCfg, Scoring, Solution};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{signed_distance, Point, Polygon, Ring};
    pub use crate::search::{polylabel, solve, LabelCfg, Scoring, Solution};
    pub use crate::{PolylabelError, Result};
    pub use nalgebra::Vector2;
}
