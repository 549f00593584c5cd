//! Best-first branch-and-bound for the pole of inaccessibility.
//!
//! Purpose
//! - Tile the outer bounding box with square cells, then repeatedly pop the
//!   cell with the largest upper bound, update the incumbent, and either prune
//!   it (bound within `precision` of the incumbent) or split it into quadrants.
//!
//! Scoring
//! - `Scoring::CentroidBiased` (default) ranks cells by distance discounted by
//!   drift from the outer-ring centroid, which keeps elongated or multi-lobed
//!   shapes from pulling the answer onto a far appendage.
//! - `Scoring::Distance` ranks by raw distance and additionally seeds the
//!   incumbent with the bounding-box center (rectangles).
//!
//! Layout
//! - `types.rs` (cfg, scoring, result), `cell.rs` (cells and queue order),
//!   `driver.rs` (the loop).

mod cell;
mod driver;
mod types;

pub use cell::{by_max_fitness, Cell};
pub use driver::{polylabel, solve};
pub use types::{Fitness, LabelCfg, Scoring, Solution};
