//! Planar polygon geometry used by the search.
//!
//! - `types`: `Point`, `Ring`, `Polygon` (validated on construction), `Bounds`.
//! - `distance`: signed point-to-outline distance and the segment helper.
//! - `centroid`: shoelace centroid of the outer ring.
//!
//! Conventions
//! - Rings are implicitly closed; the edge from the last vertex back to the
//!   first is always visited, so an explicit closing vertex only adds a
//!   zero-length edge.
//! - Ring 0 is the outer boundary. Holes count for distance and inside tests,
//!   never for bounds or centroid.

mod centroid;
mod distance;
mod types;

pub use centroid::centroid;
pub use distance::{segment_distance_sq, signed_distance};
pub use types::{Bounds, Point, Polygon, Ring};
