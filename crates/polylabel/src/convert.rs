//! `geo` ↔ ring conversions (feature `geo`).
//!
//! `geo` rings repeat their first coordinate at the end; that is kept as is,
//! since the extra zero-length edge does not change distances.

use geo::{Coord, LineString, MultiPolygon};

use crate::error::{PolylabelError, Result};
use crate::geom::{Point, Polygon, Ring};

fn ring_from_line_string(ls: &LineString<f64>) -> Ring {
    ls.coords().map(|c| Point::new(c.x, c.y)).collect()
}

fn line_string_from_ring(ring: &[Point]) -> LineString<f64> {
    LineString::new(ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

impl TryFrom<&geo::Polygon<f64>> for Polygon {
    type Error = PolylabelError;

    fn try_from(poly: &geo::Polygon<f64>) -> Result<Self> {
        let mut rings = Vec::with_capacity(1 + poly.interiors().len());
        rings.push(ring_from_line_string(poly.exterior()));
        rings.extend(poly.interiors().iter().map(ring_from_line_string));
        Polygon::new(rings)
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(poly: &Polygon) -> Self {
        geo::Polygon::new(
            line_string_from_ring(poly.outer()),
            poly.holes().iter().map(|r| line_string_from_ring(r)).collect(),
        )
    }
}

/// One `Polygon` per member of `mp`, in order.
pub fn polygons_from_multi(mp: &MultiPolygon<f64>) -> Result<Vec<Polygon>> {
    mp.0.iter().map(Polygon::try_from).collect()
}
