//! Value types: points, rings, polygons and bounding boxes.

use nalgebra::Vector2;

use crate::error::{PolylabelError, Result};

/// A point (or offset) in the plane.
pub type Point = Vector2<f64>;

/// Implicitly closed sequence of vertices.
pub type Ring = Vec<Point>;

/// Outer ring followed by zero or more holes.
///
/// Invariants (checked by every constructor):
/// - at least one ring;
/// - every ring has at least one vertex;
/// - every coordinate is finite.
///
/// Winding order, self-intersection and hole containment are not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Result<Self> {
        if rings.is_empty() {
            return Err(PolylabelError::EmptyPolygon);
        }
        for (k, ring) in rings.iter().enumerate() {
            if ring.is_empty() {
                return Err(PolylabelError::EmptyRing { ring: k });
            }
            if let Some(i) = ring
                .iter()
                .position(|p| !(p.x.is_finite() && p.y.is_finite()))
            {
                return Err(PolylabelError::NonFiniteCoordinate { ring: k, vertex: i });
            }
        }
        Ok(Self { rings })
    }

    /// Build from `[x, y]` pairs, outer ring first.
    pub fn from_coords(rings: Vec<Vec<[f64; 2]>>) -> Result<Self> {
        Self::new(
            rings
                .into_iter()
                .map(|r| r.into_iter().map(|[x, y]| Point::new(x, y)).collect())
                .collect(),
        )
    }

    /// Polygon without holes.
    pub fn from_exterior(exterior: Ring) -> Result<Self> {
        Self::new(vec![exterior])
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    #[inline]
    pub fn outer(&self) -> &[Point] {
        &self.rings[0]
    }

    #[inline]
    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }

    /// Axis-aligned box of the outer ring.
    pub fn bounds(&self) -> Bounds {
        Bounds::of_ring(self.outer())
    }

    /// Back to `[x, y]` pairs (the bare JSON fixture layout).
    pub fn to_coordinates(&self) -> Vec<Vec<[f64; 2]>> {
        self.rings
            .iter()
            .map(|r| r.iter().map(|p| [p.x, p.y]).collect())
            .collect()
    }

    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Box of `ring`. An empty slice gives an inverted (infinite) box.
    pub fn of_ring(ring: &[Point]) -> Self {
        let init = Bounds {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        };
        ring.iter().fold(init, |b, p| Bounds {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Side of the initial grid cells: the shorter box side.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.width().min(self.height())
    }

    /// Longer box side; normalizes centroid drift in the fitness score.
    #[inline]
    pub fn max_size(&self) -> f64 {
        self.width().max(self.height())
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }
}
