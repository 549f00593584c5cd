//! Square search cells.

use std::cmp::Ordering;

use crate::cfg::SQRT_2;
use crate::geom::{signed_distance, Point, Polygon};
use crate::queue::natural_order;

/// Square region `center ± half_size` with its distance bounds.
///
/// Invariants:
/// - `distance` is the signed distance at `center`.
/// - `max_distance = distance + half_size·√2` bounds the distance anywhere in
///   the square (distance is 1-Lipschitz, √2·h is the circumradius).
/// - `fitness`/`max_fitness` are the fitness function applied to those two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub center: Point,
    pub half_size: f64,
    pub distance: f64,
    pub max_distance: f64,
    pub fitness: f64,
    pub max_fitness: f64,
}

impl Cell {
    pub fn new<F>(center: Point, half_size: f64, polygon: &Polygon, fitness: &F) -> Self
    where
        F: Fn(Point, f64) -> f64,
    {
        let distance = signed_distance(center, polygon);
        let max_distance = distance + half_size * SQRT_2;
        Self {
            center,
            half_size,
            distance,
            max_distance,
            fitness: fitness(center, distance),
            max_fitness: fitness(center, max_distance),
        }
    }

    /// The four quadrant centers, in split order.
    pub fn child_centers(&self) -> [Point; 4] {
        let h = self.half_size / 2.0;
        let c = self.center;
        [
            Point::new(c.x - h, c.y - h),
            Point::new(c.x + h, c.y - h),
            Point::new(c.x - h, c.y + h),
            Point::new(c.x + h, c.y + h),
        ]
    }
}

/// Queue order: larger `max_fitness` first.
pub fn by_max_fitness(a: &Cell, b: &Cell) -> Ordering {
    natural_order(&b.max_fitness, &a.max_fitness)
}
