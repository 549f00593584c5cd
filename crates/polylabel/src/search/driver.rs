//! The split/prune loop.

use crate::error::Result;
use crate::geom::{signed_distance, Bounds, Point, Polygon};
use crate::queue::PriorityQueue;

use super::cell::{by_max_fitness, Cell};
use super::types::{Fitness, LabelCfg, Scoring, Solution};

/// Pole of inaccessibility of `polygon` with the default scoring.
pub fn polylabel(polygon: &Polygon, precision: f64) -> Result<Point> {
    solve(polygon, &LabelCfg::with_precision(precision)).map(|s| s.point)
}

/// Run the search and report the incumbent with its scores.
///
/// A zero-area outer bounding box (a point or a collinear ring) returns the
/// box minimum without searching.
pub fn solve(polygon: &Polygon, cfg: &LabelCfg) -> Result<Solution> {
    cfg.validate()?;
    let bounds = polygon.bounds();
    if bounds.cell_size() == 0.0 {
        let point = bounds.min;
        let distance = signed_distance(point, polygon);
        return Ok(Solution {
            point,
            distance,
            fitness: distance,
            probed: 0,
        });
    }
    let solution = Search::new(polygon, cfg).run(bounds);
    tracing::debug!(
        probed = solution.probed,
        distance = solution.distance,
        fitness = solution.fitness,
        precision = cfg.precision,
        scoring = ?cfg.scoring,
        "polylabel search done"
    );
    Ok(solution)
}

/// Search context and counters for one call.
struct Search<'a> {
    polygon: &'a Polygon,
    precision: f64,
    fitness: Fitness,
    probed: usize,
}

impl<'a> Search<'a> {
    fn new(polygon: &'a Polygon, cfg: &LabelCfg) -> Self {
        Self {
            polygon,
            precision: cfg.precision,
            fitness: Fitness::new(cfg.scoring, polygon),
            probed: 0,
        }
    }

    fn cell(&mut self, center: Point, half_size: f64) -> Cell {
        self.probed += 1;
        let fitness = self.fitness;
        Cell::new(center, half_size, self.polygon, &|p: Point, d: f64| fitness.score(p, d))
    }

    fn run(mut self, bounds: Bounds) -> Solution {
        let mut queue = PriorityQueue::with_comparator(by_max_fitness);

        // Cover the box with squares of the shorter side. Repeated addition
        // (not multiplication) fixes the exact tile origins.
        let cell_size = bounds.cell_size();
        let h = cell_size / 2.0;
        let mut x = bounds.min.x;
        while x < bounds.max.x {
            let mut y = bounds.min.y;
            while y < bounds.max.y {
                queue.enqueue(self.cell(Point::new(x + h, y + h), h));
                y += cell_size;
            }
            x += cell_size;
        }

        let mut best = self.cell(self.fitness.centroid, 0.0);
        if self.fitness.scoring == Scoring::Distance {
            let bbox = self.cell(bounds.center(), 0.0);
            if bbox.distance > best.distance {
                best = bbox;
            }
        }

        while let Some(cell) = queue.dequeue() {
            if cell.fitness > best.fitness {
                best = cell;
            }
            if cell.max_fitness - best.fitness <= self.precision {
                continue;
            }
            let h = cell.half_size / 2.0;
            for center in cell.child_centers() {
                queue.enqueue(self.cell(center, h));
            }
        }

        Solution {
            point: best.center,
            distance: best.distance,
            fitness: best.fitness,
            probed: self.probed,
        }
    }
}
