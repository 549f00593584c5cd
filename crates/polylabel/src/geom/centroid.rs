use super::types::{Point, Polygon};

/// Area centroid of the outer ring (shoelace formula).
///
/// Falls back to the first outer vertex when the signed area is exactly zero
/// (collinear or self-cancelling rings). Holes are ignored.
pub fn centroid(polygon: &Polygon) -> Point {
    let ring = polygon.outer();
    let n = ring.len();
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];
        let f = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * f;
        y += (a.y + b.y) * f;
        area += f * 3.0;
        j = i;
    }
    if area == 0.0 {
        return ring[0];
    }
    Point::new(x / area, y / area)
}
