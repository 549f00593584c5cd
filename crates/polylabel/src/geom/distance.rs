use super::types::{Point, Polygon};

/// Signed distance from `p` to the outline of `polygon`.
///
/// Positive inside, negative outside. Inside-ness is ray-casting parity
/// accumulated over every ring, so a point in a hole counts as outside. The
/// magnitude is the minimum over all edges of all rings. Points exactly on an
/// edge come out as `±0.0` depending on which way the parity lands.
pub fn signed_distance(p: Point, polygon: &Polygon) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;

    for ring in polygon.rings() {
        let n = ring.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = ring[i];
            let b = ring[j];
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            min_dist_sq = min_dist_sq.min(segment_distance_sq(p, a, b));
            j = i;
        }
    }

    let d = min_dist_sq.sqrt();
    if inside {
        d
    } else {
        -d
    }
}

/// Squared distance from `p` to the segment `a`–`b`.
///
/// Projects onto the supporting line and clamps to the endpoints; a
/// zero-length segment measures to `a`.
pub fn segment_distance_sq(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let mut closest = a;
    if ab.x != 0.0 || ab.y != 0.0 {
        let t = (p - a).dot(&ab) / ab.norm_squared();
        if t > 1.0 {
            closest = b;
        } else if t > 0.0 {
            closest = a + ab * t;
        }
    }
    (p - closest).norm_squared()
}
