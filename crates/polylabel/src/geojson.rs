//! Polygon JSON loading.
//!
//! Accepted documents
//! - bare coordinates `[[[x, y], ...], ...]` (outer ring first);
//! - a GeoJSON `Polygon` geometry;
//! - a GeoJSON `Feature` wrapping a `Polygon` geometry.
//!
//! Positions may carry extra components (z, m); only the first two are read.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PolylabelError, Result};
use crate::geom::{Point, Polygon, Ring};

type RawRings = Vec<Vec<Vec<f64>>>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Tagged {
    Polygon { coordinates: RawRings },
    Feature { geometry: Box<Tagged> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Bare(RawRings),
    Tagged(Tagged),
}

/// Parse a polygon from JSON text.
pub fn parse_polygon(text: &str) -> Result<Polygon> {
    let doc: Document = serde_json::from_str(text)?;
    let mut node = match doc {
        Document::Bare(rings) => return polygon_from_raw(rings),
        Document::Tagged(t) => t,
    };
    loop {
        match node {
            Tagged::Polygon { coordinates } => return polygon_from_raw(coordinates),
            Tagged::Feature { geometry } => node = *geometry,
        }
    }
}

/// Read and parse a polygon file.
pub fn read_polygon<P: AsRef<Path>>(path: P) -> Result<Polygon> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PolylabelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_polygon(&text)
}

/// Serialize as bare coordinates.
pub fn to_json(polygon: &Polygon) -> Result<String> {
    Ok(serde_json::to_string(&polygon.to_coordinates())?)
}

fn polygon_from_raw(raw: RawRings) -> Result<Polygon> {
    let mut rings = Vec::with_capacity(raw.len());
    for (k, ring) in raw.into_iter().enumerate() {
        let mut pts: Ring = Vec::with_capacity(ring.len());
        for (i, pos) in ring.into_iter().enumerate() {
            match pos.as_slice() {
                [x, y, ..] => pts.push(Point::new(*x, *y)),
                _ => {
                    return Err(PolylabelError::InvalidGeometry {
                        message: format!("ring {k}, vertex {i}: position needs two components"),
                    })
                }
            }
        }
        rings.push(pts);
    }
    Polygon::new(rings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn bare_coordinates() {
        let p = parse_polygon("[[[0, 0], [1, 0], [2, 0], [0, 0]]]").unwrap();
        assert_eq!(p.rings().len(), 1);
        assert_eq!(p.outer()[2], vector![2.0, 0.0]);
    }

    #[test]
    fn geometry_and_feature_wrappers() {
        let geom = r#"{"type": "Polygon", "coordinates": [[[0, 0], [4, 0], [4, 4], [0, 4]],
            [[1, 1], [1, 2], [2, 2]]]}"#;
        let p = parse_polygon(geom).unwrap();
        assert_eq!(p.holes().len(), 1);

        let feature = format!(r#"{{"type": "Feature", "properties": {{"name": "x"}}, "geometry": {geom}}}"#);
        assert_eq!(parse_polygon(&feature).unwrap(), p);
    }

    #[test]
    fn extra_components_are_ignored() {
        let p = parse_polygon("[[[0, 0, 9], [3, 0, 9, 1], [3, 3, 9]]]").unwrap();
        assert_eq!(p.outer()[1], vector![3.0, 0.0]);
    }

    #[test]
    fn short_positions_and_bad_documents_fail() {
        assert!(matches!(
            parse_polygon("[[[0, 0], [1], [1, 1]]]"),
            Err(PolylabelError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            parse_polygon(r#"{"type": "Point", "coordinates": [0, 0]}"#),
            Err(PolylabelError::Json(_))
        ));
        assert!(matches!(parse_polygon("[]"), Err(PolylabelError::EmptyPolygon)));
        assert!(matches!(
            read_polygon("/nonexistent/polygon.json"),
            Err(PolylabelError::Io { .. })
        ));
    }

    #[test]
    fn to_json_writes_bare_coordinates() {
        let p = parse_polygon("[[[0.5, 0], [1, 0], [1, 1]]]").unwrap();
        let text = to_json(&p).unwrap();
        assert_eq!(text, "[[[0.5,0.0],[1.0,0.0],[1.0,1.0]]]");
        assert_eq!(parse_polygon(&text).unwrap(), p);
    }
}
