//! Reference fixtures and file-based shapes.
//!
//! The water fixtures are large third-party files that are not vendored here;
//! tests that need them skip when the file is missing (see fixtures/README.md).

use std::path::PathBuf;

use approx::assert_relative_eq;
use polylabel::geojson::read_polygon;
use polylabel::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> Polygon {
    read_polygon(fixture_path(name)).unwrap()
}

fn optional_fixture(name: &str) -> Option<Polygon> {
    let path = fixture_path(name);
    if !path.exists() {
        eprintln!("skipping: {} not present", path.display());
        return None;
    }
    Some(read_polygon(path).unwrap())
}

fn assert_point(p: Point, x: f64, y: f64) {
    assert_relative_eq!(p.x, x, epsilon = 1e-6);
    assert_relative_eq!(p.y, y, epsilon = 1e-6);
}

#[test]
fn water1_precision_1() {
    let Some(water1) = optional_fixture("water1.json") else {
        return;
    };
    let p = polylabel(&water1, 1.0).unwrap();
    assert_point(p, 3865.85009765625, 2124.87841796875);
}

#[test]
fn water1_precision_50() {
    let Some(water1) = optional_fixture("water1.json") else {
        return;
    };
    let coarse = polylabel(&water1, 50.0).unwrap();
    assert_point(coarse, 3854.296875, 2123.828125);
    assert_ne!(coarse, polylabel(&water1, 1.0).unwrap());
}

#[test]
fn water2_default_precision() {
    let Some(water2) = optional_fixture("water2.json") else {
        return;
    };
    let p = polylabel(&water2, 1.0).unwrap();
    assert_point(p, 3263.5, 3263.5);
}

#[test]
fn water_fixtures_agree_across_scorings() {
    for (name, precision) in [("water1.json", 1.0), ("water1.json", 50.0), ("water2.json", 1.0)] {
        let Some(poly) = optional_fixture(name) else {
            continue;
        };
        let biased = solve(&poly, &LabelCfg::with_precision(precision)).unwrap();
        let plain = solve(
            &poly,
            &LabelCfg {
                precision,
                scoring: Scoring::Distance,
            },
        )
        .unwrap();
        assert_eq!(biased.point, plain.point, "{name} @ {precision}");
    }
}

#[test]
fn degenerate_fixtures_return_origin() {
    for name in ["degenerate_line.json", "degenerate_spike.json"] {
        let p = polylabel(&fixture(name), 1.0).unwrap();
        assert_eq!(p, Vector2::new(0.0, 0.0), "{name}");
    }
}

#[test]
fn frame_fixture_avoids_the_hole() {
    let frame = fixture("frame.json");
    assert_eq!(frame.holes().len(), 1);
    let s = solve(&frame, &LabelCfg::default()).unwrap();
    assert!(s.distance > 1.0, "{s:?}");
    assert_eq!(s.distance, signed_distance(s.point, &frame));
}
