//! Label a few random star polygons and print how the two scorings differ.
//!
//! Usage:
//!   cargo run -p polylabel --example random_stars -- [count]

use polylabel::sample::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polylabel::{solve, LabelCfg, Scoring};

fn main() -> polylabel::Result<()> {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 6, max: 24 },
        hole_scale: Some(0.2),
        ..StarCfg::default()
    };
    for index in 0..count {
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 2025, index })?;
        let biased = solve(&poly, &LabelCfg::default())?;
        let plain = solve(
            &poly,
            &LabelCfg {
                scoring: Scoring::Distance,
                ..LabelCfg::default()
            },
        )?;
        println!(
            "star {index}: n={} biased=({:.2}, {:.2}) d={:.2} [{} cells]  plain=({:.2}, {:.2}) d={:.2} [{} cells]",
            poly.outer().len(),
            biased.point.x,
            biased.point.y,
            biased.distance,
            biased.probed,
            plain.point.x,
            plain.point.y,
            plain.distance,
            plain.probed,
        );
    }
    Ok(())
}
