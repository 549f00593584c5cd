use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polylabel::geojson::{read_polygon, to_json};
use polylabel::sample::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polylabel::{solve, LabelCfg, Scoring};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "polylabel")]
#[command(about = "Pole of inaccessibility for polygon files")]
struct Cmd {
    /// Log search details at debug level (to stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the pole of a polygon JSON file (bare coordinates, Polygon, or Feature)
    Label {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        precision: f64,
        #[arg(long, value_enum, default_value_t = ScoringArg::Centroid)]
        scoring: ScoringArg,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random star polygon as bare coordinates JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Add a hole scaled from the outer ring by this factor
        #[arg(long)]
        hole: Option<f64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScoringArg {
    /// Distance discounted by drift from the centroid
    Centroid,
    /// Raw distance to the outline
    Distance,
}

impl From<ScoringArg> for Scoring {
    fn from(s: ScoringArg) -> Self {
        match s {
            ScoringArg::Centroid => Scoring::CentroidBiased,
            ScoringArg::Distance => Scoring::Distance,
        }
    }
}

#[derive(Debug, Serialize)]
struct LabelReport {
    x: f64,
    y: f64,
    distance: f64,
    fitness: f64,
    probed: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Label {
            input,
            precision,
            scoring,
            out,
        } => {
            let cfg = LabelCfg {
                precision,
                scoring: scoring.into(),
            };
            let report = label(&input, &cfg)?;
            let text = serde_json::to_string_pretty(&report)?;
            match out {
                Some(out) => {
                    let params = serde_json::json!({
                        "input": input.to_string_lossy(),
                        "precision": precision,
                        "scoring": format!("{:?}", cfg.scoring),
                    });
                    write_artifact(&out, &text, &Payload::new("label", params))
                }
                None => {
                    println!("{text}");
                    Ok(())
                }
            }
        }
        Action::Sample {
            seed,
            index,
            vertices,
            hole,
            out,
        } => {
            let text = sample(seed, index, vertices, hole)?;
            match out {
                Some(out) => {
                    let params = serde_json::json!({
                        "seed": seed,
                        "index": index,
                        "vertices": vertices,
                        "hole": hole,
                    });
                    write_artifact(&out, &text, &Payload::new("sample", params))
                }
                None => {
                    println!("{text}");
                    Ok(())
                }
            }
        }
        Action::Report => report(),
    }
}

fn label(input: &Path, cfg: &LabelCfg) -> Result<LabelReport> {
    tracing::info!(input = %input.display(), precision = cfg.precision, scoring = ?cfg.scoring, "label");
    let polygon =
        read_polygon(input).with_context(|| format!("loading polygon {}", input.display()))?;
    tracing::debug!(
        rings = polygon.rings().len(),
        outer_vertices = polygon.outer().len(),
        "polygon loaded"
    );
    let s = solve(&polygon, cfg)?;
    Ok(LabelReport {
        x: s.point.x,
        y: s.point.y,
        distance: s.distance,
        fitness: s.fitness,
        probed: s.probed,
    })
}

fn sample(seed: u64, index: u64, vertices: usize, hole: Option<f64>) -> Result<String> {
    tracing::info!(seed, index, vertices, hole = ?hole, "sample");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        hole_scale: hole,
        ..StarCfg::default()
    };
    let polygon = draw_star_polygon(cfg, ReplayToken { seed, index })?;
    Ok(to_json(&polygon)?)
}

fn write_artifact(out: &Path, text: &str, payload: &Payload) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
