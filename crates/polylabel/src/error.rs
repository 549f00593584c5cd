use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong before the search starts.
///
/// The search itself has no failure modes: once a `Polygon` exists and the
/// precision is usable, `solve` always returns a point.
#[derive(Error, Debug)]
pub enum PolylabelError {
    #[error("polygon has no rings")]
    EmptyPolygon,

    #[error("ring {ring} has no vertices")]
    EmptyRing { ring: usize },

    #[error("ring {ring}, vertex {vertex}: coordinate is not finite")]
    NonFiniteCoordinate { ring: usize, vertex: usize },

    #[error("precision must be finite and positive, got {precision}")]
    InvalidPrecision { precision: f64 },

    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("malformed polygon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PolylabelError>;
