//! Fixed numeric defaults (internal).
//!
//! Kept as constants so call sites agree; `LabelCfg` exposes the one knob
//! callers are expected to turn.

/// Default search tolerance, in polygon units.
pub(crate) const DEFAULT_PRECISION: f64 = 1.0;

/// Circumradius factor of a square with unit half-size.
pub(crate) const SQRT_2: f64 = std::f64::consts::SQRT_2;
