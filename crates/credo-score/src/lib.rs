//! # credo-score — Pure scoring engine.
//!
//! All calculations use integer arithmetic only for determinism.
//!
//! Each raw metric is normalized onto a 0–100 sub-score by a two-segment
//! saturating curve (full-rate accrual up to the metric's target, then
//! diminishing returns to a hard saturation point). Sub-scores combine as
//! a convex weighted sum and map affinely onto the `[300, 850]` band.

pub mod curve;
pub mod engine;

pub use curve::saturating_subscore;
pub use engine::ScoreEngine;
