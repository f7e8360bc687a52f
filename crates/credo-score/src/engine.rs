//! Score engine implementing the [`ScoreCalculator`] trait.
//!
//! Combines the five normalized sub-scores as a weighted convex sum and
//! maps the result affinely onto the `[MIN_SCORE, MAX_SCORE]` band with
//! round-to-nearest and a defensive clamp.

use credo_core::constants::{MAX_SCORE, MIN_SCORE, SCORE_RANGE, WEIGHT_SUM};
use credo_core::record::Metrics;
use credo_core::traits::ScoreCalculator;
use credo_core::weights::Weights;

use crate::curve::{
    balance_subscore, frequency_subscore, mix_subscore, new_tx_subscore, volume_subscore,
};

/// The production score calculator.
///
/// Stateless and deterministic: the score is a pure function of the metric
/// and weight inputs.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    /// Create a new ScoreEngine.
    pub fn new() -> Self {
        Self
    }

    /// The five sub-scores in metric order, each in `[0, 100]`.
    pub fn subscores(metrics: &Metrics) -> [u64; 5] {
        [
            volume_subscore(metrics.transaction_volume),
            balance_subscore(metrics.wallet_balance),
            frequency_subscore(metrics.transaction_frequency),
            mix_subscore(metrics.transaction_mix),
            new_tx_subscore(metrics.new_transactions),
        ]
    }
}

impl ScoreCalculator for ScoreEngine {
    fn compute_score(&self, metrics: &Metrics, weights: &Weights) -> u32 {
        let subs = Self::subscores(metrics);
        let ws = weights.as_array();

        // Weighted sum scaled by 100: in [0, 10_000] since sub-scores are
        // <= 100 and the weights sum to exactly 100.
        let combined_x100: u64 = subs
            .iter()
            .zip(ws.iter())
            .map(|(&sub, &w)| sub * w as u64)
            .sum();

        // Affine map onto [MIN_SCORE, MAX_SCORE], rounded to nearest.
        let denom = (WEIGHT_SUM as u64) * 100;
        let scaled = (SCORE_RANGE as u64 * combined_x100 + denom / 2) / denom;
        let score = MIN_SCORE as u64 + scaled;

        // Clamp against any rounding slack.
        score.clamp(MIN_SCORE as u64, MAX_SCORE as u64) as u32
    }
}
