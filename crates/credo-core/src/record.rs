//! Per-address metric and score records.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// The five raw behavioral metrics for one address, as delivered by the
/// acquisition layer.
///
/// Monetary fields are in wei; the counters are plain counts. The engine
/// treats these as opaque inputs and never fetches them itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    bincode::Encode, bincode::Decode,
)]
pub struct Metrics {
    /// Lifetime outbound transaction volume in wei.
    pub transaction_volume: u128,
    /// Current wallet balance in wei.
    pub wallet_balance: u128,
    /// Lifetime transaction count.
    pub transaction_frequency: u64,
    /// Distinct transaction categories observed.
    pub transaction_mix: u64,
    /// Transactions within the trailing 30-day window.
    pub new_transactions: u64,
}

/// Stored scoring state for one address.
///
/// # Invariants
///
/// * `credit_score` lies in `[MIN_SCORE, MAX_SCORE]` for every committed
///   record (a never-updated address has no record at all).
/// * `last_updated` (unix seconds) is monotonically non-decreasing across
///   successive commits for the same address.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
    bincode::Encode, bincode::Decode,
)]
pub struct UserRecord {
    /// Metrics the current score was computed from.
    pub metrics: Metrics,
    /// Bounded credit score.
    pub credit_score: u32,
    /// Unix timestamp of the last successful commit.
    pub last_updated: u64,
}

impl UserRecord {
    /// Whether the stored score lies within the valid band.
    pub fn score_in_bounds(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.credit_score)
    }
}
