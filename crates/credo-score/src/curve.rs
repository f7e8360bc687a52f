//! Saturating normalization curves for the five metrics.
//!
//! Every curve maps a raw metric onto `[0, SUBSCORE_MAX]`:
//! 1. `[0, target]`: linearly from 0 to [`KNEE_SUBSCORE`]
//! 2. `[target, SATURATION_MULTIPLE * target]`: linearly from
//!    [`KNEE_SUBSCORE`] to [`SUBSCORE_MAX`]
//! 3. beyond: flat at [`SUBSCORE_MAX`]
//!
//! The flattening above the knee keeps unbounded whales from dominating
//! the combined score while preserving monotonicity everywhere.

use credo_core::constants::{
    BALANCE_TARGET_WEI, FREQUENCY_TARGET, KNEE_SUBSCORE, MIX_TARGET, NEW_TX_TARGET,
    SATURATION_MULTIPLE, SUBSCORE_MAX, VOLUME_TARGET_WEI,
};

/// Normalize `value` against `target` onto `[0, SUBSCORE_MAX]`.
///
/// - At 0: sub-score 0
/// - At `target`: [`KNEE_SUBSCORE`]
/// - At `SATURATION_MULTIPLE * target` and beyond: [`SUBSCORE_MAX`]
///
/// Monotonic non-decreasing in `value`. `target` must be non-zero; all
/// callers in this crate pass the fixed non-zero constants.
pub fn saturating_subscore(value: u128, target: u128) -> u64 {
    debug_assert!(target > 0, "normalization target must be non-zero");

    let saturation = target.saturating_mul(SATURATION_MULTIPLE);
    if value >= saturation {
        return SUBSCORE_MAX;
    }

    if value <= target {
        // Linear from 0 to KNEE_SUBSCORE over [0, target].
        (value * KNEE_SUBSCORE as u128 / target) as u64
    } else {
        // Linear from KNEE_SUBSCORE to SUBSCORE_MAX over [target, saturation].
        let headroom = (SUBSCORE_MAX - KNEE_SUBSCORE) as u128;
        let over = value - target;
        let range = saturation - target;
        KNEE_SUBSCORE + (over * headroom / range) as u64
    }
}

/// Sub-score for lifetime transaction volume (wei).
pub fn volume_subscore(volume_wei: u128) -> u64 {
    saturating_subscore(volume_wei, VOLUME_TARGET_WEI)
}

/// Sub-score for current wallet balance (wei).
pub fn balance_subscore(balance_wei: u128) -> u64 {
    saturating_subscore(balance_wei, BALANCE_TARGET_WEI)
}

/// Sub-score for lifetime transaction count.
pub fn frequency_subscore(count: u64) -> u64 {
    saturating_subscore(count as u128, FREQUENCY_TARGET as u128)
}

/// Sub-score for distinct transaction categories.
pub fn mix_subscore(categories: u64) -> u64 {
    saturating_subscore(categories as u128, MIX_TARGET as u128)
}

/// Sub-score for trailing-30-day activity.
pub fn new_tx_subscore(count: u64) -> u64 {
    saturating_subscore(count as u128, NEW_TX_TARGET as u128)
}
