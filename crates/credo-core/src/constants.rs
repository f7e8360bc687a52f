//! Engine constants. All monetary values in wei (1 COIN = 10^18 wei).

/// Base-currency unit: one coin in wei.
pub const COIN: u128 = 1_000_000_000_000_000_000;

/// Lowest score an updated address can hold.
pub const MIN_SCORE: u32 = 300;

/// Highest score an updated address can hold.
pub const MAX_SCORE: u32 = 850;

/// Width of the final score range.
pub const SCORE_RANGE: u32 = MAX_SCORE - MIN_SCORE;

/// Score reported for an address that has never been updated.
pub const SENTINEL_SCORE: u32 = 0;

/// Required sum of the five weight percentages.
pub const WEIGHT_SUM: u32 = 100;

/// Minimum time between successive score updates for one address.
pub const COOLDOWN_SECS: u64 = 21 * 24 * 60 * 60;

/// Upper bound of every normalized sub-score.
pub const SUBSCORE_MAX: u64 = 100;

/// Sub-score earned exactly at a metric's target value.
///
/// Above the target the remaining `SUBSCORE_MAX - KNEE_SUBSCORE` points
/// accrue five times slower, giving diminishing returns for whales.
pub const KNEE_SUBSCORE: u64 = 80;

/// Multiple of the target at which a sub-score saturates at [`SUBSCORE_MAX`].
pub const SATURATION_MULTIPLE: u128 = 5;

/// Transaction volume earning the knee sub-score.
pub const VOLUME_TARGET_WEI: u128 = 50 * COIN;

/// Wallet balance earning the knee sub-score.
pub const BALANCE_TARGET_WEI: u128 = 10 * COIN;

/// Lifetime transaction count earning the knee sub-score.
pub const FREQUENCY_TARGET: u64 = 200;

/// Distinct transaction categories earning the knee sub-score.
pub const MIX_TARGET: u64 = 8;

/// Trailing-30-day transaction count earning the knee sub-score.
pub const NEW_TX_TARGET: u64 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_range_is_consumer_credit_band() {
        assert_eq!(MIN_SCORE, 300);
        assert_eq!(MAX_SCORE, 850);
        assert_eq!(SCORE_RANGE, 550);
    }

    #[test]
    fn sentinel_is_outside_the_valid_band() {
        assert!(SENTINEL_SCORE < MIN_SCORE);
    }

    #[test]
    fn cooldown_is_21_days() {
        assert_eq!(COOLDOWN_SECS, 1_814_400);
    }

    #[test]
    fn knee_below_max() {
        assert!(KNEE_SUBSCORE < SUBSCORE_MAX);
        assert!(SATURATION_MULTIPLE > 1);
    }
}
