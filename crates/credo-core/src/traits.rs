//! Trait interfaces for the Credo engine.
//!
//! These traits define the contracts between crates:
//! - [`ScoreCalculator`] — pure scoring math (credo-score implements)
//! - [`RecordStore`] — address-keyed record persistence (credo-engine implements)
//! - [`UpdateAuthorizer`] — the capability check gating mutations
//! - [`Clock`] — wall-clock source, injectable for cooldown tests

use crate::address::Address;
use crate::error::StoreError;
use crate::record::{Metrics, UserRecord};
use crate::weights::Weights;

/// Pure computation of a bounded credit score from raw metrics.
///
/// Implementations must be deterministic and side-effect free: identical
/// `(metrics, weights)` inputs always yield the identical score, independent
/// of call order or wall-clock time. The result always lies in
/// `[MIN_SCORE, MAX_SCORE]`.
pub trait ScoreCalculator: Send + Sync {
    /// Compute the bounded score for one address's metrics under the given
    /// weight vector.
    fn compute_score(&self, metrics: &Metrics, weights: &Weights) -> u32;
}

/// Address-keyed persistence for scoring records.
///
/// May be backed by any durable keyed store; the in-memory implementation
/// lives in credo-engine. Implementations must make [`commit`](Self::commit)
/// an all-or-nothing overwrite — a reader never observes a partially
/// updated record.
pub trait RecordStore: Send + Sync {
    /// Look up the record for an address. Returns `None` if never committed.
    fn get(&self, address: &Address) -> Result<Option<UserRecord>, StoreError>;

    /// Atomically overwrite the record for an address.
    fn commit(&self, address: &Address, record: UserRecord) -> Result<(), StoreError>;

    /// Whether an address has ever been committed.
    ///
    /// Default implementation delegates to [`get`](Self::get).
    fn contains(&self, address: &Address) -> Result<bool, StoreError> {
        Ok(self.get(address)?.is_some())
    }
}

/// Capability check for score updates and weight mutations.
///
/// The engine does not hard-code an identity comparison; deployments inject
/// the policy at construction. The shipped policy (credo-engine) is a
/// single owner with explicit ownership transfer.
pub trait UpdateAuthorizer: Send + Sync {
    /// Whether `caller` may update scores and mutate the weight vector.
    fn is_authorized(&self, caller: &Address) -> bool;
}

/// Wall-clock source for cooldown arithmetic.
pub trait Clock: Send + Sync {
    /// Current unix time in seconds.
    fn now_unix(&self) -> u64;
}

/// System clock backed by [`chrono::Utc`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        // Unix time is positive for any realistic host clock.
        chrono::Utc::now().timestamp().max(0) as u64
    }
}
