//! Update orchestration and the per-address cooldown state machine.
//!
//! States per address: never updated, cooldown active, eligible. The first
//! update is always eligible; a successful commit starts the 21-day
//! cooldown; eligibility returns purely by elapsed wall-clock time.
//!
//! The cooldown check and the commit are serialized per address through a
//! lock table, so two racing requests near the cooldown boundary cannot
//! both commit. Requests for different addresses proceed in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use credo_core::address::Address;
use credo_core::constants::{COOLDOWN_SECS, SENTINEL_SCORE};
use credo_core::error::UpdateError;
use credo_core::record::{Metrics, UserRecord};
use credo_core::traits::{Clock, RecordStore, ScoreCalculator, UpdateAuthorizer};
use credo_core::weights::{WeightField, Weights};

/// Cooldown state of one address at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateState {
    /// No record committed yet; the next update needs no cooldown.
    NeverUpdated,
    /// Within the cooldown window; updates are rejected.
    CooldownActive {
        /// Seconds until the address becomes eligible again.
        remaining_secs: u64,
    },
    /// The cooldown window has elapsed.
    Eligible,
}

/// Orchestrates score updates: authorization, cooldown, compute, commit.
///
/// Holds the single mutable weight slot; score computations snapshot the
/// vector through the lock, so a computation always sees weights that
/// summed to 100 at one consistent point in time.
pub struct UpdateController {
    weights: RwLock<Weights>,
    store: Arc<dyn RecordStore>,
    calculator: Arc<dyn ScoreCalculator>,
    authorizer: Arc<dyn UpdateAuthorizer>,
    clock: Arc<dyn Clock>,
    /// Per-address serialization of the check-then-commit sequence.
    locks: DashMap<Address, Arc<Mutex<()>>>,
}

impl UpdateController {
    /// Create a controller over the given collaborators.
    pub fn new(
        weights: Weights,
        store: Arc<dyn RecordStore>,
        calculator: Arc<dyn ScoreCalculator>,
        authorizer: Arc<dyn UpdateAuthorizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            weights: RwLock::new(weights),
            store,
            calculator,
            authorizer,
            clock,
            locks: DashMap::new(),
        }
    }

    /// Current weight vector.
    pub fn weights(&self) -> Weights {
        *self.weights.read()
    }

    /// Replace one weight field, revalidating the whole vector.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::NotAuthorized`] if `caller` lacks the capability
    /// - [`UpdateError::Weights`] if the resulting vector would not sum to 100
    pub fn set_weight(
        &self,
        field: WeightField,
        value: u16,
        caller: &Address,
    ) -> Result<(), UpdateError> {
        if !self.authorizer.is_authorized(caller) {
            warn!(%caller, ?field, value, "controller: unauthorized weight change");
            return Err(UpdateError::NotAuthorized(caller.encode()));
        }

        let mut weights = self.weights.write();
        let next = weights.with_field(field, value)?;
        info!(?field, value, "controller: weight updated");
        *weights = next;
        Ok(())
    }

    /// Replace the entire weight vector atomically.
    ///
    /// A single-field change from a valid vector can only keep the sum at
    /// 100 by repeating the current value, so rebalancing goes through this
    /// whole-vector path; `weights` is already validated by construction.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::NotAuthorized`] if `caller` lacks the capability
    pub fn set_weights(&self, weights: Weights, caller: &Address) -> Result<(), UpdateError> {
        if !self.authorizer.is_authorized(caller) {
            warn!(%caller, "controller: unauthorized weight change");
            return Err(UpdateError::NotAuthorized(caller.encode()));
        }
        info!(?weights, "controller: weight vector replaced");
        *self.weights.write() = weights;
        Ok(())
    }

    /// Recompute and commit the score for `address` from fresh metrics.
    ///
    /// Returns the newly committed score.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::NotAuthorized`] if `caller` lacks the capability
    /// - [`UpdateError::InvalidAddress`] on the zero address
    /// - [`UpdateError::CooldownActive`] within the window; carries the
    ///   currently stored score so the caller needs no second lookup
    pub fn request_update(
        &self,
        address: Address,
        metrics: Metrics,
        caller: &Address,
    ) -> Result<u32, UpdateError> {
        if !self.authorizer.is_authorized(caller) {
            warn!(%caller, %address, "controller: unauthorized update request");
            return Err(UpdateError::NotAuthorized(caller.encode()));
        }
        if address.is_zero() {
            return Err(UpdateError::InvalidAddress);
        }

        // Serialize the cooldown check and the commit for this address.
        // Clone the Arc out of the entry so the map shard is released
        // before blocking on the per-address mutex.
        let lock = self.locks.entry(address).or_default().clone();
        let _guard = lock.lock();

        let now = self.clock.now_unix();
        let previous = self.store.get(&address)?;

        if let Some(prev) = previous {
            let elapsed = now.saturating_sub(prev.last_updated);
            if elapsed < COOLDOWN_SECS {
                let remaining_secs = COOLDOWN_SECS - elapsed;
                debug!(
                    %address,
                    remaining_secs,
                    score = prev.credit_score,
                    "controller: update rejected, cooldown active"
                );
                return Err(UpdateError::CooldownActive {
                    current_score: prev.credit_score,
                    remaining_secs,
                });
            }
        }

        let weights = *self.weights.read();
        let score = self.calculator.compute_score(&metrics, &weights);

        // The cooldown gate guarantees now >= last_updated + COOLDOWN_SECS
        // for repeat commits, so storing `now` keeps last_updated monotone.
        self.store.commit(
            &address,
            UserRecord {
                metrics,
                credit_score: score,
                last_updated: now,
            },
        )?;

        info!(%address, score, "controller: score committed");
        Ok(score)
    }

    /// Current stored score for `address`, or the sentinel `0` if never
    /// updated.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::InvalidAddress`] on the zero address
    pub fn get_score(&self, address: &Address) -> Result<u32, UpdateError> {
        if address.is_zero() {
            return Err(UpdateError::InvalidAddress);
        }
        Ok(self
            .store
            .get(address)?
            .map(|r| r.credit_score)
            .unwrap_or(SENTINEL_SCORE))
    }

    /// Cooldown state of `address` right now.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::InvalidAddress`] on the zero address
    pub fn update_state(&self, address: &Address) -> Result<UpdateState, UpdateError> {
        if address.is_zero() {
            return Err(UpdateError::InvalidAddress);
        }
        let state = match self.store.get(address)? {
            None => UpdateState::NeverUpdated,
            Some(record) => {
                let elapsed = self.clock.now_unix().saturating_sub(record.last_updated);
                if elapsed < COOLDOWN_SECS {
                    UpdateState::CooldownActive {
                        remaining_secs: COOLDOWN_SECS - elapsed,
                    }
                } else {
                    UpdateState::Eligible
                }
            }
        };
        Ok(state)
    }
}
