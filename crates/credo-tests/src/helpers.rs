//! Shared fixtures for the integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use credo_core::address::Address;
use credo_core::record::Metrics;
use credo_core::traits::Clock;
use credo_core::weights::Weights;
use credo_engine::{MemoryRecordStore, OwnerAuthorizer, UpdateController};
use credo_score::ScoreEngine;

/// Reference start time for the stepped clock (2023-11-14T22:13:20Z).
pub const T0: u64 = 1_700_000_000;

/// A clock whose time only moves when a test says so.
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn at(start: u64) -> Arc<Self> {
        Arc::new(Self(AtomicU64::new(start)))
    }

    pub fn advance(&self, secs: u64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, now: u64) {
        self.0.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_unix(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// A deterministic test address derived from a single byte.
pub fn address(val: u8) -> Address {
    Address::from_bytes([val; 20])
}

/// The owner/operator identity used across the test suite.
pub fn operator() -> Address {
    address(0xEE)
}

/// A plausible mid-range metric set.
pub fn sample_metrics() -> Metrics {
    Metrics {
        transaction_volume: 100 * credo_core::constants::COIN,
        wallet_balance: 5_000 * credo_core::constants::COIN,
        transaction_frequency: 10,
        transaction_mix: 3,
        new_transactions: 2,
    }
}

/// A full stack (controller, store, clock) with even weights and the owner
/// policy, sharing the given clock.
pub fn standard_stack(clock: Arc<ManualClock>) -> (UpdateController, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let controller = UpdateController::new(
        Weights::even(),
        store.clone(),
        Arc::new(ScoreEngine::new()),
        Arc::new(OwnerAuthorizer::new(operator())),
        clock,
    );
    (controller, store)
}
