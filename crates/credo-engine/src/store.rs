//! In-memory record store.
//!
//! Reference implementation of [`RecordStore`] backed by a concurrent map.
//! A deployment wanting durability swaps in a keyed on-disk store behind
//! the same trait; the controller never depends on the backing choice.

use dashmap::DashMap;
use tracing::debug;

use credo_core::address::Address;
use credo_core::error::StoreError;
use credo_core::record::UserRecord;
use credo_core::traits::RecordStore;

/// Concurrent in-memory implementation of [`RecordStore`].
///
/// `commit` replaces the whole record in one map insert, so readers only
/// ever observe complete records. Never returns [`StoreError::Backend`].
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: DashMap<Address, UserRecord>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of addresses with a committed record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no address has ever been committed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn get(&self, address: &Address) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.records.get(address).map(|r| *r))
    }

    fn commit(&self, address: &Address, record: UserRecord) -> Result<(), StoreError> {
        self.records.insert(*address, record);
        debug!(%address, score = record.credit_score, "record_store: record committed");
        Ok(())
    }
}
