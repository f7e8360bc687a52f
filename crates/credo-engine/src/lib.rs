//! # credo-engine — Stateful side of the Credo scoring system.
//!
//! Composes the pure score calculator with the address-keyed record store,
//! the injected authorization policy, and the per-address cooldown state
//! machine:
//! - [`MemoryRecordStore`]: DashMap-backed [`RecordStore`] implementation
//!   with all-or-nothing record overwrites.
//! - [`OwnerAuthorizer`]: single-owner capability check with explicit,
//!   auditable ownership transfer.
//! - [`UpdateController`]: orchestrates authorization, cooldown, compute,
//!   and commit; serializes updates per address without a global lock.
//!
//! [`RecordStore`]: credo_core::traits::RecordStore

pub mod authorizer;
pub mod controller;
pub mod store;

pub use authorizer::OwnerAuthorizer;
pub use controller::{UpdateController, UpdateState};
pub use store::MemoryRecordStore;
