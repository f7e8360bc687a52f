//! Integration test harness for the Credo engine.
//!
//! The tests in `tests/` drive the public API only: a controller wired to
//! the in-memory store, the production score calculator, the owner policy,
//! and a manually stepped clock.

pub mod helpers;
