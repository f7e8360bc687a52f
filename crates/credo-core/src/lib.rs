//! # credo-core
//! Foundation types and traits for the Credo scoring engine.

pub mod address;
pub mod constants;
pub mod error;
pub mod record;
pub mod traits;
pub mod weights;

pub use address::Address;
pub use record::{Metrics, UserRecord};
pub use weights::{WeightField, Weights};
