//! Error types for the Credo engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    #[error("invalid weights: sum {sum}, expected 100")] InvalidWeights { sum: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("missing 0x prefix")] MissingPrefix,
    #[error("invalid length: {0} hex chars, expected 40")] InvalidLength(usize),
    #[error("invalid character: {0}")] InvalidCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend: {0}")] Backend(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("not authorized: {0}")] NotAuthorized(String),
    #[error("invalid address: zero address")] InvalidAddress,
    #[error("cooldown active: {remaining_secs}s remaining, current score {current_score}")]
    CooldownActive { current_score: u32, remaining_secs: u64 },
    #[error(transparent)] Weights(#[from] WeightError),
    #[error(transparent)] Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum CredoError {
    #[error(transparent)] Weights(#[from] WeightError),
    #[error(transparent)] Address(#[from] AddressError),
    #[error(transparent)] Store(#[from] StoreError),
    #[error(transparent)] Update(#[from] UpdateError),
}
