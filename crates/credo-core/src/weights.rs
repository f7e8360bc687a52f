//! Metric weight configuration.
//!
//! The five weights are integer percentages that must sum to exactly 100,
//! checked on construction and on every single-field mutation. Because the
//! fields are unsigned, a valid sum also bounds each field by 100.

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM;
use crate::error::WeightError;

/// Selector for one of the five weight fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightField {
    /// Transaction volume weight.
    Volume,
    /// Wallet balance weight.
    Balance,
    /// Transaction frequency weight.
    Frequency,
    /// Transaction mix weight.
    Mix,
    /// Recent-activity weight.
    NewTransactions,
}

/// A validated weight vector.
///
/// Fields are private so every live `Weights` value satisfies the
/// sum-to-100 invariant; mutation goes through [`Weights::with_field`],
/// which revalidates the full vector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
    bincode::Encode, bincode::Decode,
)]
pub struct Weights {
    volume: u16,
    balance: u16,
    frequency: u16,
    mix: u16,
    new_transactions: u16,
}

impl Weights {
    /// Construct a weight vector, rejecting any set not summing to 100.
    pub fn new(
        volume: u16,
        balance: u16,
        frequency: u16,
        mix: u16,
        new_transactions: u16,
    ) -> Result<Self, WeightError> {
        let sum = volume as u32
            + balance as u32
            + frequency as u32
            + mix as u32
            + new_transactions as u32;
        if sum != WEIGHT_SUM {
            return Err(WeightError::InvalidWeights { sum });
        }
        Ok(Self {
            volume,
            balance,
            frequency,
            mix,
            new_transactions,
        })
    }

    /// The even `{20,20,20,20,20}` split.
    pub fn even() -> Self {
        Self {
            volume: 20,
            balance: 20,
            frequency: 20,
            mix: 20,
            new_transactions: 20,
        }
    }

    /// Read one field.
    pub fn get(&self, field: WeightField) -> u16 {
        match field {
            WeightField::Volume => self.volume,
            WeightField::Balance => self.balance,
            WeightField::Frequency => self.frequency,
            WeightField::Mix => self.mix,
            WeightField::NewTransactions => self.new_transactions,
        }
    }

    /// A copy with one field replaced, revalidating the whole vector.
    pub fn with_field(&self, field: WeightField, value: u16) -> Result<Self, WeightError> {
        let mut next = *self;
        match field {
            WeightField::Volume => next.volume = value,
            WeightField::Balance => next.balance = value,
            WeightField::Frequency => next.frequency = value,
            WeightField::Mix => next.mix = value,
            WeightField::NewTransactions => next.new_transactions = value,
        }
        Self::new(
            next.volume,
            next.balance,
            next.frequency,
            next.mix,
            next.new_transactions,
        )
    }

    /// The weights in metric order: volume, balance, frequency, mix,
    /// new-transactions.
    pub fn as_array(&self) -> [u16; 5] {
        [
            self.volume,
            self.balance,
            self.frequency,
            self.mix,
            self.new_transactions,
        ]
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::even()
    }
}
