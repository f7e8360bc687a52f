//! Single-owner authorization policy.
//!
//! The shipped [`UpdateAuthorizer`] implementation: one owner address holds
//! the update/configuration capability. Ownership moves only through
//! [`OwnerAuthorizer::transfer_ownership`], an explicit operation that is
//! itself owner-gated and logged.

use parking_lot::RwLock;
use tracing::info;

use credo_core::address::Address;
use credo_core::error::UpdateError;
use credo_core::traits::UpdateAuthorizer;

/// Owner-based capability check.
pub struct OwnerAuthorizer {
    owner: RwLock<Address>,
}

impl OwnerAuthorizer {
    /// Create a policy with the given initial owner.
    pub fn new(owner: Address) -> Self {
        Self {
            owner: RwLock::new(owner),
        }
    }

    /// The current owner address.
    pub fn owner(&self) -> Address {
        *self.owner.read()
    }

    /// Hand the capability to `new_owner`.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::NotAuthorized`] if `caller` is not the current owner
    /// - [`UpdateError::InvalidAddress`] if `new_owner` is the zero address
    pub fn transfer_ownership(
        &self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), UpdateError> {
        if new_owner.is_zero() {
            return Err(UpdateError::InvalidAddress);
        }

        let mut owner = self.owner.write();
        if *caller != *owner {
            return Err(UpdateError::NotAuthorized(caller.encode()));
        }

        info!(old = %owner, new = %new_owner, "authorizer: ownership transferred");
        *owner = new_owner;
        Ok(())
    }
}

impl UpdateAuthorizer for OwnerAuthorizer {
    fn is_authorized(&self, caller: &Address) -> bool {
        *caller == *self.owner.read()
    }
}
