//! # Access Controller
//!
//! The capability state: allow-list, enforcement flag, administrative
//! identity. Pure state machine; the decorator in `service` applies it to
//! the read path.

use crate::domain::errors::AccessError;
use shared_types::{Address, CallerContext};
use std::collections::HashSet;

/// Capability state for the read surface.
#[derive(Clone, Debug)]
pub struct AccessController {
    admin: Address,
    check_enabled: bool,
    allow_list: HashSet<Address>,
}

impl AccessController {
    /// A controller with enforcement on and an empty allow-list. External
    /// callers still pass; contract callers need a grant.
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            check_enabled: true,
            allow_list: HashSet::new(),
        }
    }

    /// Whether `ctx` may read.
    pub fn has_access(&self, ctx: &CallerContext) -> bool {
        self.allow_list.contains(&ctx.caller) || !self.check_enabled || ctx.is_external
    }

    /// True while the enforcement flag is set.
    pub fn check_enabled(&self) -> bool {
        self.check_enabled
    }

    /// Grant read access to `address`. Admin only.
    pub fn add_access(&mut self, caller: Address, address: Address) -> Result<(), AccessError> {
        self.require_admin(caller)?;
        if self.allow_list.insert(address) {
            tracing::info!(address = ?address, "read access granted");
        }
        Ok(())
    }

    /// Revoke read access from `address`. Admin only.
    pub fn remove_access(&mut self, caller: Address, address: Address) -> Result<(), AccessError> {
        self.require_admin(caller)?;
        if self.allow_list.remove(&address) {
            tracing::info!(address = ?address, "read access revoked");
        }
        Ok(())
    }

    /// Turn enforcement on. Admin only.
    pub fn enable_check(&mut self, caller: Address) -> Result<(), AccessError> {
        self.require_admin(caller)?;
        if !self.check_enabled {
            self.check_enabled = true;
            tracing::info!("access check enabled");
        }
        Ok(())
    }

    /// Turn enforcement off: every caller passes. Admin only.
    pub fn disable_check(&mut self, caller: Address) -> Result<(), AccessError> {
        self.require_admin(caller)?;
        if self.check_enabled {
            self.check_enabled = false;
            tracing::info!("access check disabled");
        }
        Ok(())
    }

    fn require_admin(&self, caller: Address) -> Result<(), AccessError> {
        if caller != self.admin {
            return Err(AccessError::NotAdmin(caller));
        }
        Ok(())
    }
}
