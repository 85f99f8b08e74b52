//! # Gated Reader
//!
//! Decorator composing the access controller around any `FeedReader`.
//! Every read checks the caller's capability first, then delegates; the
//! inner reader's results pass through unmodified.

use crate::domain::controller::AccessController;
use crate::domain::errors::AccessError;
use parking_lot::RwLock;
use qf_03_round_ledger::RoundData;
use qf_04_transmission::FeedReader;
use shared_types::{Address, Answer, CallerContext, RoundId, Timestamp};

/// Access-controlled view over a `FeedReader`.
pub struct GatedReader<R: FeedReader> {
    controller: RwLock<AccessController>,
    inner: R,
}

impl<R: FeedReader> GatedReader<R> {
    /// Wrap `inner` with enforcement on and an empty allow-list.
    pub fn new(inner: R, admin: Address) -> Self {
        Self {
            controller: RwLock::new(AccessController::new(admin)),
            inner,
        }
    }

    /// The undecorated reader.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn check(&self, ctx: CallerContext) -> Result<(), AccessError> {
        if self.controller.read().has_access(&ctx) {
            Ok(())
        } else {
            tracing::warn!(caller = ?ctx.caller, "read access denied");
            Err(AccessError::NoAccess(ctx.caller))
        }
    }

    // =========================================================================
    // Gated read surface
    // =========================================================================

    /// The latest answer, if `ctx` may read.
    pub fn latest_answer(&self, ctx: CallerContext) -> Result<Answer, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.latest_answer()?)
    }

    /// The latest timestamp, if `ctx` may read.
    pub fn latest_timestamp(&self, ctx: CallerContext) -> Result<Timestamp, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.latest_timestamp()?)
    }

    /// The latest round id, if `ctx` may read.
    pub fn latest_round(&self, ctx: CallerContext) -> Result<RoundId, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.latest_round())
    }

    /// The answer for `round_id`, if `ctx` may read.
    pub fn get_answer(&self, ctx: CallerContext, round_id: RoundId) -> Result<Answer, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.get_answer(round_id)?)
    }

    /// The timestamp for `round_id`, if `ctx` may read.
    pub fn get_timestamp(
        &self,
        ctx: CallerContext,
        round_id: RoundId,
    ) -> Result<Timestamp, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.get_timestamp(round_id)?)
    }

    /// The round projection for `round_id`, if `ctx` may read.
    pub fn get_round_data(
        &self,
        ctx: CallerContext,
        round_id: RoundId,
    ) -> Result<RoundData, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.get_round_data(round_id)?)
    }

    /// The latest round projection, if `ctx` may read.
    pub fn latest_round_data(&self, ctx: CallerContext) -> Result<RoundData, AccessError> {
        self.check(ctx)?;
        Ok(self.inner.latest_round_data()?)
    }

    // =========================================================================
    // Administration
    // =========================================================================

    /// Grant read access. Admin only.
    pub fn add_access(&self, caller: Address, address: Address) -> Result<(), AccessError> {
        self.controller.write().add_access(caller, address)
    }

    /// Revoke read access. Admin only.
    pub fn remove_access(&self, caller: Address, address: Address) -> Result<(), AccessError> {
        self.controller.write().remove_access(caller, address)
    }

    /// Turn enforcement on. Admin only.
    pub fn enable_check(&self, caller: Address) -> Result<(), AccessError> {
        self.controller.write().enable_check(caller)
    }

    /// Turn enforcement off. Admin only.
    pub fn disable_check(&self, caller: Address) -> Result<(), AccessError> {
        self.controller.write().disable_check(caller)
    }
}
