use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SettlementAPI,
    auth::{Platform, User},
    entities::{ReturnClaim, Settlement},
    error::Error,
};

#[async_trait]
impl SettlementAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn settle_booking(&self, user: User, claim: ReturnClaim) -> Result<Settlement, Error> {
        self.authorize(user, "settle_booking", Platform::default())?;

        Ok(Settlement::compute(
            claim.total_amount,
            claim.advance_paid,
            claim.damage_reported,
            claim.damage_fee(),
        ))
    }
}
