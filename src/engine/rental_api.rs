use super::helpers::{new_reference, write_snapshot, LAST_BOOKING_KEY};
use super::Engine;

use async_trait::async_trait;
use serde_json::json;

use crate::{
    api::RentalAPI,
    auth::{Platform, User},
    entities::{RentalEstimate, RentalOutcome, RentalRequest},
    error::Error,
};

#[async_trait]
impl RentalAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_rental(
        &self,
        user: User,
        request: RentalRequest,
    ) -> Result<RentalEstimate, Error> {
        self.authorize(user, "estimate_rental", Platform::default())?;

        RentalEstimate::compute(&request)
    }

    #[tracing::instrument(skip(self))]
    async fn submit_rental(
        &self,
        user: User,
        request: RentalRequest,
    ) -> Result<RentalOutcome, Error> {
        self.authorize(user, "submit_rental", Platform::default())?;

        let outcome = request.decide(new_reference())?;

        if let RentalOutcome::Confirmed { confirmation } = &outcome {
            write_snapshot(&self.pool, LAST_BOOKING_KEY, &json!(confirmation)).await?;

            tracing::info!("rental confirmed under {}", confirmation.reference);
        }

        Ok(outcome)
    }
}
