use super::helpers::{new_reference, read_snapshot, write_snapshot, LAST_BOOKING_KEY};
use super::Engine;

use async_trait::async_trait;
use serde_json::json;

use crate::{
    api::BookingAPI,
    auth::{Platform, User},
    entities::{Booking, BookingDraft, BookingForm, FareQuote, Submission},
    error::Error,
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn submit_booking(&self, user: User, form: BookingForm) -> Result<Submission, Error> {
        self.authorize(user, "submit_booking", Platform::default())?;

        let draft = BookingDraft::from_form(&form);

        // a self-drive draft whose documents do not check out is turned away
        // before any processing starts
        if let Some(report) = Submission::screen(&draft) {
            tracing::info!("document checks failed, suppressing submission...");
            return Ok(Submission::rejected(report));
        }

        let fare = FareQuote::compute(&self.config.rates, &draft);
        let mut booking = Booking::new(&draft, fare, self.config.processing_delay);

        tracing::info!(
            "trigger disabled, processing for {:?}...",
            self.config.processing_delay
        );

        tokio::time::sleep(self.config.processing_delay).await;

        booking.confirm(new_reference())?;

        write_snapshot(&self.pool, LAST_BOOKING_KEY, &json!(&booking)).await?;

        tracing::info!("booking confirmed, returning...");

        Ok(Submission::Confirmed { booking })
    }

    #[tracing::instrument(skip(self))]
    async fn find_last_booking(&self, user: User) -> Result<Option<serde_json::Value>, Error> {
        self.authorize(user, "read_snapshot", Platform::default())?;

        read_snapshot(&self.pool, LAST_BOOKING_KEY).await
    }
}
