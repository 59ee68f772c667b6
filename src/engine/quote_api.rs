use super::Engine;

use async_trait::async_trait;

use crate::{
    api::QuoteAPI,
    auth::{Platform, User},
    entities::{BookingDraft, BookingForm, BookingView, FareQuote},
    error::Error,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, user: User, form: BookingForm) -> Result<FareQuote, Error> {
        self.authorize(user, "create_quote", Platform::default())?;

        let draft = BookingDraft::from_form(&form);

        Ok(FareQuote::compute(&self.config.rates, &draft))
    }

    #[tracing::instrument(skip(self))]
    async fn create_preview(&self, user: User, form: BookingForm) -> Result<BookingView, Error> {
        self.authorize(user, "create_preview", Platform::default())?;

        let draft = BookingDraft::from_form(&form);

        Ok(BookingView::project(&self.config.rates, &draft))
    }
}
