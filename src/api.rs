use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::User;
use crate::entities::{
    BookingForm, BookingView, DistanceQuote, DocumentReport, FareQuote, RentalEstimate,
    RentalOutcome, RentalRequest, ReturnClaim, Settlement, Submission,
};
use crate::error::Error;

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, user: User, form: BookingForm) -> Result<FareQuote, Error>;

    async fn create_preview(&self, user: User, form: BookingForm) -> Result<BookingView, Error>;
}

#[async_trait]
pub trait ValidationAPI {
    async fn check_documents(
        &self,
        aadhaar_number: String,
        license_number: String,
    ) -> Result<DocumentReport, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn submit_booking(&self, user: User, form: BookingForm) -> Result<Submission, Error>;

    async fn find_last_booking(&self, user: User) -> Result<Option<serde_json::Value>, Error>;
}

#[async_trait]
pub trait RentalAPI {
    async fn estimate_rental(
        &self,
        user: User,
        request: RentalRequest,
    ) -> Result<RentalEstimate, Error>;

    async fn submit_rental(&self, user: User, request: RentalRequest)
        -> Result<RentalOutcome, Error>;
}

#[async_trait]
pub trait SettlementAPI {
    async fn settle_booking(&self, user: User, claim: ReturnClaim) -> Result<Settlement, Error>;
}

#[async_trait]
pub trait DistanceAPI {
    async fn estimate_distance(
        &self,
        user: User,
        origin: String,
        destination: String,
    ) -> Result<DistanceQuote, Error>;
}

pub trait API:
    QuoteAPI + ValidationAPI + BookingAPI + RentalAPI + SettlementAPI + DistanceAPI
{
}

pub type DynAPI = Arc<dyn API + Send + Sync>;
