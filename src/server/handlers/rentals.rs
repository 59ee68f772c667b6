use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::{RentalEstimate, RentalOutcome, RentalRequest};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(request): Json<RentalRequest>,
) -> Result<Json<RentalEstimate>, Error> {
    let estimate = api.estimate_rental(user, request).await?;

    Ok(estimate.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(request): Json<RentalRequest>,
) -> Result<Json<RentalOutcome>, Error> {
    let outcome = api.submit_rental(user, request).await?;

    Ok(outcome.into())
}
