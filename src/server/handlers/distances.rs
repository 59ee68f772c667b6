use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::DistanceQuote;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    origin: String,
    destination: String,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Query(params): Query<FindParams>,
) -> Result<Json<DistanceQuote>, Error> {
    let quote = api
        .estimate_distance(user, params.origin, params.destination)
        .await?;

    Ok(quote.into())
}
