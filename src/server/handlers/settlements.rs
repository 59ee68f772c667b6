use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::{ReturnClaim, Settlement};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(claim): Json<ReturnClaim>,
) -> Result<Json<Settlement>, Error> {
    let settlement = api.settle_booking(user, claim).await?;

    Ok(settlement.into())
}
