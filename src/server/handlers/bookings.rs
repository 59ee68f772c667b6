use axum::extract::{Extension, Json};
use axum_macros::debug_handler;

use crate::auth::User;
use crate::entities::{BookingForm, Submission};
use crate::error::Error;
use crate::server::DynAPI;

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(form): Json<BookingForm>,
) -> Result<Json<Submission>, Error> {
    let submission = api.submit_booking(user, form).await?;

    Ok(submission.into())
}

pub async fn last(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Option<serde_json::Value>>, Error> {
    let snapshot = api.find_last_booking(user).await?;

    Ok(snapshot.into())
}
