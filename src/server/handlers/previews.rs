use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::{BookingForm, BookingView};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(form): Json<BookingForm>,
) -> Result<Json<BookingView>, Error> {
    let view = api.create_preview(user, form).await?;

    Ok(view.into())
}
