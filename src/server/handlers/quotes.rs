use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::{BookingForm, FareQuote};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(form): Json<BookingForm>,
) -> Result<Json<FareQuote>, Error> {
    let quote = api.create_quote(user, form).await?;

    Ok(quote.into())
}
