use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::DocumentReport;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CheckParams {
    #[serde(default)]
    aadhaar_number: String,
    #[serde(default)]
    license_number: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CheckParams>,
) -> Result<Json<DocumentReport>, Error> {
    let report = api
        .check_documents(params.aadhaar_number, params.license_number)
        .await?;

    Ok(report.into())
}
