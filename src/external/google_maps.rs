use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{invalid_input_error, upstream_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixRow {
    elements: Vec<MatrixElement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    rows: Vec<MatrixRow>,
}

/// Looks up metric distance and travel time between two free-form addresses
/// through the Distance Matrix API.
#[tracing::instrument]
pub async fn find_distance(
    origin: String,
    destination: String,
) -> Result<(TextValue, TextValue), Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/distancematrix/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origins", origin)])
        .query(&[("destinations", destination)])
        .query(&[("units", "metric".to_string())])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response = res.json().await?;

    if data.status != "OK" {
        return Err(upstream_error());
    }

    let element = data
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(|| upstream_error())?;

    // a well-formed response can still fail to price the route
    if element.status != "OK" {
        return Err(invalid_input_error());
    }

    let distance = element.distance.ok_or_else(|| upstream_error())?;
    let duration = element.duration.ok_or_else(|| upstream_error())?;

    Ok((distance, duration))
}
