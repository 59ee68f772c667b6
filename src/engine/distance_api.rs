use super::Engine;

use async_trait::async_trait;

use crate::{
    api::DistanceAPI,
    auth::{Platform, User},
    entities::DistanceQuote,
    error::{invalid_input_error, Error},
    external::google_maps,
};

#[async_trait]
impl DistanceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_distance(
        &self,
        user: User,
        origin: String,
        destination: String,
    ) -> Result<DistanceQuote, Error> {
        self.authorize(user, "estimate_distance", Platform::default())?;

        let origin = origin.trim().to_string();
        let destination = destination.trim().to_string();

        if origin.is_empty() || destination.is_empty() {
            return Err(invalid_input_error());
        }

        let (distance, duration) =
            google_maps::find_distance(origin.clone(), destination.clone()).await?;

        Ok(DistanceQuote::compute(
            &self.config.rates,
            origin,
            destination,
            distance.text,
            duration.text,
            distance.value,
            duration.value,
        ))
    }
}
