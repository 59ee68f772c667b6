use super::Engine;

use async_trait::async_trait;

use crate::{api::ValidationAPI, entities::DocumentReport, error::Error};

#[async_trait]
impl ValidationAPI for Engine {
    // runs on every keystroke, so no authorization round
    #[tracing::instrument(skip(self))]
    async fn check_documents(
        &self,
        aadhaar_number: String,
        license_number: String,
    ) -> Result<DocumentReport, Error> {
        Ok(DocumentReport::new(&aadhaar_number, &license_number))
    }
}
