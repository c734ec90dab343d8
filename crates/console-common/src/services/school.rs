use crate::client::{AuthenticatedClient, ClientError, RequestBody};
use crate::resources::{FormValues, SchoolCount};
use reqwest::Method;

/// Reads and replaces the school head-count record
#[derive(Clone, PartialEq)]
pub struct SchoolCountService {
    client: AuthenticatedClient,
}

impl SchoolCountService {
    pub const fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// The record may not exist yet; that reads as all zeros
    pub async fn get(&self) -> Result<SchoolCount, ClientError> {
        let count: Option<SchoolCount> = self.client.fetch(SchoolCount::PATH).await?;
        Ok(count.unwrap_or_default())
    }

    pub async fn save(&self, values: &FormValues) -> Result<SchoolCount, ClientError> {
        let count = SchoolCount::from_values(values)?;
        let body = RequestBody::Json(serde_json::to_value(&count)?);
        self.client.send(Method::PUT, SchoolCount::PATH, body).await?;
        tracing::info!(girls = count.girls, boys = count.boys, "school counts saved");
        Ok(count)
    }
}
