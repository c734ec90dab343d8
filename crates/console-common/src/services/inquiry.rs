use crate::client::{AuthenticatedClient, ClientError, RequestBody};
use crate::resources::{Inquiry, InquiryStatus};
use reqwest::Method;
use serde_json::json;

/// Citizen inquiries from the public contact form
#[derive(Clone, PartialEq)]
pub struct InquiryService {
    client: AuthenticatedClient,
}

impl InquiryService {
    pub const fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Inquiry>, ClientError> {
        let inquiries: Option<Vec<Inquiry>> = self.client.fetch(Inquiry::PATH).await?;
        Ok(inquiries.unwrap_or_default())
    }

    /// Move an inquiry to a new status; completed ones are refused locally
    pub async fn set_status(
        &self,
        inquiry: &Inquiry,
        status: InquiryStatus,
    ) -> Result<(), ClientError> {
        let status = inquiry.transition(status)?;
        let body = RequestBody::Json(json!({ "status": status }));
        self.client
            .send(Method::PUT, &inquiry.status_path(), body)
            .await?;
        tracing::info!(id = %inquiry.id, %status, "inquiry status changed");
        Ok(())
    }
}
