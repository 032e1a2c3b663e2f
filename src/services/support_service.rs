// services/support_service.rs
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::dtos::{MessageResponse, SupportMailRequest};
use crate::errors::Result;
use crate::models::SupportData;
use crate::services::api_client::ApiClient;

#[derive(Debug, Deserialize)]
struct SupportEnvelope {
    #[serde(rename = "Supportdata")]
    support_data: SupportData,
}

/// FAQ content and the support mailbox.
#[derive(Debug, Clone)]
pub struct SupportService {
    client: ApiClient,
}

impl SupportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn support_data(&self) -> Result<SupportData> {
        let envelope: SupportEnvelope = self.client.get("/user/getSupportdata").await?;
        Ok(envelope.support_data)
    }

    pub async fn send_mail(&self, request: &SupportMailRequest) -> Result<Option<String>> {
        request.validate()?;
        let response: MessageResponse = self.client.post_json("/user/supportmail", request).await?;
        info!("Support mail sent: {}", request.subject);
        Ok(response.message)
    }
}
