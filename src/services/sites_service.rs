// services/sites_service.rs
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::dtos::{CreateSiteRequest, MessageResponse, SiteFilter};
use crate::errors::Result;
use crate::models::{Paginated, Site};
use crate::services::api_client::ApiClient;

#[derive(Debug, Deserialize)]
struct SitesEnvelope {
    usersites: Paginated<Site>,
}

/// Advertising site registration and listing.
#[derive(Debug, Clone)]
pub struct SitesService {
    client: ApiClient,
}

impl SitesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &SiteFilter) -> Result<Paginated<Site>> {
        let envelope: SitesEnvelope = self
            .client
            .get_with_query("/user/getuserwebsites", filter)
            .await?;
        Ok(envelope.usersites)
    }

    /// Submit a new site for review. It appears in the listing as inactive
    /// until approved.
    pub async fn create(&self, request: &CreateSiteRequest) -> Result<Option<String>> {
        request.validate()?;
        let response: MessageResponse = self
            .client
            .post_json("/user/createappRequest", request)
            .await?;
        info!("Site request submitted: {}", request.website_name);
        Ok(response.message)
    }
}
