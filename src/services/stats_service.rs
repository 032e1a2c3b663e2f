// services/stats_service.rs
use serde::Deserialize;

use crate::dtos::StatsFilter;
use crate::errors::Result;
use crate::models::{DailyStat, Paginated};
use crate::services::api_client::ApiClient;

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    userstats: Paginated<DailyStat>,
}

/// Daily impression and earnings numbers, one row per site per day.
#[derive(Debug, Clone)]
pub struct StatsService {
    client: ApiClient,
}

impl StatsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &StatsFilter) -> Result<Paginated<DailyStat>> {
        let envelope: StatsEnvelope = self
            .client
            .get_with_query("/user/getuserstats", filter)
            .await?;
        Ok(envelope.userstats)
    }
}
