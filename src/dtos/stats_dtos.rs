use chrono::NaiveDate;
use serde::Serialize;

/// Query parameters for the daily statistics listing.
#[derive(Debug, Serialize, Clone)]
pub struct StatsFilter {
    pub page: u32,
    pub limit: u32,

    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_id: Option<String>,
}

impl Default for StatsFilter {
    fn default() -> Self {
        StatsFilter {
            page: 1,
            limit: 10,
            start_date: None,
            end_date: None,
            website_id: None,
        }
    }
}

impl StatsFilter {
    pub fn for_site(website_id: impl Into<String>) -> Self {
        StatsFilter {
            website_id: Some(website_id.into()),
            ..Default::default()
        }
    }
}
