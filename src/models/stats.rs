use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Populated site reference on a statistics document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SiteRef {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "WebsiteName", default)]
    pub website_name: Option<String>,
}

/// One day of serving numbers for one site.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DailyStat {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "website_id", default)]
    pub site: Option<SiteRef>,

    #[serde(default)]
    pub impressions: u64,

    #[serde(rename = "CPM", default)]
    pub cpm: f64,

    #[serde(rename = "Profit", default)]
    pub profit: f64,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}
