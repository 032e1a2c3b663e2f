use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Site {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "WebsiteName")]
    pub website_name: String,

    #[serde(rename = "WebsiteURL")]
    pub website_url: String,

    /// Telegram mini-app link (https://t.me/...).
    #[serde(rename = "WebAPPUrl")]
    pub web_app_url: String,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}
