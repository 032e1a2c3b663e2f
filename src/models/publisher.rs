use serde::{Deserialize, Serialize};

/// Publisher account document (the `userdata` object returned by the
/// profile endpoint).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Publisher {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "TelegramUsername", default)]
    pub telegram_username: Option<String>,

    #[serde(rename = "Role", default)]
    pub role: Option<String>,

    /// "Individual" or "Company"; unset until the first profile update.
    #[serde(rename = "AccountType", default)]
    pub account_type: Option<String>,

    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,

    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,

    #[serde(rename = "CompanyName", default)]
    pub company_name: Option<String>,

    #[serde(rename = "Address", default)]
    pub address: Option<String>,

    #[serde(rename = "City", default)]
    pub city: Option<String>,

    #[serde(rename = "Country", default)]
    pub country: Option<String>,

    #[serde(rename = "Balance", default)]
    pub balance: f64,

    #[serde(rename = "isEmailVerified", default)]
    pub is_email_verified: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProfileEnvelope {
    pub userdata: Publisher,
}
