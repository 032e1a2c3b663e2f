use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Serialize)]
pub struct CreateSiteRequest {
    #[serde(rename = "WebsiteName")]
    pub website_name: String,

    #[serde(rename = "WebsiteURL")]
    pub website_url: String,

    #[serde(rename = "WebAPPUrl")]
    pub web_app_url: String,
}

// The URL rules are prefix checks, not full URL parses, to match what the
// backend enforces.
impl Validate for CreateSiteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.website_name.trim().is_empty() {
            errors.add("WebsiteName", message_error("Website Name is required"));
        }

        if self.website_url.trim().is_empty() {
            errors.add("WebsiteURL", message_error("Website URL is required"));
        } else if !self.website_url.starts_with("https://") {
            errors.add("WebsiteURL", message_error("URL must start with https://"));
        }

        if self.web_app_url.trim().is_empty() {
            errors.add("WebAPPUrl", message_error("Web APP URL is required"));
        } else if !self.web_app_url.starts_with("https://t.me/") {
            errors.add(
                "WebAPPUrl",
                message_error("URL must start with https://t.me/"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn message_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("invalid");
    error.message = Some(Cow::from(message));
    error
}

/// Query parameters for the site listing.
#[derive(Debug, Serialize, Clone)]
pub struct SiteFilter {
    pub page: u32,
    pub limit: u32,

    #[serde(rename = "WebsiteName", skip_serializing_if = "Option::is_none")]
    pub website_name: Option<String>,

    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,

    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Default for SiteFilter {
    fn default() -> Self {
        SiteFilter {
            page: 1,
            limit: 10,
            website_name: None,
            created_at: None,
            is_active: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telegram_url_prefix_is_enforced() {
        let req = CreateSiteRequest {
            website_name: "News Today".to_string(),
            website_url: "https://news.example.com".to_string(),
            web_app_url: "https://example.com/app".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("WebAPPUrl"));
    }

    #[test]
    fn valid_request_passes() {
        let req = CreateSiteRequest {
            website_name: "News Today".to_string(),
            website_url: "https://news.example.com".to_string(),
            web_app_url: "https://t.me/newstoday_bot".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
