use serde::Serialize;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Serialize, Validate)]
pub struct IndividualProfile {
    #[serde(rename = "FirstName")]
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,

    #[serde(rename = "LastName")]
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,

    #[serde(rename = "Address")]
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[serde(rename = "City")]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(rename = "Country")]
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

#[derive(Debug, Serialize, Validate)]
pub struct CompanyProfile {
    #[serde(rename = "CompanyName")]
    #[validate(length(min = 1, message = "Company Name is required"))]
    pub company_name: String,

    #[serde(rename = "Address")]
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[serde(rename = "City")]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(rename = "Country")]
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

/// Profile update payload. The account type is carried as the
/// `AccountType` discriminator and is locked server-side after the first
/// update.
#[derive(Debug, Serialize)]
#[serde(tag = "AccountType")]
pub enum ProfileUpdate {
    Individual(IndividualProfile),
    Company(CompanyProfile),
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            ProfileUpdate::Individual(profile) => profile.validate(),
            ProfileUpdate::Company(profile) => profile.validate(),
        }
    }
}

#[derive(Debug, Serialize, Validate)]
pub struct ChangePasswordRequest {
    #[serde(rename = "OldPassword")]
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub old_password: String,

    #[serde(rename = "NewPassword")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_carries_account_type_tag() {
        let update = ProfileUpdate::Company(CompanyProfile {
            company_name: "AdWorks Ltd".to_string(),
            address: "12 High St".to_string(),
            city: "Pune".to_string(),
            country: "India".to_string(),
        });

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["AccountType"], "Company");
        assert_eq!(value["CompanyName"], "AdWorks Ltd");
        assert!(value.get("FirstName").is_none());
    }

    #[test]
    fn blank_city_is_rejected() {
        let update = ProfileUpdate::Individual(IndividualProfile {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            address: "Flat 3".to_string(),
            city: "".to_string(),
            country: "India".to_string(),
        });
        assert!(update.validate().is_err());
    }
}
