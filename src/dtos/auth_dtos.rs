use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request DTOs

#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[serde(rename = "Email")]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(rename = "Password")]
    #[validate(length(min = 1, message = "Please enter email and password"))]
    pub password: String,
}

#[derive(Debug, Serialize, Validate)]
pub struct SignupRequest {
    #[serde(rename = "Email")]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(rename = "Username")]
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,

    #[serde(rename = "Password")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(rename = "TelegramUsername")]
    #[validate(length(min = 1, message = "Telegram username is required"))]
    pub telegram_username: String,

    #[serde(rename = "Role")]
    pub role: String,
}

impl SignupRequest {
    pub fn publisher(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        telegram_username: impl Into<String>,
    ) -> Self {
        SignupRequest {
            email: email.into(),
            username: username.into(),
            password: password.into(),
            telegram_username: telegram_username.into(),
            role: "Publisher".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Validate)]
pub struct SendOtpRequest {
    #[validate(email(message = "Please enter your email address"))]
    pub email: String,
}

/// The backend expects `otp` as a JSON number, so the six digits are
/// converted from the buffer string at this boundary.
#[derive(Debug, Serialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "Please enter your email address"))]
    pub email: String,

    #[validate(range(min = 0, max = 999_999, message = "OTP must be 6 digits"))]
    pub otp: u32,
}

#[derive(Debug, Serialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Reset token is missing"))]
    pub token: String,

    #[serde(rename = "newPassword")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

// Response DTOs

#[derive(Debug, Deserialize, Clone)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of requesting a verification code: the server-issued expiry
/// drives the resend countdown.
#[derive(Debug, Deserialize, Clone)]
pub struct CodeIssued {
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Result of verifying a code. `reset_token` is present only for the
/// password-reset purpose.
#[derive(Debug, Deserialize, Clone)]
pub struct CodeVerified {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "token", default)]
    pub reset_token: Option<String>,
}
