// services/auth_service.rs
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::dtos::{
    ChangePasswordRequest, CodeIssued, CodeVerified, LoginRequest, LoginResponse, MessageResponse,
    ProfileUpdate, ResetPasswordRequest, SendOtpRequest, SignupRequest, VerifyOtpRequest,
};
use crate::errors::{AppError, Result};
use crate::flow::{VerificationApi, VerificationPurpose};
use crate::models::publisher::ProfileEnvelope;
use crate::models::Publisher;
use crate::services::api_client::ApiClient;

const VERIFY_OTP_PATH: &str = "/auth/verify-otp";
const EMAIL_VERIFICATION_QUERY: &str = "?Verification=EmailVerification";

#[derive(Debug, Deserialize)]
struct UpdateProfileResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<Publisher>,
}

/// Account endpoints: login/signup, profile, password changes and the OTP
/// contract behind the verification flow.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in, open the session and pull the profile. A login whose
    /// profile fetch fails is rolled back to logged-out.
    pub async fn login(&self, email: &str, password: &str) -> Result<Publisher> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response: LoginResponse = self.client.post_json("/auth/login", &request).await?;
        self.client.session().open(response.token);
        info!("Logged in as {}", email);

        self.refresh_profile().await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Option<String>> {
        request.validate()?;
        let response: MessageResponse = self.client.post_json("/auth/signup", request).await?;
        info!("Signup submitted for {}", request.email);
        Ok(response.message)
    }

    pub async fn get_profile(&self) -> Result<Publisher> {
        if !self.client.session().is_authenticated() {
            return Err(AppError::Unauthenticated);
        }
        let envelope: ProfileEnvelope = self.client.get("/auth/getprofile").await?;
        Ok(envelope.userdata)
    }

    /// Re-fetch the profile for the open session and cache it. Any failure
    /// tears the session down, so a stale or revoked token never lingers.
    pub async fn refresh_profile(&self) -> Result<Publisher> {
        match self.get_profile().await {
            Ok(publisher) => {
                self.client.session().attach_publisher(publisher.clone());
                Ok(publisher)
            }
            Err(err) => {
                warn!("Profile fetch failed, closing session: {}", err);
                self.client.session().close();
                Err(err)
            }
        }
    }

    /// Adopt a previously stored token, validating it by fetching the
    /// profile. On failure the session is left closed.
    pub async fn hydrate(&self, token: impl Into<String>) -> Result<Publisher> {
        self.client.session().open(token);
        self.refresh_profile().await
    }

    pub fn logout(&self) {
        self.client.session().close();
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<String>> {
        update.validate()?;
        let response: UpdateProfileResponse =
            self.client.put_json("/auth/updateprofile", update).await?;
        if let Some(user) = response.user {
            self.client.session().attach_publisher(user);
        }
        Ok(response.message)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<Option<String>> {
        request.validate()?;
        let response: MessageResponse =
            self.client.put_json("/auth/changepassword", request).await?;
        Ok(response.message)
    }
}

#[async_trait]
impl VerificationApi for AuthService {
    async fn send_code(&self, email: &str) -> Result<CodeIssued> {
        let request = SendOtpRequest {
            email: email.to_string(),
        };
        request.validate()?;

        let issued: CodeIssued = self.client.post_json("/auth/request-reset", &request).await?;
        info!("OTP issued for {}, expires {}", email, issued.expires_at);
        Ok(issued)
    }

    async fn verify_code(
        &self,
        email: &str,
        code: &str,
        purpose: VerificationPurpose,
    ) -> Result<CodeVerified> {
        // the backend takes the code as a JSON number
        let otp = code
            .parse::<u32>()
            .map_err(|_| AppError::validation("OTP must be 6 digits"))?;
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp,
        };
        request.validate()?;

        let path = match purpose {
            VerificationPurpose::PasswordReset => VERIFY_OTP_PATH.to_string(),
            VerificationPurpose::EmailVerification => {
                format!("{}{}", VERIFY_OTP_PATH, EMAIL_VERIFICATION_QUERY)
            }
        };

        self.client.post_json(&path, &request).await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<Option<String>> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        request.validate()?;

        let response: MessageResponse = self
            .client
            .put_json("/auth/reset-password", &request)
            .await?;
        info!("Password reset completed");
        Ok(response.message)
    }
}
