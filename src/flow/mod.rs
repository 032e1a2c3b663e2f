//! Headless OTP verification flow: input buffer, resend countdown and the
//! step machine that sequences email entry, code verification and (for the
//! password-reset variant) the password update.

pub mod buffer;
pub mod machine;
pub mod timer;

use async_trait::async_trait;

use crate::dtos::{CodeIssued, CodeVerified};
use crate::errors::Result;

pub use buffer::{OtpBuffer, OTP_LEN};
pub use machine::{FlowState, VerificationFlow};
pub use timer::ResendTimer;

/// Which flow the verification code belongs to. The backend issues codes
/// from the same endpoint for both; the purpose changes how a successful
/// verify is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationPurpose {
    /// Verify ownership of the address to mint a password-reset token.
    PasswordReset,
    /// Mark the account email as verified.
    EmailVerification,
}

/// Remote side of the verification flow. Implemented over HTTP by
/// `services::AuthService`; tests script their own.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    async fn send_code(&self, email: &str) -> Result<CodeIssued>;

    async fn verify_code(
        &self,
        email: &str,
        code: &str,
        purpose: VerificationPurpose,
    ) -> Result<CodeVerified>;

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<Option<String>>;
}
