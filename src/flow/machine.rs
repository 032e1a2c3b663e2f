use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::{OtpBuffer, ResendTimer, VerificationApi, VerificationPurpose};

const MSG_EMAIL_REQUIRED: &str = "Please enter your email address";
const MSG_INCOMPLETE_OTP: &str = "Please enter complete OTP";
const MSG_INVALID_OTP: &str = "Invalid OTP";
const MSG_SEND_FAILED: &str = "Failed to send OTP";
const MSG_VERIFY_FAILED: &str = "Failed to verify OTP";
const MSG_RESEND_FAILED: &str = "Failed to resend OTP";
const MSG_RESET_FAILED: &str = "Failed to update password";
const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
const MSG_PASSWORDS_DIFFER: &str = "Passwords do not match";
const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Collecting the address to send a code to.
    EmailEntry,
    /// Code issued; collecting the six digits, countdown running.
    CodeSent,
    /// Code accepted. Terminal for email verification; the reset variant
    /// still owes a password update.
    Verified,
    /// Password updated. Terminal.
    Done,
}

/// Client-side controller for the OTP verification flow.
///
/// One instance drives one attempt: the password-reset sequence on the
/// login screen or the email-verification dialog in the dashboard, chosen
/// by [`VerificationPurpose`]. All mutation goes through `&mut self`, so a
/// response can never race a state change; every remote failure lands in
/// [`error`](Self::error) and leaves the step unchanged for the user to
/// retry.
pub struct VerificationFlow {
    purpose: VerificationPurpose,
    api: Arc<dyn VerificationApi>,
    state: FlowState,
    email: String,
    buffer: OtpBuffer,
    timer: ResendTimer,
    reset_token: Option<String>,
    error: Option<String>,
    info: Option<String>,
    sending: bool,
    verifying: bool,
    resetting: bool,
}

impl VerificationFlow {
    pub fn new(purpose: VerificationPurpose, api: Arc<dyn VerificationApi>) -> Self {
        VerificationFlow {
            purpose,
            api,
            state: FlowState::EmailEntry,
            email: String::new(),
            buffer: OtpBuffer::new(),
            timer: ResendTimer::new(),
            reset_token: None,
            error: None,
            info: None,
            sending: false,
            verifying: false,
            resetting: false,
        }
    }

    /// Flow with the address already known, e.g. verifying the logged-in
    /// account's own email.
    pub fn with_email(
        purpose: VerificationPurpose,
        api: Arc<dyn VerificationApi>,
        email: impl Into<String>,
    ) -> Self {
        let mut flow = VerificationFlow::new(purpose, api);
        flow.email = email.into();
        flow
    }

    // Accessors

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn purpose(&self) -> VerificationPurpose {
        self.purpose
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn buffer(&self) -> &OtpBuffer {
        &self.buffer
    }

    pub fn reset_token(&self) -> Option<&str> {
        self.reset_token.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> i64 {
        self.timer.remaining_at(now)
    }

    pub fn countdown_at(&self, now: DateTime<Utc>) -> String {
        self.timer.display_at(now)
    }

    pub fn can_resend_at(&self, now: DateTime<Utc>) -> bool {
        self.timer.can_resend_at(now)
    }

    /// Drivers clear the inline messages after their display delay.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.info = None;
    }

    // Email step

    /// Editable only before a code has been sent.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.state == FlowState::EmailEntry {
            self.email = email.into();
        }
    }

    /// Request a code for the entered address and move to the code step.
    pub async fn submit_email(&mut self) {
        if self.state != FlowState::EmailEntry || self.sending {
            return;
        }
        if self.email.is_empty() {
            self.error = Some(MSG_EMAIL_REQUIRED.to_string());
            return;
        }

        self.sending = true;
        self.clear_messages();

        let result = self.api.send_code(&self.email).await;
        self.sending = false;

        // response applies only if the step is unchanged
        if self.state != FlowState::EmailEntry {
            return;
        }

        match result {
            Ok(issued) => {
                info!("Verification code issued, expires {}", issued.expires_at);
                self.state = FlowState::CodeSent;
                self.timer.start(issued.expires_at);
                self.buffer.clear();
                self.info = issued.message;
            }
            Err(err) => {
                self.error = Some(err.user_message(MSG_SEND_FAILED));
            }
        }
    }

    // Code step

    pub fn set_digit(&mut self, index: usize, raw: &str) -> bool {
        if self.state != FlowState::CodeSent {
            return false;
        }
        self.buffer.set_digit(index, raw)
    }

    pub fn backspace(&mut self, index: usize) {
        if self.state == FlowState::CodeSent {
            self.buffer.backspace(index);
        }
    }

    pub fn paste(&mut self, raw: &str) -> bool {
        if self.state != FlowState::CodeSent {
            return false;
        }
        self.buffer.paste(raw)
    }

    /// Submit the entered code. On success the reset variant stores the
    /// reset token; failure keeps the digits so the user can fix one cell.
    pub async fn submit_code(&mut self) {
        if self.state != FlowState::CodeSent || self.verifying {
            return;
        }
        if !self.buffer.is_complete() {
            self.error = Some(MSG_INCOMPLETE_OTP.to_string());
            return;
        }

        self.verifying = true;
        self.clear_messages();

        let code = self.buffer.value();
        let result = self.api.verify_code(&self.email, &code, self.purpose).await;
        self.verifying = false;

        if self.state != FlowState::CodeSent {
            return;
        }

        match result {
            Ok(verified) => match self.purpose {
                VerificationPurpose::PasswordReset => match verified.reset_token {
                    Some(token) => {
                        info!("Code verified, reset token received");
                        self.reset_token = Some(token);
                        self.state = FlowState::Verified;
                        self.info = verified.message;
                    }
                    // a 2xx without a token cannot proceed to the
                    // password step; treat it as a rejection
                    None => {
                        self.error = Some(MSG_INVALID_OTP.to_string());
                    }
                },
                VerificationPurpose::EmailVerification => {
                    info!("Email address verified");
                    self.state = FlowState::Verified;
                    self.info = verified.message;
                }
            },
            Err(err) => {
                self.error = Some(err.user_message(MSG_VERIFY_FAILED));
            }
        }
    }

    /// Request a fresh code. Silently ignored while the countdown is still
    /// running; on success the digits are cleared and focus returns to the
    /// first cell.
    pub async fn resend(&mut self, now: DateTime<Utc>) {
        if self.state != FlowState::CodeSent || self.sending {
            return;
        }
        if !self.timer.can_resend_at(now) {
            return;
        }

        self.sending = true;
        self.clear_messages();

        let result = self.api.send_code(&self.email).await;
        self.sending = false;

        if self.state != FlowState::CodeSent {
            return;
        }

        match result {
            Ok(issued) => {
                info!("Verification code reissued, expires {}", issued.expires_at);
                self.timer.start(issued.expires_at);
                self.buffer.clear();
                self.info = issued.message;
            }
            Err(err) => {
                self.error = Some(err.user_message(MSG_RESEND_FAILED));
            }
        }
    }

    /// Abandon the code step and return to email entry. Everything the
    /// step accumulated is discarded.
    pub fn go_back(&mut self) {
        if self.state != FlowState::CodeSent {
            return;
        }
        self.state = FlowState::EmailEntry;
        self.buffer.clear();
        self.timer.clear();
        self.reset_token = None;
        self.clear_messages();
    }

    // Password step (reset variant only)

    /// Exchange the reset token for a new password. Local checks mirror
    /// the form: both fields present, matching, at least six characters.
    pub async fn submit_password(&mut self, new_password: &str, confirm_password: &str) {
        if self.state != FlowState::Verified
            || self.purpose != VerificationPurpose::PasswordReset
            || self.resetting
        {
            return;
        }

        if new_password.is_empty() || confirm_password.is_empty() {
            self.error = Some(MSG_FILL_ALL_FIELDS.to_string());
            return;
        }
        if new_password != confirm_password {
            self.error = Some(MSG_PASSWORDS_DIFFER.to_string());
            return;
        }
        if new_password.chars().count() < 6 {
            self.error = Some(MSG_PASSWORD_TOO_SHORT.to_string());
            return;
        }

        let token = match self.reset_token.clone() {
            Some(token) => token,
            None => {
                self.error = Some(MSG_INVALID_OTP.to_string());
                return;
            }
        };

        self.resetting = true;
        self.clear_messages();

        let result = self.api.reset_password(&token, new_password).await;
        self.resetting = false;

        if self.state != FlowState::Verified {
            return;
        }

        match result {
            Ok(message) => {
                info!("Password updated, flow complete");
                self.state = FlowState::Done;
                // single-use credential, spent now
                self.reset_token = None;
                self.info = message;
            }
            Err(err) => {
                self.error = Some(err.user_message(MSG_RESET_FAILED));
            }
        }
    }

    /// Return the flow to its initial step. The reset variant clears the
    /// entered address along with the rest of the form; the
    /// email-verification variant keeps its configured address for the next
    /// attempt. Drivers call this after the completion message has been
    /// shown, or when the dialog closes.
    pub fn reset(&mut self) {
        self.state = FlowState::EmailEntry;
        if self.purpose == VerificationPurpose::PasswordReset {
            self.email.clear();
        }
        self.buffer.clear();
        self.timer.clear();
        self.reset_token = None;
        self.clear_messages();
        self.sending = false;
        self.verifying = false;
        self.resetting = false;
    }
}

impl fmt::Debug for VerificationFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationFlow")
            .field("purpose", &self.purpose)
            .field("state", &self.state)
            .field("email", &self.email)
            .field("code_len", &self.buffer.value().len())
            .field("has_reset_token", &self.reset_token.is_some())
            .finish()
    }
}
