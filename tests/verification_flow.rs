use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use pubdash_client::dtos::{CodeIssued, CodeVerified};
use pubdash_client::flow::{FlowState, VerificationApi, VerificationFlow, VerificationPurpose};
use pubdash_client::{AppError, Result};

const EMAIL: &str = "publisher@example.com";

fn t0() -> DateTime<Utc> {
    "2026-08-22T12:00:00Z".parse().unwrap()
}

/// Scripted remote side: queued results per operation, call counters and
/// argument capture.
#[derive(Default)]
struct ScriptedApi {
    send_results: Mutex<VecDeque<Result<CodeIssued>>>,
    verify_results: Mutex<VecDeque<Result<CodeVerified>>>,
    reset_results: Mutex<VecDeque<Result<Option<String>>>>,
    send_calls: AtomicUsize,
    verify_calls: AtomicUsize,
    reset_calls: AtomicUsize,
    seen_code: Mutex<Option<String>>,
    seen_purpose: Mutex<Option<VerificationPurpose>>,
    seen_reset_token: Mutex<Option<String>>,
}

impl ScriptedApi {
    fn new() -> Arc<Self> {
        Arc::new(ScriptedApi::default())
    }

    fn queue_send(&self, result: Result<CodeIssued>) {
        self.send_results.lock().unwrap().push_back(result);
    }

    fn queue_verify(&self, result: Result<CodeVerified>) {
        self.verify_results.lock().unwrap().push_back(result);
    }

    fn queue_reset(&self, result: Result<Option<String>>) {
        self.reset_results.lock().unwrap().push_back(result);
    }

    fn issued(expires_at: DateTime<Utc>) -> Result<CodeIssued> {
        Ok(CodeIssued {
            expires_at,
            message: Some("OTP sent to your email".to_string()),
        })
    }

    fn verified_with_token(token: &str) -> Result<CodeVerified> {
        Ok(CodeVerified {
            message: Some("OTP verified".to_string()),
            reset_token: Some(token.to_string()),
        })
    }
}

#[async_trait]
impl VerificationApi for ScriptedApi {
    async fn send_code(&self, _email: &str) -> Result<CodeIssued> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.send_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected send_code call")
    }

    async fn verify_code(
        &self,
        _email: &str,
        code: &str,
        purpose: VerificationPurpose,
    ) -> Result<CodeVerified> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_code.lock().unwrap() = Some(code.to_string());
        *self.seen_purpose.lock().unwrap() = Some(purpose);
        self.verify_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected verify_code call")
    }

    async fn reset_password(&self, token: &str, _new_password: &str) -> Result<Option<String>> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_reset_token.lock().unwrap() = Some(token.to_string());
        self.reset_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected reset_password call")
    }
}

#[tokio::test]
async fn password_reset_walkthrough() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_verify(ScriptedApi::verified_with_token("reset-tok-1"));
    api.queue_reset(Ok(Some("Password updated successfully".to_string())));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api.clone(), EMAIL);

    flow.submit_email().await;
    assert_eq!(flow.state(), FlowState::CodeSent);
    assert_eq!(flow.info(), Some("OTP sent to your email"));
    assert_eq!(flow.countdown_at(t0()), "3:00");
    assert!(!flow.can_resend_at(t0()));

    // countdown is a pure function of the sampling instant
    assert_eq!(flow.countdown_at(t0() + Duration::seconds(60)), "2:00");
    assert_eq!(flow.countdown_at(t0() + Duration::seconds(175)), "0:05");

    for (i, d) in ["4", "7", "1", "9", "2", "8"].iter().enumerate() {
        assert!(flow.set_digit(i, d));
    }
    assert_eq!(flow.buffer().focus(), 5);

    flow.submit_code().await;
    assert_eq!(flow.state(), FlowState::Verified);
    assert_eq!(flow.reset_token(), Some("reset-tok-1"));
    assert_eq!(api.seen_code.lock().unwrap().as_deref(), Some("471928"));
    assert_eq!(
        *api.seen_purpose.lock().unwrap(),
        Some(VerificationPurpose::PasswordReset)
    );

    flow.submit_password("s3cret99", "s3cret99").await;
    assert_eq!(flow.state(), FlowState::Done);
    assert_eq!(flow.info(), Some("Password updated successfully"));
    assert_eq!(flow.reset_token(), None);
    assert_eq!(
        api.seen_reset_token.lock().unwrap().as_deref(),
        Some("reset-tok-1")
    );
}

#[tokio::test]
async fn countdown_displays_minutes_with_padded_seconds() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(125)));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api, EMAIL);
    flow.submit_email().await;

    assert_eq!(flow.countdown_at(t0()), "2:05");
    assert_eq!(flow.remaining_at(t0()), 125);
}

#[tokio::test]
async fn expired_expiry_unlocks_resend_immediately() {
    let api = ScriptedApi::new();
    // server clock ahead of ours: the code arrives already expired
    api.queue_send(ScriptedApi::issued(t0() - Duration::seconds(5)));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api, EMAIL);
    flow.submit_email().await;

    assert_eq!(flow.state(), FlowState::CodeSent);
    assert_eq!(flow.remaining_at(t0()), 0);
    assert_eq!(flow.countdown_at(t0()), "0:00");
    assert!(flow.can_resend_at(t0()));
}

#[tokio::test]
async fn rejected_code_keeps_digits_for_correction() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_verify(Err(AppError::api(400, Some("Invalid OTP".to_string()))));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api, EMAIL);
    flow.submit_email().await;

    assert!(flow.paste("000000"));
    flow.submit_code().await;

    assert_eq!(flow.state(), FlowState::CodeSent);
    assert_eq!(flow.error(), Some("Invalid OTP"));
    // the entered digits stay, one wrong cell can be fixed in place
    assert_eq!(flow.buffer().value(), "000000");
    assert!(flow.buffer().is_complete());
}

#[tokio::test]
async fn transport_failure_on_verify_uses_generic_message() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_verify(Err(AppError::Http("connection refused".to_string())));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api, EMAIL);
    flow.submit_email().await;
    flow.paste("123456");
    flow.submit_code().await;

    assert_eq!(flow.error(), Some("Failed to verify OTP"));
    assert_eq!(flow.state(), FlowState::CodeSent);
}

#[tokio::test]
async fn resend_is_ignored_while_countdown_runs() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api.clone(), EMAIL);
    flow.submit_email().await;
    flow.set_digit(0, "1");

    flow.resend(t0() + Duration::seconds(60)).await;

    assert_eq!(api.send_calls.load(Ordering::SeqCst), 1);
    assert_eq!(flow.buffer().value(), "1");
    assert_eq!(flow.countdown_at(t0()), "3:00");
}

#[tokio::test]
async fn resend_after_expiry_restarts_countdown_and_clears_digits() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(500)));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api.clone(), EMAIL);
    flow.submit_email().await;
    flow.set_digit(0, "1");
    flow.set_digit(1, "2");

    let after_expiry = t0() + Duration::seconds(181);
    assert!(flow.can_resend_at(after_expiry));
    flow.resend(after_expiry).await;

    assert_eq!(api.send_calls.load(Ordering::SeqCst), 2);
    assert!(flow.buffer().is_empty());
    assert_eq!(flow.buffer().focus(), 0);
    assert!(!flow.can_resend_at(after_expiry));
    assert_eq!(flow.countdown_at(after_expiry), "5:19");
}

#[tokio::test]
async fn verify_response_without_token_is_treated_as_rejection() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_verify(Ok(CodeVerified {
        message: Some("OK".to_string()),
        reset_token: None,
    }));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api, EMAIL);
    flow.submit_email().await;
    flow.paste("123456");
    flow.submit_code().await;

    assert_eq!(flow.state(), FlowState::CodeSent);
    assert_eq!(flow.error(), Some("Invalid OTP"));
    assert_eq!(flow.reset_token(), None);
}

#[tokio::test]
async fn email_verification_completes_without_token() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_verify(Ok(CodeVerified {
        message: Some("Email verified".to_string()),
        reset_token: None,
    }));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::EmailVerification, api.clone(), EMAIL);
    flow.submit_email().await;
    flow.paste("123456");
    flow.submit_code().await;

    assert_eq!(flow.state(), FlowState::Verified);
    assert_eq!(flow.info(), Some("Email verified"));
    assert_eq!(
        *api.seen_purpose.lock().unwrap(),
        Some(VerificationPurpose::EmailVerification)
    );

    // dialog closes after the success message; the flow re-arms for next time
    flow.reset();
    assert_eq!(flow.state(), FlowState::EmailEntry);
    assert_eq!(flow.email(), EMAIL);
}

#[tokio::test]
async fn completed_send_is_not_repeated_from_code_step() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api.clone(), EMAIL);
    flow.submit_email().await;
    assert_eq!(flow.state(), FlowState::CodeSent);

    // a second submit from the email step is a no-op once the code is out
    flow.submit_email().await;
    assert_eq!(api.send_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_send_shows_server_message() {
    let api = ScriptedApi::new();
    api.queue_send(Err(AppError::api(
        404,
        Some("Email not registered".to_string()),
    )));

    let mut flow = VerificationFlow::new(VerificationPurpose::PasswordReset, api);
    flow.set_email(EMAIL);
    flow.submit_email().await;

    assert_eq!(flow.state(), FlowState::EmailEntry);
    assert_eq!(flow.error(), Some("Email not registered"));
}

#[tokio::test]
async fn go_back_then_new_send_issues_fresh_code() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(360)));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api.clone(), EMAIL);
    flow.submit_email().await;
    flow.paste("123456");

    flow.go_back();
    assert_eq!(flow.state(), FlowState::EmailEntry);
    assert!(flow.buffer().is_empty());
    assert!(flow.can_resend_at(t0()));

    flow.submit_email().await;
    assert_eq!(flow.state(), FlowState::CodeSent);
    assert_eq!(api.send_calls.load(Ordering::SeqCst), 2);
    assert_eq!(flow.countdown_at(t0()), "6:00");
}

#[tokio::test]
async fn failed_password_update_keeps_verified_state() {
    let api = ScriptedApi::new();
    api.queue_send(ScriptedApi::issued(t0() + Duration::seconds(180)));
    api.queue_verify(ScriptedApi::verified_with_token("reset-tok-2"));
    api.queue_reset(Err(AppError::Http("timeout".to_string())));

    let mut flow =
        VerificationFlow::with_email(VerificationPurpose::PasswordReset, api.clone(), EMAIL);
    flow.submit_email().await;
    flow.paste("123456");
    flow.submit_code().await;

    flow.submit_password("s3cret99", "s3cret99").await;

    assert_eq!(flow.state(), FlowState::Verified);
    assert_eq!(flow.error(), Some("Failed to update password"));
    // token survives a failed update, the user can retry
    assert_eq!(flow.reset_token(), Some("reset-tok-2"));
    assert_eq!(api.reset_calls.load(Ordering::SeqCst), 1);
}
