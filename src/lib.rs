//! Client SDK for the publisher advertising dashboard backend.
//!
//! Typed wrappers over the REST surface (sites, statistics, withdrawals,
//! profile, support) plus a headless controller for the OTP verification
//! flow used by password reset and email verification.

pub mod config;
pub mod dtos;
pub mod errors;
pub mod flow;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

use std::sync::Arc;

use flow::{VerificationFlow, VerificationPurpose};
use services::{
    ApiClient, AuthService, SitesService, StatsService, SupportService, WithdrawalsService,
};

pub use config::ApiConfig;
pub use errors::{AppError, Result};
pub use session::SessionStore;

/// One handle to the whole API: shared connection pool and session behind
/// per-area services.
#[derive(Debug, Clone)]
pub struct PubdashClient {
    session: SessionStore,
    auth: AuthService,
    sites: SitesService,
    withdrawals: WithdrawalsService,
    stats: StatsService,
    support: SupportService,
}

impl PubdashClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let session = SessionStore::new();
        let client = ApiClient::new(config, session.clone())?;

        Ok(PubdashClient {
            session,
            auth: AuthService::new(client.clone()),
            sites: SitesService::new(client.clone()),
            withdrawals: WithdrawalsService::new(client.clone()),
            stats: StatsService::new(client.clone()),
            support: SupportService::new(client),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn sites(&self) -> &SitesService {
        &self.sites
    }

    pub fn withdrawals(&self) -> &WithdrawalsService {
        &self.withdrawals
    }

    pub fn stats(&self) -> &StatsService {
        &self.stats
    }

    pub fn support(&self) -> &SupportService {
        &self.support
    }

    /// Forgot-password flow for the login screen.
    pub fn password_reset_flow(&self) -> VerificationFlow {
        VerificationFlow::new(
            VerificationPurpose::PasswordReset,
            Arc::new(self.auth.clone()),
        )
    }

    /// Verify the logged-in account's email address.
    pub fn email_verification_flow(&self, email: impl Into<String>) -> VerificationFlow {
        VerificationFlow::with_email(
            VerificationPurpose::EmailVerification,
            Arc::new(self.auth.clone()),
            email,
        )
    }
}
