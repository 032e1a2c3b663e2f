use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::PayoutNetwork;

#[derive(Debug, Serialize, Validate)]
pub struct WithdrawRequest {
    #[serde(rename = "NetworkId")]
    #[validate(length(min = 1, message = "Network is required"))]
    pub network_id: String,

    #[serde(rename = "WalletAddress")]
    #[validate(length(min = 1, message = "Wallet address is required"))]
    pub wallet_address: String,

    #[serde(rename = "AmountInUSD")]
    #[validate(range(min = 0.01, message = "Please enter a valid amount"))]
    pub amount_in_usd: f64,
}

impl WithdrawRequest {
    /// Wallet, balance and per-network limit checks the dashboard form runs
    /// before submitting. Server re-validates; this keeps doomed requests
    /// local.
    pub fn check_limits(&self, network: &PayoutNetwork, balance: f64) -> Result<()> {
        if self.wallet_address.chars().count() < 10 {
            return Err(AppError::validation("Please enter a valid wallet address"));
        }
        if balance <= 0.0 {
            return Err(AppError::validation(
                "Insufficient balance to make a withdrawal",
            ));
        }
        if self.amount_in_usd > balance {
            return Err(AppError::validation(format!(
                "Amount exceeds your available balance ({} USDT)",
                balance
            )));
        }
        if self.amount_in_usd < network.min_withdraw {
            return Err(AppError::validation(format!(
                "Amount must be at least {} USDT for this network",
                network.min_withdraw
            )));
        }
        if self.amount_in_usd > network.max_withdraw {
            return Err(AppError::validation(format!(
                "Amount must not exceed {} USDT for this network",
                network.max_withdraw
            )));
        }
        Ok(())
    }
}

/// Query parameters for the withdrawal history listing.
#[derive(Debug, Serialize, Clone)]
pub struct WithdrawalFilter {
    pub page: u32,
    pub limit: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,

    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for WithdrawalFilter {
    fn default() -> Self {
        WithdrawalFilter {
            page: 1,
            limit: 10,
            status: None,
            network: None,
            wallet: None,
            start_date: None,
            end_date: None,
        }
    }
}
