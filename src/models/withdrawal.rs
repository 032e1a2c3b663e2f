use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "TRANSFERRED")]
    Transferred,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "PENDING",
            WithdrawalStatus::Transferred => "TRANSFERRED",
            WithdrawalStatus::Rejected => "REJECTED",
        }
    }
}

/// Populated network reference on a withdrawal document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(rename = "Network")]
    pub network: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Withdrawal {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "WalletAddress")]
    pub wallet_address: String,

    /// Null when the network document has been removed.
    #[serde(rename = "NetworkId", default)]
    pub network: Option<NetworkRef>,

    #[serde(rename = "AmountInUSD")]
    pub amount_in_usd: f64,

    #[serde(rename = "Status")]
    pub status: WithdrawalStatus,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Balance roll-up returned alongside the withdrawal list
/// (the `withdrawalData` object).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct WithdrawalSummary {
    #[serde(rename = "Balance", default)]
    pub balance: f64,

    #[serde(rename = "PendingAmount", default)]
    pub pending_amount: f64,

    #[serde(rename = "TransferredAmount", default)]
    pub transferred_amount: f64,

    #[serde(rename = "rejectedAmount", default)]
    pub rejected_amount: f64,

    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
}
