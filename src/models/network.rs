use serde::{Deserialize, Serialize};

/// Payout network a withdrawal can be routed through (TRC-20, BEP-20, ...).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PayoutNetwork {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "Network")]
    pub network: String,

    #[serde(rename = "MINWithdraw", default)]
    pub min_withdraw: f64,

    #[serde(rename = "MAXWithdraw", default)]
    pub max_withdraw: f64,
}
