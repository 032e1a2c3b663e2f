// services/withdrawals_service.rs
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::dtos::{MessageResponse, WithdrawRequest, WithdrawalFilter};
use crate::errors::Result;
use crate::models::{Paginated, PayoutNetwork, Withdrawal, WithdrawalSummary};
use crate::services::api_client::ApiClient;

#[derive(Debug, Deserialize)]
struct NetworksEnvelope {
    networks: Paginated<PayoutNetwork>,
}

#[derive(Debug, Deserialize)]
struct WithdrawalsEnvelope {
    withdrawals: Paginated<Withdrawal>,
    #[serde(rename = "withdrawalData", default)]
    withdrawal_data: Option<WithdrawalSummary>,
}

/// Withdrawal history plus the balance roll-up the backend computes with it.
#[derive(Debug, Clone)]
pub struct WithdrawalHistory {
    pub withdrawals: Paginated<Withdrawal>,
    pub summary: WithdrawalSummary,
}

/// Payout requests and their history.
#[derive(Debug, Clone)]
pub struct WithdrawalsService {
    client: ApiClient,
}

impl WithdrawalsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Networks currently accepting withdrawals, with their per-request
    /// limits.
    pub async fn networks(&self) -> Result<Paginated<PayoutNetwork>> {
        let envelope: NetworksEnvelope = self.client.get("/user/getactivenetworks").await?;
        Ok(envelope.networks)
    }

    /// Submit a withdrawal. `network` and the caller's balance feed the
    /// same limit checks the dashboard form runs.
    pub async fn request(
        &self,
        request: &WithdrawRequest,
        network: &PayoutNetwork,
        balance: f64,
    ) -> Result<Option<String>> {
        request.validate()?;
        request.check_limits(network, balance)?;

        let response: MessageResponse = self
            .client
            .post_json("/user/withdrawrequest", request)
            .await?;
        info!(
            "Withdrawal requested: {} USD via {}",
            request.amount_in_usd, network.network
        );
        Ok(response.message)
    }

    pub async fn history(&self, filter: &WithdrawalFilter) -> Result<WithdrawalHistory> {
        let envelope: WithdrawalsEnvelope = self
            .client
            .get_with_query("/user/getuserwithdrawals", filter)
            .await?;
        Ok(WithdrawalHistory {
            withdrawals: envelope.withdrawals,
            summary: envelope.withdrawal_data.unwrap_or_default(),
        })
    }
}
