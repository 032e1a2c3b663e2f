pub mod api_client;
pub mod auth_service;
pub mod sites_service;
pub mod stats_service;
pub mod support_service;
pub mod withdrawals_service;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use sites_service::SitesService;
pub use stats_service::StatsService;
pub use support_service::SupportService;
pub use withdrawals_service::{WithdrawalHistory, WithdrawalsService};
