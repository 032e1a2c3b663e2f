pub mod network;
pub mod pagination;
pub mod publisher;
pub mod site;
pub mod stats;
pub mod support;
pub mod withdrawal;

pub use network::PayoutNetwork;
pub use pagination::Paginated;
pub use publisher::Publisher;
pub use site::Site;
pub use stats::DailyStat;
pub use support::{FaqEntry, SupportData};
pub use withdrawal::{Withdrawal, WithdrawalStatus, WithdrawalSummary};
