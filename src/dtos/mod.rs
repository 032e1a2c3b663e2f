pub mod account_dtos;
pub mod auth_dtos;
pub mod site_dtos;
pub mod stats_dtos;
pub mod support_dtos;
pub mod withdrawal_dtos;

pub use account_dtos::{ChangePasswordRequest, CompanyProfile, IndividualProfile, ProfileUpdate};
pub use auth_dtos::{
    CodeIssued, CodeVerified, LoginRequest, LoginResponse, MessageResponse, ResetPasswordRequest,
    SendOtpRequest, SignupRequest, VerifyOtpRequest,
};
pub use site_dtos::{CreateSiteRequest, SiteFilter};
pub use stats_dtos::StatsFilter;
pub use support_dtos::SupportMailRequest;
pub use withdrawal_dtos::{WithdrawRequest, WithdrawalFilter};
