use serde::Serialize;
use validator::Validate;

#[derive(Debug, Serialize, Validate)]
pub struct SupportMailRequest {
    #[serde(rename = "Subject")]
    #[validate(length(min = 1, message = "Please enter a subject."))]
    pub subject: String,

    #[serde(rename = "Message")]
    #[validate(length(min = 1, message = "Please enter a message."))]
    pub message: String,
}
