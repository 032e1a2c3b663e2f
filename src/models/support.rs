use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FaqEntry {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "FAQ")]
    pub question: String,

    #[serde(rename = "Answer")]
    pub answer: String,

    #[serde(rename = "isFAqActive", default)]
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SupportData {
    #[serde(rename = "FAQS", default)]
    pub faqs: Vec<FaqEntry>,

    #[serde(rename = "TelegramSupport", default)]
    pub telegram_support: Option<String>,
}

impl SupportData {
    /// Entries flagged active by support staff, in listing order.
    pub fn active_faqs(&self) -> impl Iterator<Item = &FaqEntry> {
        self.faqs.iter().filter(|faq| faq.is_active)
    }
}
