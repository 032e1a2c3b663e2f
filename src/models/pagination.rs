use serde::{Deserialize, Serialize};

/// Paginated list envelope the backend wraps every collection in
/// (mongoose-paginate shape).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Paginated<T> {
    pub docs: Vec<T>,
    #[serde(rename = "totalDocs", default)]
    pub total_docs: u64,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(rename = "totalPages", default = "default_page")]
    pub total_pages: u32,
    #[serde(rename = "hasPrevPage", default)]
    pub has_prev_page: bool,
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
    #[serde(rename = "prevPage", default)]
    pub prev_page: Option<u32>,
    #[serde(rename = "nextPage", default)]
    pub next_page: Option<u32>,
}

fn default_limit() -> u32 {
    10
}

fn default_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}
