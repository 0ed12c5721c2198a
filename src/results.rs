use serde::{Deserialize, Serialize};

/// One harvested page: its title, the URL it was fetched from and the
/// text selected out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Title of the page (empty when the document has no `<title>`)
    pub title: String,

    /// URL the page was fetched from
    pub url: String,

    /// Concatenated text of all elements matching the selection rule
    pub data: String,
}

impl PageRecord {
    /// Create a new page record
    pub fn new(title: String, url: String, data: String) -> Self {
        Self { title, url, data }
    }
}
