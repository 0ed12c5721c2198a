pub mod html;


/// Everything pulled out of one fetched page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Document title, empty when the page has none
    pub title: String,

    /// Concatenated text of the elements matching the selection rule
    pub text: String,

    /// Raw href values of every anchor, in document order, unresolved
    pub links: Vec<String>,
}

impl ExtractedPage {
    /// Creates a new extracted page
    pub fn new(title: String, text: String, links: Vec<String>) -> Self {
        Self { title, text, links }
    }
}
