use crate::parsers::ExtractedPage;
use scraper::{Html, Selector};

/// Parses a fetched page, harvesting the title, the text of every
/// element matching `selection` and every anchor href.
pub fn extract(html: &str, selection: &Selector) -> ExtractedPage {
    let doc = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    // Selected elements concatenate back to back, as the original
    // markup interleaves them
    let mut text = String::new();
    for element in doc.select(selection) {
        text.extend(element.text());
    }
    let text = collapse_blank_pairs(&text);

    let link_selector = Selector::parse("a").unwrap();
    let links = doc
        .select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML extractor found {} links", links.len());

    ExtractedPage::new(title, text, links)
}

/// Collapse blank-line pairs to single blank lines. One left-to-right
/// pass over non-overlapping pairs, textual only.
pub fn collapse_blank_pairs(text: &str) -> String {
    text.replace("\n\n", "\n")
}
