use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::Word;
use crate::error::Result;

// Create a static selector to avoid recompiling it each time
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a[href]").expect("Failed to parse anchor selector")
});

/// Scrapes a search-results page for a word and collects the outbound links.
pub struct LinkScraper {
    client: Client,
    base_url: String,
}

impl LinkScraper {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the search results for `word` and returns every absolute
    /// HTTP(S) link on the page, in document order. Duplicates are kept.
    pub async fn scrape(&self, word: &Word) -> Result<Vec<String>> {
        tracing::debug!(word = word.as_str(), "requesting search results");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", word.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        Ok(extract_links(&body))
    }
}

/// Collects the href of every anchor in the document, keeping only values
/// with a literal `http://` or `https://` prefix.
fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.starts_with("http://") || href.starts_with("https://"))
        .map(str::to_owned)
        .collect()
}
