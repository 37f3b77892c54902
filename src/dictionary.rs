use reqwest::Client;
use serde::Deserialize;

use crate::Word;
use crate::error::{AppError, Result};

/// One headword entry in a dictionary response. Only the short gloss list is
/// of interest; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    shortdef: Option<Vec<String>>,
}

/// Looks up a word against a dictionary API and returns its first short
/// definition.
pub struct DefinitionFetcher {
    client: Client,
    base_url: String,
}

impl DefinitionFetcher {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the first short definition for `word`, or an empty string when
    /// the dictionary has no entry for it.
    pub async fn fetch(&self, word: &Word) -> Result<String> {
        let url = self.lookup_url(word);
        tracing::debug!(url = %url, "requesting definition");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        extract_definition(&body)
    }

    fn lookup_url(&self, word: &Word) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(word.as_str())
        )
    }
}

/// Pulls the first short definition out of a raw dictionary payload.
///
/// A missing hop anywhere along the chain (no entries, absent or empty
/// `shortdef`) means the word is not in the dictionary, which is an empty
/// result rather than an error.
fn extract_definition(body: &str) -> Result<String> {
    let entries: Vec<DictionaryEntry> = serde_json::from_str(body)
        .map_err(|e| AppError::ParseError(format!("Invalid dictionary response: {}", e)))?;

    let definition = entries
        .first()
        .and_then(|entry| entry.shortdef.as_deref())
        .and_then(|defs| defs.first())
        .cloned()
        .unwrap_or_default();

    Ok(definition)
}
