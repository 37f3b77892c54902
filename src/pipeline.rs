use reqwest::{Client, ClientBuilder};

use crate::Word;
use crate::config::Config;
use crate::dictionary::DefinitionFetcher;
use crate::error::Result;
use crate::scraper::LinkScraper;

/// The outcome of one lookup. Each operation reports independently, so a
/// failure on one side never hides the other side's result.
#[derive(Debug)]
pub struct WordReport {
    pub definition: Result<String>,
    pub links: Result<Vec<String>>,
}

/// Runs the definition lookup and the link scrape for a word and aggregates
/// both outcomes.
pub struct Pipeline {
    fetcher: DefinitionFetcher,
    scraper: LinkScraper,
}

impl Pipeline {
    /// Builds both components around a single shared HTTP client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_client(config)?;

        Ok(Self {
            fetcher: DefinitionFetcher::new(client.clone(), config.dictionary_url.clone()),
            scraper: LinkScraper::new(client, config.search_url.clone()),
        })
    }

    /// Runs both lookups concurrently and waits for both to finish. The two
    /// operations have no data dependency on each other.
    pub async fn run(&self, word: &Word) -> WordReport {
        let (definition, links) = tokio::join!(self.fetcher.fetch(word), self.scraper.scrape(word));

        if let Err(err) = &definition {
            tracing::warn!(word = word.as_str(), error = %err, "definition lookup failed");
        }
        if let Err(err) = &links {
            tracing::warn!(word = word.as_str(), error = %err, "link scrape failed");
        }

        WordReport { definition, links }
    }
}

// One client so both operations share a connection pool.
fn build_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(10)
        .build()?;
    Ok(client)
}
