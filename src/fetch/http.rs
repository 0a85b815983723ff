use std::time::Duration;

use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::{Entry, FeedDescriptor};
use crate::errors::{ReaderError, ReaderResult};
use crate::fetch::traits::EntryFetcher;

/// HTTP transport: fetches a descriptor's URL with a bounded blocking client
/// and parses the body as RSS/Atom/JSON Feed.
pub struct HttpEntryFetcher {
    client: Client,
}

impl HttpEntryFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> ReaderResult<feed_rs::model::Feed> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;

        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> ReaderResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| ReaderError::FeedParse(e.to_string()))
    }

    fn entries_from_feed(feed: feed_rs::model::Feed) -> Vec<Entry> {
        feed.entries
            .into_iter()
            .map(|entry| {
                let id = entry.id;
                let title = entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string());

                let links: Vec<String> = entry.links.into_iter().map(|l| l.href).collect();

                let published = entry.published.or(entry.updated);

                Entry::new(id, title)
                    .with_links(links)
                    .with_published(published)
            })
            .collect()
    }

    /// Parse entries from raw feed bytes (used for testing)
    #[cfg(test)]
    fn entries_from_bytes(bytes: &[u8]) -> ReaderResult<Vec<Entry>> {
        Ok(Self::entries_from_feed(Self::parse_bytes(bytes)?))
    }
}

impl Default for HttpEntryFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl EntryFetcher for HttpEntryFetcher {
    fn fetch(&self, descriptor: &FeedDescriptor) -> ReaderResult<Vec<Entry>> {
        // Reject malformed URLs before issuing any request
        Url::parse(descriptor.url()).map_err(|e| ReaderError::InvalidUrl(e.to_string()))?;

        let feed = self.fetch_and_parse(descriptor.url())?;

        Ok(Self::entries_from_feed(feed))
    }
}
