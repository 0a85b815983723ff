use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One content item retrieved from a feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub links: Vec<String>,
    pub published: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            links: Vec::new(),
            published: None,
        }
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }

    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }

    /// Primary link for the entry, when the feed provided one.
    pub fn link(&self) -> Option<&str> {
        self.links.first().map(|l| l.as_str())
    }
}
