use serde::Serialize;

use crate::errors::{ReaderError, ReaderResult};

/// One subscribable source: a display name plus the URL its content is
/// retrieved from. Both fields are guaranteed non-empty; the only way to
/// build a descriptor is through [`FeedDescriptor::new`], so the registry
/// never has to re-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedDescriptor {
    name: String,
    url: String,
}

impl FeedDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> ReaderResult<Self> {
        let name = name.into();
        let url = url.into();

        if name.trim().is_empty() {
            return Err(ReaderError::InvalidDescriptor(
                "feed name must not be empty".to_string(),
            ));
        }
        if url.trim().is_empty() {
            return Err(ReaderError::InvalidDescriptor(format!(
                "feed '{}' has an empty url",
                name
            )));
        }

        Ok(Self { name, url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for FeedDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}
