use crate::domain::FeedDescriptor;
use crate::errors::{ReaderError, ReaderResult};

/// Ordered collection of feed descriptors. The index is the addressing
/// scheme used by the loader, so insertion order is significant: new feeds
/// are appended at the end and become addressable at the highest index.
#[derive(Debug, Clone)]
pub struct FeedRegistry {
    feeds: Vec<FeedDescriptor>,
}

impl FeedRegistry {
    pub fn new() -> Self {
        Self { feeds: Vec::new() }
    }

    /// Registry seeded with the built-in subscriptions the widget starts
    /// with. Descriptors are static and known-valid, hence the unwraps.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.append(FeedDescriptor::new("Udacity Blog", "http://blog.udacity.com/feed").unwrap());
        registry.append(FeedDescriptor::new("CSS Tricks", "http://css-tricks.com/feed").unwrap());
        registry.append(
            FeedDescriptor::new("HTML5 Rocks", "http://feeds.feedburner.com/html5rocks").unwrap(),
        );
        registry.append(
            FeedDescriptor::new(
                "Linear Digressions",
                "http://feeds.feedburner.com/udacity-linear-digressions",
            )
            .unwrap(),
        );

        registry
    }

    /// Descriptor at `index`, or `OutOfRange` if the index is outside the
    /// current bounds.
    pub fn get(&self, index: usize) -> ReaderResult<&FeedDescriptor> {
        self.feeds.get(index).ok_or(ReaderError::OutOfRange {
            index,
            len: self.feeds.len(),
        })
    }

    /// Append a descriptor at the end. No deduplication: the same feed may
    /// be registered twice and each copy gets its own index.
    pub fn append(&mut self, descriptor: FeedDescriptor) {
        self.feeds.push(descriptor);
    }

    /// Remove and return the most recently appended descriptor.
    pub fn pop(&mut self) -> Option<FeedDescriptor> {
        self.feeds.pop()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedDescriptor> {
        self.feeds.iter()
    }
}

impl Default for FeedRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
