use crate::domain::{Entry, FeedDescriptor};
use crate::errors::ReaderResult;

/// Transport seam for the load cycle: given a descriptor, retrieve and parse
/// its entries. The call may block; the loader runs it off the async thread.
#[cfg_attr(test, mockall::automock)]
pub trait EntryFetcher: Send + Sync {
    fn fetch(&self, descriptor: &FeedDescriptor) -> ReaderResult<Vec<Entry>>;
}
