use std::sync::Arc;
use std::time::Duration;

use crate::domain::FeedDescriptor;
use crate::errors::{ReaderError, ReaderResult};
use crate::fetch::EntryFetcher;
use crate::render::{render_entries, ContentPane};

/// What to do with the pane when a load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Keep the previous completed load on screen.
    KeepPrevious,
    /// Swap the pane to empty.
    Clear,
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(ErrorPolicy::KeepPrevious),
            "clear" => Ok(ErrorPolicy::Clear),
            _ => Err(format!("Unknown error policy: {} (expected keep|clear)", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadPolicy {
    /// Upper bound on a single fetch. A hung transport surfaces as
    /// [`ReaderError::Timeout`] instead of hanging the caller.
    pub timeout: Duration,
    pub on_error: ErrorPolicy,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            on_error: ErrorPolicy::KeepPrevious,
        }
    }
}

/// Where the most recent load cycle got to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Fetching,
    Rendering,
    Complete,
    Failed,
}

/// Runs one load cycle: fetch the descriptor's entries off the async thread,
/// render them, swap them into the pane, resolve. The returned future
/// resolving is the completion signal; it always resolves, success or not.
pub struct Loader<F: EntryFetcher> {
    fetcher: Arc<F>,
    policy: LoadPolicy,
    phase: LoadPhase,
}

impl<F: EntryFetcher + 'static> Loader<F> {
    pub fn new(fetcher: F, policy: LoadPolicy) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            policy,
            phase: LoadPhase::Idle,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn policy(&self) -> &LoadPolicy {
        &self.policy
    }

    /// Fetch `descriptor` and replace the pane contents with its rendered
    /// entries. The pane is written exactly once, after rendering is done;
    /// on failure it is either left as-is or cleared, per [`ErrorPolicy`].
    pub async fn load(
        &mut self,
        descriptor: &FeedDescriptor,
        pane: &mut ContentPane,
    ) -> ReaderResult<usize> {
        self.phase = LoadPhase::Fetching;
        tracing::debug!("fetching {}", descriptor);

        let fetcher = Arc::clone(&self.fetcher);
        let target = descriptor.clone();
        let handle = tokio::task::spawn_blocking(move || fetcher.fetch(&target));

        // On timeout the blocking task is left to finish in the background;
        // its result is discarded.
        let fetched = match tokio::time::timeout(self.policy.timeout, handle).await {
            Err(_) => Err(ReaderError::Timeout(self.policy.timeout.as_secs())),
            Ok(Err(join)) => Err(ReaderError::Internal(format!("fetch task failed: {join}"))),
            Ok(Ok(result)) => result,
        };

        let entries = match fetched {
            Ok(entries) => entries,
            Err(e) => {
                self.phase = LoadPhase::Failed;
                tracing::warn!("load of {} failed: {}", descriptor.name(), e);
                if self.policy.on_error == ErrorPolicy::Clear {
                    pane.swap_in(Vec::new());
                }
                return Err(e);
            }
        };

        self.phase = LoadPhase::Rendering;
        let rendered = render_entries(&entries);
        let count = rendered.len();
        pane.swap_in(rendered);

        self.phase = LoadPhase::Complete;
        tracing::debug!("rendered {} entries from {}", count, descriptor.name());
        Ok(count)
    }
}
