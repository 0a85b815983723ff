use serde::Serialize;

use crate::domain::FeedDescriptor;
use crate::errors::ReaderResult;
use crate::fetch::EntryFetcher;
use crate::menu::MenuVisibility;
use crate::registry::FeedRegistry;
use crate::render::ContentPane;
use crate::services::loader::{LoadPhase, LoadPolicy, Loader};

/// Summary of one completed load cycle.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub index: usize,
    pub feed: String,
    pub rendered: usize,
}

/// The widget: owns the registry, the content pane, the menu state and the
/// loader. Loads go through `&mut self`, so sequentially issued loads are
/// strictly ordered and overlapping loads cannot exist; callers that need a
/// shared handle wrap the reader in `Arc<tokio::sync::Mutex<_>>`.
pub struct FeedReader<F: EntryFetcher> {
    registry: FeedRegistry,
    pane: ContentPane,
    menu: MenuVisibility,
    loader: Loader<F>,
}

impl<F: EntryFetcher + 'static> FeedReader<F> {
    pub fn new(registry: FeedRegistry, fetcher: F, policy: LoadPolicy) -> Self {
        Self {
            registry,
            pane: ContentPane::new(),
            menu: MenuVisibility::default(),
            loader: Loader::new(fetcher, policy),
        }
    }

    /// Bring the widget up: load the first registered feed.
    pub async fn init(&mut self) -> ReaderResult<LoadReport> {
        self.load(0).await
    }

    /// Run one load cycle for the feed at `index`. The index is resolved
    /// before the first await point, so an invalid index fails without any
    /// fetch being issued and with the pane untouched.
    pub async fn load(&mut self, index: usize) -> ReaderResult<LoadReport> {
        let descriptor = self.registry.get(index)?.clone();
        let rendered = self.loader.load(&descriptor, &mut self.pane).await?;

        Ok(LoadReport {
            index,
            feed: descriptor.name().to_string(),
            rendered,
        })
    }

    /// Register a new feed at the end of the registry.
    pub fn add_feed(&mut self, descriptor: FeedDescriptor) {
        self.registry.append(descriptor);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn registry(&self) -> &FeedRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FeedRegistry {
        &mut self.registry
    }

    pub fn pane(&self) -> &ContentPane {
        &self.pane
    }

    pub fn menu(&self) -> MenuVisibility {
        self.menu
    }

    pub fn phase(&self) -> LoadPhase {
        self.loader.phase()
    }
}
