use feedpane::domain::{Entry, FeedDescriptor};
use feedpane::errors::{ReaderError, ReaderResult};
use feedpane::fetch::EntryFetcher;
use feedpane::registry::FeedRegistry;
use feedpane::services::{FeedReader, LoadPhase, LoadPolicy};

/// Deterministic in-memory transport: every feed yields two entries derived
/// from its name, so the same index always renders identically and distinct
/// indexes render differently.
struct ScriptedFetcher;

impl EntryFetcher for ScriptedFetcher {
    fn fetch(&self, descriptor: &FeedDescriptor) -> ReaderResult<Vec<Entry>> {
        let name = descriptor.name();
        Ok(vec![
            Entry::new(format!("{name}-1"), format!("{name}: first story"))
                .with_links(vec![format!("{}/1", descriptor.url())]),
            Entry::new(format!("{name}-2"), format!("{name}: second story")),
        ])
    }
}

struct FailingFetcher;

impl EntryFetcher for FailingFetcher {
    fn fetch(&self, _descriptor: &FeedDescriptor) -> ReaderResult<Vec<Entry>> {
        Err(ReaderError::FeedParse("connection reset".to_string()))
    }
}

fn reader() -> FeedReader<ScriptedFetcher> {
    FeedReader::new(
        FeedRegistry::with_defaults(),
        ScriptedFetcher,
        LoadPolicy::default(),
    )
}

#[test]
fn registry_is_seeded_and_well_formed() {
    let reader = reader();

    assert!(!reader.registry().is_empty());
    for descriptor in reader.registry().iter() {
        assert!(!descriptor.name().is_empty());
        assert!(!descriptor.url().is_empty());
    }
}

#[test]
fn menu_is_hidden_by_default() {
    let reader = reader();
    assert!(reader.menu().is_hidden());
}

#[test]
fn menu_displays_when_toggled_and_hides_again() {
    let mut reader = reader();

    reader.toggle_menu();
    assert!(!reader.menu().is_hidden());

    reader.toggle_menu();
    assert!(reader.menu().is_hidden());
}

#[tokio::test]
async fn initial_load_renders_at_least_one_entry() {
    let mut reader = reader();

    reader.init().await.unwrap();

    assert!(reader.pane().len() >= 1);
    assert_eq!(reader.phase(), LoadPhase::Complete);
}

#[tokio::test]
async fn reloading_the_same_feed_replaces_identical_content() {
    let mut reader = reader();

    reader.load(1).await.unwrap();
    let content_after_first_load = reader.pane().html();
    let removals_after_first_load = reader.pane().removals();

    reader.load(1).await.unwrap();
    let content_after_second_load = reader.pane().html();

    // Same feed, same rendering, yet the pane was really torn down and
    // rebuilt: nodes were removed between the two loads.
    assert_eq!(content_after_first_load, content_after_second_load);
    assert!(reader.pane().removals() > removals_after_first_load);

    reader.load(0).await.unwrap();
    let content_after_third_load = reader.pane().html();

    assert_ne!(content_after_second_load, content_after_third_load);
}

#[tokio::test]
async fn added_feed_grows_registry_and_loads() {
    let mut reader = reader();
    let before = reader.registry().len();

    let xkcd = FeedDescriptor::new("XKCD", "http://xkcd.com/rss.xml").unwrap();
    reader.add_feed(xkcd.clone());

    assert_eq!(reader.registry().len(), before + 1);
    assert_eq!(reader.registry().get(before).unwrap(), &xkcd);

    let report = reader.load(before).await.unwrap();
    assert_eq!(report.feed, "XKCD");
    assert!(reader.pane().len() >= 1);

    // Popping the appended feed restores the prior size and yields it back
    let popped = reader.registry_mut().pop().unwrap();
    assert_eq!(popped, xkcd);
    assert_eq!(reader.registry().len(), before);
}

#[tokio::test]
async fn out_of_range_load_fails_without_touching_pane() {
    let mut reader = reader();

    reader.load(0).await.unwrap();
    let before = reader.pane().html();

    let err = reader.load(reader.registry().len()).await.unwrap_err();
    assert!(matches!(err, ReaderError::OutOfRange { .. }));
    assert_eq!(reader.pane().html(), before);
}

#[tokio::test]
async fn failed_load_still_completes_and_keeps_previous_pane() {
    let mut reader = FeedReader::new(
        FeedRegistry::with_defaults(),
        FailingFetcher,
        LoadPolicy::default(),
    );

    // The future resolves even though the fetch failed: callers never hang.
    let err = reader.load(0).await.unwrap_err();
    assert!(matches!(err, ReaderError::FeedParse(_)));
    assert_eq!(reader.phase(), LoadPhase::Failed);
    assert!(reader.pane().is_empty());
}
