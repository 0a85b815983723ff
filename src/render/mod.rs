use serde::Serialize;

use crate::domain::Entry;

/// One rendered content node, derived deterministically from an [`Entry`]:
/// the same entry always renders to the same markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub title: String,
    pub link: Option<String>,
    pub markup: String,
}

impl RenderedEntry {
    pub fn from_entry(entry: &Entry) -> Self {
        let title = entry.title.clone();
        let link = entry.link().map(|l| l.to_string());

        let mut markup = String::from("<article class=\"entry\">");
        markup.push_str(&format!("<h2>{}</h2>", escape(&title)));
        if let Some(ref link) = link {
            markup.push_str(&format!("<a href=\"{}\">{}</a>", escape(link), escape(link)));
        }
        if let Some(published) = entry.published {
            let stamp = published.to_rfc3339();
            markup.push_str(&format!("<time datetime=\"{stamp}\">{stamp}</time>"));
        }
        markup.push_str("</article>");

        Self { title, link, markup }
    }
}

/// Render a batch of entries in the order received.
pub fn render_entries(entries: &[Entry]) -> Vec<RenderedEntry> {
    entries.iter().map(RenderedEntry::from_entry).collect()
}

/// The rendered content container. Only the loader writes to it, and only
/// through [`ContentPane::swap_in`]: the previous entries are removed and the
/// new ones inserted as a single operation, so no reader ever sees a
/// cleared-but-not-yet-repopulated pane.
///
/// `removals`/`insertions` count structural mutations across the pane's
/// lifetime. They let an observer distinguish "the pane was really replaced
/// with identical content" from "nothing happened", which plain content
/// comparison cannot.
#[derive(Debug, Default)]
pub struct ContentPane {
    entries: Vec<RenderedEntry>,
    removals: u64,
    insertions: u64,
}

impl ContentPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pane contents with `entries`. Every node previously held
    /// is counted as removed and every new node as inserted, even when the
    /// rendered content is byte-identical.
    pub fn swap_in(&mut self, entries: Vec<RenderedEntry>) {
        self.removals += self.entries.len() as u64;
        self.insertions += entries.len() as u64;
        self.entries = entries;
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn removals(&self) -> u64 {
        self.removals
    }

    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    /// Full markup of the pane, suitable for content comparison between
    /// loads.
    pub fn html(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.markup.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, title: &str) -> Entry {
        Entry::new(id.to_string(), title.to_string())
            .with_links(vec![format!("http://example.com/{id}")])
    }

    #[test]
    fn test_pane_starts_empty() {
        let pane = ContentPane::new();
        assert!(pane.is_empty());
        assert_eq!(pane.removals(), 0);
        assert_eq!(pane.insertions(), 0);
    }

    #[test]
    fn test_swap_in_counts_mutations() {
        let mut pane = ContentPane::new();

        pane.swap_in(render_entries(&[entry("1", "First"), entry("2", "Second")]));
        assert_eq!(pane.len(), 2);
        assert_eq!(pane.removals(), 0);
        assert_eq!(pane.insertions(), 2);

        pane.swap_in(render_entries(&[entry("1", "First"), entry("2", "Second")]));
        assert_eq!(pane.removals(), 2);
        assert_eq!(pane.insertions(), 4);
    }

    #[test]
    fn test_identical_entries_render_identically() {
        let mut pane = ContentPane::new();

        pane.swap_in(render_entries(&[entry("1", "First")]));
        let first = pane.html();

        pane.swap_in(render_entries(&[entry("1", "First")]));
        let second = pane.html();

        assert_eq!(first, second);
        assert!(pane.removals() > 0);
    }

    #[test]
    fn test_different_entries_render_differently() {
        let mut pane = ContentPane::new();

        pane.swap_in(render_entries(&[entry("1", "First")]));
        let first = pane.html();

        pane.swap_in(render_entries(&[entry("2", "Second")]));
        let second = pane.html();

        assert_ne!(first, second);
    }

    #[test]
    fn test_markup_escapes_text() {
        let e = Entry::new("1".to_string(), "Tom & <Jerry>".to_string());
        let rendered = RenderedEntry::from_entry(&e);
        assert!(rendered.markup.contains("Tom &amp; &lt;Jerry&gt;"));
    }

    #[test]
    fn test_markup_includes_published() {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let e = entry("1", "First").with_published(Some(stamp));
        let rendered = RenderedEntry::from_entry(&e);
        assert!(rendered.markup.contains("<time"));
        assert!(rendered.markup.contains("2024-01-15"));
    }
}
