use std::io::Write;

use super::types::{Entry, Feed};

/// Lines of the text view: the feed title, then one line per entry.
///
/// The iterator is lazy and `Clone`, so a cloned copy restarts from the title.
pub fn render(feed: &Feed) -> impl Iterator<Item = String> + Clone + '_ {
    std::iter::once(feed.title.clone()).chain(feed.entries.iter().map(entry_line))
}

pub fn write_feed<W: Write>(feed: &Feed, mut writer: W) -> std::io::Result<()> {
    for line in render(feed) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

fn entry_line(entry: &Entry) -> String {
    format!("  {} posted on {}", entry.title, entry.updated)
}
