//! ExportFormat trait definition

use crate::ranking::RankedEntry;

/// A way of laying out ranked board entries.
///
/// Line-oriented: an optional header, one line per entry, then an optional
/// footer computed from the whole entry set.
pub trait ExportFormat {
    /// Column titles, if the layout has any
    fn header(&self) -> Option<String>;

    fn format_entry(&self, entry: &RankedEntry) -> String;

    /// Closing line summarizing `entries`
    fn footer(&self, _entries: &[RankedEntry]) -> Option<String> {
        None
    }

    fn format_entries(&self, entries: &[RankedEntry]) -> String {
        let lines = self
            .header()
            .into_iter()
            .chain(entries.iter().map(|entry| self.format_entry(entry)))
            .chain(self.footer(entries));

        lines.fold(String::new(), |mut output, line| {
            output.push_str(&line);
            output.push('\n');
            output
        })
    }
}
