//! Rendering of records as indented structured text.

use serde::{Deserialize, Serialize};
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::SeriesRecord;

/// Display settings for record listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Spaces per indentation level
    #[serde(default = "DisplayConfig::default_indent")]
    pub indent: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent: Self::default_indent(),
        }
    }
}

impl DisplayConfig {
    const fn default_indent() -> usize {
        4
    }

    /// Render a single record as an indented object.
    #[must_use]
    pub fn render_record(&self, record: &SeriesRecord) -> String {
        self.render(record)
    }

    /// Render a listing as an indented array, in the order given.
    #[must_use]
    pub fn render_records(&self, records: &[&SeriesRecord]) -> String {
        self.render(records)
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let indent = " ".repeat(self.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        // Records hold only strings, integers and finite floats.
        if value.serialize(&mut serializer).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}
