//! Delimited text parsing.

use paint_core::RawRecord;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses a header-first delimited table into records.
///
/// The first line names the columns; every following line becomes one
/// `RawRecord`, matched to the headers by position. Missing trailing fields
/// become empty strings and surplus fields are ignored. Each header and field
/// is trimmed and loses one pair of wrapping double quotes.
///
/// # Limitations
///
/// Quoting is cosmetic only: a delimiter inside a quoted field still splits
/// the field, and escaped quotes (`""`) are left as-is. Sheets whose cells
/// contain the delimiter should be exported with a different one.
#[derive(Debug, Clone, Copy)]
pub struct RowParser {
    delimiter: char,
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new(',')
    }
}

impl RowParser {
    /// Create a parser splitting on `delimiter`.
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse `text` into records. Empty input yields no records.
    pub fn parse(&self, text: &str) -> Vec<RawRecord> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut lines = text.lines();

        let headers = match lines.next() {
            Some(line) => self.split(line),
            None => return Vec::new(),
        };

        lines
            .map(|line| {
                let mut fields = self.split(line).into_iter();
                headers
                    .iter()
                    .map(|header| (header.clone(), fields.next().unwrap_or_default()))
                    .collect::<RawRecord>()
            })
            .collect()
    }

    fn split(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter).map(clean_field).collect()
    }
}

/// Trim whitespace, then strip one pair of wrapping double quotes.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
