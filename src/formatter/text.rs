use std::io::Write;

use crate::formatter::Formatter;
use crate::record::MatchRecord;

/// grep-shaped `path:line:text` output, no summary line.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, records: &[MatchRecord], _file_count: usize, out: &mut dyn Write) {
        for record in records {
            let _ = writeln!(out, "{record}");
        }
    }
}
