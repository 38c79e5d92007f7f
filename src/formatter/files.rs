use std::collections::HashSet;
use std::io::Write;

use crate::formatter::Formatter;
use crate::record::MatchRecord;

/// Unique matching paths, in order of first match.
pub struct FilesFormatter;

impl Formatter for FilesFormatter {
    fn format_to(&self, records: &[MatchRecord], _file_count: usize, out: &mut dyn Write) {
        let mut seen = HashSet::new();
        for record in records {
            if seen.insert(record.path.as_str()) {
                let _ = writeln!(out, "{}", record.path);
            }
        }
    }
}
