use std::io::Write;

use crate::formatter::Formatter;
use crate::record::MatchRecord;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_to(&self, records: &[MatchRecord], file_count: usize, out: &mut dyn Write) {
        let output = serde_json::json!({
            "metadata": {
                "files_searched": file_count,
                "match_count": records.len(),
            },
            "matches": records.iter().map(|r| {
                serde_json::json!({
                    "path": r.path,
                    "line": r.line,
                    "text": r.text,
                })
            }).collect::<Vec<_>>(),
        });
        let rendered = serde_json::to_string_pretty(&output).unwrap_or_default();
        let _ = writeln!(out, "{rendered}");
    }
}
