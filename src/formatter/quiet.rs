use std::io::Write;

use crate::formatter::Formatter;
use crate::record::MatchRecord;

/// No output; callers use the exit code.
pub struct QuietFormatter;

impl Formatter for QuietFormatter {
    fn format_to(&self, _records: &[MatchRecord], _file_count: usize, _out: &mut dyn Write) {}
}
