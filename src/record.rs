use std::fmt;

/// One reported match: the source line of a node whose derived strings
/// matched the pattern. At most one record is produced per (path, line)
/// pair in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub path: String,
    /// 1-indexed line number
    pub line: usize,
    /// The exact text of the matched source line, without its newline.
    pub text: String,
}

impl MatchRecord {
    pub fn sort_key(&self) -> (&str, usize) {
        (&self.path, self.line)
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_grep_shaped() {
        let r = MatchRecord {
            path: "app/config.py".to_string(),
            line: 12,
            text: "def load_config():".to_string(),
        };
        assert_eq!(format!("{r}"), "app/config.py:12:def load_config():");
    }

    #[test]
    fn sort_key_orders_by_path_then_line() {
        let r1 = MatchRecord {
            path: "a.py".to_string(),
            line: 1,
            text: "x".to_string(),
        };
        let r2 = MatchRecord {
            path: "a.py".to_string(),
            line: 9,
            text: "y".to_string(),
        };
        let r3 = MatchRecord {
            path: "b.py".to_string(),
            line: 1,
            text: "z".to_string(),
        };
        assert!(r1.sort_key() < r2.sort_key());
        assert!(r2.sort_key() < r3.sort_key());
    }

    #[test]
    fn display_keeps_empty_line_text() {
        let r = MatchRecord {
            path: "a.py".to_string(),
            line: 3,
            text: String::new(),
        };
        assert_eq!(format!("{r}"), "a.py:3:");
    }
}
