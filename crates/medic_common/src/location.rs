//! Location Extractor
//!
//! Pulls a (path, line) reference out of compiler, interpreter and
//! stack-trace style messages.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Location shapes, tried in order. Group 1 is the path, group 2 the line.
/// Line groups are ASCII-only so every captured run parses as a number.
static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // main.c:12: / foo.py:42:
        r"([^\s:]+):([0-9]+):",
        // File "main.py", line 7
        r#"File "([^"]+)", line ([0-9]+)"#,
        // at src/app.js:10:
        r"at ([^\s:]+):([0-9]+):",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("builtin location pattern compiles"))
    .collect()
});

/// Source location referenced by a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: Option<String>,
    pub line: Option<u64>,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.line.is_none()
    }
}

/// First location shape that matches anywhere in `message`.
/// A line number too large for `u64` is dropped, the path is kept.
pub fn extract_location(message: &str) -> Location {
    for pattern in LOCATION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(message) {
            return Location {
                file: caps.get(1).map(|m| m.as_str().to_string()),
                line: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            };
        }
    }
    Location::default()
}
