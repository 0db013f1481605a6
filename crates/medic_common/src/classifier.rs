//! Classifier - maps a raw message onto exactly one error kind.
//!
//! Total by construction: every input, including the empty string, yields a
//! kind. Unmatched messages fall back to `Runtime`.

use crate::error_kind::ErrorKind;
use crate::patterns::PatternRegistry;
use std::sync::Arc;
use tracing::debug;

/// Matching strategy seam. Callers depend on this, not on regexes.
pub trait Classify {
    fn classify(&self, message: &str) -> ErrorKind;
}

/// Primary classifier over an ordered pattern registry
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<PatternRegistry>,
}

impl Classifier {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(PatternRegistry::builtin())
    }
}

impl Classify for Classifier {
    /// Earliest rule with any hit wins, even when a later rule would match
    /// more specifically.
    fn classify(&self, message: &str) -> ErrorKind {
        for rule in self.registry.rules() {
            if let Some(pattern) = rule.first_match(message) {
                debug!(kind = rule.kind.as_str(), pattern = pattern.as_str(), "classified");
                return rule.kind;
            }
        }
        debug!("no pattern matched, falling back to runtime");
        ErrorKind::Runtime
    }
}
