//! Report Builder
//!
//! Assembles classifier, extractor, detector and synthesizer output into one
//! serializable report. Deterministic: same context, same report.

use crate::context::ErrorContext;
use crate::detect::{Framework, Language};
use crate::error_kind::ErrorKind;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// Trailing steps, identical on every report
pub const NEXT_STEPS: [&str; 3] = [
    "Apply suggested solutions in order of likelihood",
    "Test each solution incrementally",
    "Document successful resolution for future reference",
];

/// Language and framework attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeContext {
    pub language: Option<Language>,
    pub framework: Option<Framework>,
}

/// Complete output of one diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Location,
    pub context: AttributeContext,
    pub suggested_solutions: Vec<String>,
    pub next_steps: Vec<String>,
}

impl Report {
    /// Build a report. An empty `solutions` list is replaced by `fallback`
    /// so a report never carries zero solutions. The caller picks the text,
    /// usually [`EngineConfig::fallback_text`](crate::EngineConfig).
    pub fn build(context: &ErrorContext, mut solutions: Vec<String>, fallback: &str) -> Self {
        if solutions.is_empty() {
            solutions.push(fallback.to_string());
        }
        Self {
            kind: context.kind(),
            message: context.message().to_string(),
            location: context.location().clone(),
            context: AttributeContext {
                language: context.language(),
                framework: context.framework(),
            },
            suggested_solutions: solutions,
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind.as_str(),
            "message": self.message,
            "location": {
                "file": self.location.file,
                "line": self.location.line,
            },
            "context": {
                "language": self.context.language.map(|l| l.as_str()),
                "framework": self.context.framework.map(|f| f.as_str()),
            },
            "suggested_solutions": self.suggested_solutions,
            "next_steps": self.next_steps,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MINIMAL_FALLBACK, VERBOSE_FALLBACK};

    #[test]
    fn test_empty_solutions_replaced() {
        let ctx = ErrorContext::bare("boom", ErrorKind::Runtime);
        let report = Report::build(&ctx, Vec::new(), VERBOSE_FALLBACK);
        assert_eq!(report.suggested_solutions, vec![VERBOSE_FALLBACK.to_string()]);

        let report = Report::build(&ctx, Vec::new(), MINIMAL_FALLBACK);
        assert_eq!(report.suggested_solutions, vec![MINIMAL_FALLBACK.to_string()]);

        let report = Report::build(&ctx, Vec::new(), "look it up");
        assert_eq!(report.suggested_solutions, vec!["look it up".to_string()]);

        // A non-empty list is kept as is
        let report = Report::build(&ctx, vec!["retry".to_string()], "look it up");
        assert_eq!(report.suggested_solutions, vec!["retry".to_string()]);
    }

    #[test]
    fn test_next_steps_fixed() {
        let ctx = ErrorContext::bare("boom", ErrorKind::Network);
        let report = Report::build(&ctx, vec!["retry".to_string()], VERBOSE_FALLBACK);
        assert_eq!(report.next_steps, NEXT_STEPS.to_vec());
    }

    #[test]
    fn test_json_shape_has_nulls() {
        let ctx = ErrorContext::bare("boom", ErrorKind::Runtime);
        let json = Report::build(&ctx, Vec::new(), VERBOSE_FALLBACK).to_json();
        assert_eq!(json["kind"], "runtime");
        assert!(json["location"]["file"].is_null());
        assert!(json["location"]["line"].is_null());
        assert!(json["context"]["language"].is_null());
        assert_eq!(json["next_steps"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_serde_matches_to_json() {
        let ctx = ErrorContext::new(
            "foo.py:3: x",
            ErrorKind::Syntax,
            Location {
                file: Some("foo.py".to_string()),
                line: Some(3),
            },
            Some(Language::Python),
            Some(Framework::Flask),
        );
        let report = Report::build(&ctx, vec!["a".to_string()], VERBOSE_FALLBACK);
        let via_serde = serde_json::to_value(&report).unwrap();
        assert_eq!(via_serde, report.to_json());

        let back: Report = serde_json::from_value(via_serde).unwrap();
        assert_eq!(back, report);
    }
}
