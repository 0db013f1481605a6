//! Diagnoser - the error diagnosis engine facade.
//!
//! message -> classify -> locate + detect -> synthesize -> report.
//! Holds only immutable tables, so one instance can serve any number of
//! threads.

use crate::classifier::{Classifier, Classify};
use crate::config::EngineConfig;
use crate::context::ErrorContext;
use crate::detect::{detect_framework, detect_language};
use crate::error::{MedicError, Result};
use crate::location::extract_location;
use crate::patterns::PatternRegistry;
use crate::report::Report;
use crate::solutions::Synthesizer;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Diagnoser {
    classifier: Classifier,
    synthesizer: Synthesizer,
}

impl Diagnoser {
    /// Builtin patterns with the given fallback configuration
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(PatternRegistry::builtin(), config)
    }

    pub fn with_registry(registry: Arc<PatternRegistry>, config: EngineConfig) -> Self {
        Self {
            classifier: Classifier::new(registry),
            synthesizer: Synthesizer::new(config),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Classify and extract context. `aux` is accepted but not consulted.
    pub fn analyze(&self, message: &str, aux: Option<&Value>) -> ErrorContext {
        let kind = self.classifier.classify(message);
        let location = extract_location(message);
        let language = detect_language(message, aux);
        let framework = detect_framework(message, aux);
        debug!(
            kind = kind.as_str(),
            language = language.map(|l| l.as_str()),
            framework = framework.map(|f| f.as_str()),
            "analyzed message"
        );
        ErrorContext::new(message, kind, location, language, framework)
    }

    /// Remediation steps for a context, never empty
    pub fn suggest(&self, context: &ErrorContext) -> Vec<String> {
        self.synthesizer.synthesize(context)
    }

    pub fn report(&self, context: &ErrorContext) -> Report {
        Report::build(
            context,
            self.suggest(context),
            self.synthesizer.fallback_text(),
        )
    }

    /// Full pipeline on one message
    pub fn diagnose(&self, message: &str, aux: Option<&Value>) -> Report {
        let context = self.analyze(message, aux);
        self.report(&context)
    }

    /// Diagnose a loose request document `{ "message": "...", "context": ... }`.
    /// Rejects a missing or non-string message before any matching happens.
    pub fn diagnose_request(&self, request: &Value) -> Result<Report> {
        let object = request.as_object().ok_or_else(|| {
            MedicError::InvalidInput("request must be a JSON object".to_string())
        })?;
        let message = match object.get("message") {
            Some(Value::String(message)) => message,
            Some(Value::Null) | None => {
                return Err(MedicError::InvalidInput(
                    "missing required field 'message'".to_string(),
                ))
            }
            Some(other) => {
                return Err(MedicError::InvalidInput(format!(
                    "'message' must be a string, got {}",
                    json_type_name(other)
                )))
            }
        };
        Ok(self.diagnose(message, object.get("context")))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
