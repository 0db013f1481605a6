//! Error context - the classified view of one message.

use crate::detect::{Framework, Language};
use crate::error_kind::ErrorKind;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// Everything the engine learned about a message.
/// Fields are private so a context cannot change after analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    message: String,
    kind: ErrorKind,
    location: Location,
    language: Option<Language>,
    framework: Option<Framework>,
}

impl ErrorContext {
    pub fn new(
        message: impl Into<String>,
        kind: ErrorKind,
        location: Location,
        language: Option<Language>,
        framework: Option<Framework>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            location,
            language,
            framework,
        }
    }

    /// Context with only a message and kind, as produced by the coarse classifier
    pub fn bare(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self::new(message, kind, Location::default(), None, None)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn file(&self) -> Option<&str> {
        self.location.file.as_deref()
    }

    pub fn line(&self) -> Option<u64> {
        self.location.line
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn framework(&self) -> Option<Framework> {
        self.framework
    }
}
