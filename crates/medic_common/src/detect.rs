//! Attribute Detectors
//!
//! Language and framework detection from fixed keyword indicator tables.
//! Both detectors share one algorithm: lower-case the message once, walk the
//! table in order, return the first label with any indicator present.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Programming language implicated by a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "javascript")]
    Javascript,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "swift")]
    Swift,
    #[serde(rename = "c++")]
    Cpp,
    #[serde(rename = "rust")]
    Rust,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::Swift => "swift",
            Language::Cpp => "c++",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Framework implicated by a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Django,
    Flask,
    Express,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Django => "django",
            Framework::Flask => "flask",
            Framework::Express => "express",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label -> lower-case substrings whose presence signals the label.
/// Entry order is match priority.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorTable<L: 'static> {
    entries: &'static [(L, &'static [&'static str])],
}

impl<L: Copy + 'static> IndicatorTable<L> {
    pub const fn new(entries: &'static [(L, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(L, &'static [&'static str])] {
        self.entries
    }

    /// First label whose indicator set has any member in `message`
    pub fn detect(&self, message: &str) -> Option<L> {
        let lower = message.to_lowercase();
        self.detect_lowered(&lower)
    }

    /// Same as [`detect`](Self::detect) for an already lower-cased message
    pub fn detect_lowered(&self, lower: &str) -> Option<L> {
        self.entries
            .iter()
            .find(|(_, indicators)| indicators.iter().any(|i| lower.contains(i)))
            .map(|(label, _)| *label)
    }
}

const LANGUAGE_ROWS: &[(Language, &[&str])] = &[
    (
        Language::Python,
        &["python", "pip", "traceback", "modulenotfounderror"],
    ),
    (
        Language::Javascript,
        &["node", "npm", "webpack", "unexpected token"],
    ),
    (
        Language::Java,
        &["java", "javac", "cannot find symbol", "classnotfoundexception"],
    ),
    (Language::Swift, &["swift", "xcode", "cannot find in scope"]),
    (Language::Cpp, &["g++", "clang++", "undefined reference"]),
    (Language::Rust, &["rustc", "cargo", "cannot find crate"]),
];

pub const LANGUAGE_INDICATORS: IndicatorTable<Language> = IndicatorTable::new(LANGUAGE_ROWS);

const FRAMEWORK_ROWS: &[(Framework, &[&str])] = &[
    (Framework::React, &["react", "jsx", "component"]),
    (Framework::Vue, &["vue", "vue-cli"]),
    (Framework::Angular, &["angular", "ng"]),
    (Framework::Django, &["django", "manage.py"]),
    (Framework::Flask, &["flask", "werkzeug"]),
    (Framework::Express, &["express", "middleware"]),
];

pub const FRAMEWORK_INDICATORS: IndicatorTable<Framework> = IndicatorTable::new(FRAMEWORK_ROWS);

/// Detect the language of a message.
///
/// `_aux` is accepted for callers that carry extra context; it is not
/// consulted, so hints passed there never override the keyword table.
pub fn detect_language(message: &str, _aux: Option<&serde_json::Value>) -> Option<Language> {
    LANGUAGE_INDICATORS.detect(message)
}

/// Detect the framework of a message. `_aux` is ignored, see [`detect_language`].
pub fn detect_framework(message: &str, _aux: Option<&serde_json::Value>) -> Option<Framework> {
    FRAMEWORK_INDICATORS.detect(message)
}
