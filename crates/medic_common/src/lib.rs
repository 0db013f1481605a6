//! Medic common library - error diagnosis engine.
//!
//! Classifies raw tool output (compiler, package manager, test runner, HTTP
//! client) into an error kind, extracts location and language/framework
//! attributes, and synthesizes ordered remediation steps.

pub mod classifier;
pub mod config;
pub mod context;
pub mod detect;
pub mod engine;
pub mod error;
pub mod error_kind;
pub mod fix_plan;
pub mod location;
pub mod patterns;
pub mod report;
pub mod solutions;
pub mod terminal;

pub use classifier::{Classifier, Classify};
pub use config::{EngineConfig, MedicConfig, MINIMAL_FALLBACK, VERBOSE_FALLBACK};
pub use context::ErrorContext;
pub use detect::{detect_framework, detect_language, Framework, Language};
pub use engine::Diagnoser;
pub use error::MedicError;
pub use error_kind::ErrorKind;
pub use location::{extract_location, Location};
pub use patterns::{PatternRegistry, PatternRule};
pub use report::{Report, NEXT_STEPS};
pub use solutions::Synthesizer;
pub use terminal::{diagnose_terminal, TerminalClassifier, TerminalDiagnosis, TerminalIssue};
