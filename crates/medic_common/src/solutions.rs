//! Solution Synthesizer
//!
//! Per-kind handlers turn a classified context into remediation steps.
//! Handlers are pure; an empty handler result means "use the fallback".

use crate::config::EngineConfig;
use crate::context::ErrorContext;
use crate::detect::Language;
use crate::error_kind::ErrorKind;
use tracing::debug;

const LINKAGE_SOLUTIONS: &[&str] = &[
    "Check if all required libraries are linked",
    "Verify function declarations match implementations",
    "Ensure all object files are included in build",
];

const SYMBOL_SOLUTIONS: &[&str] = &[
    "Check import statements and package declarations",
    "Verify class/method names are spelled correctly",
    "Ensure required dependencies are in classpath",
];

const COMPILATION_GENERIC: &[&str] = &["Review compilation flags and include paths"];

const PYTHON_SYNTAX_SOLUTIONS: &[&str] = &[
    "Check indentation consistency (tabs vs spaces)",
    "Verify parentheses, brackets, and quotes are balanced",
    "Review syntax for Python version compatibility",
];

const JAVASCRIPT_SYNTAX_SOLUTIONS: &[&str] = &[
    "Check for missing semicolons or commas",
    "Verify bracket and parentheses matching",
    "Review variable declarations and scoping",
];

const PYTHON_DEPENDENCY_SOLUTIONS: &[&str] = &[
    "Install missing package: pip install <package_name>",
    "Check virtual environment activation",
    "Verify PYTHONPATH includes module location",
];

const JAVASCRIPT_DEPENDENCY_SOLUTIONS: &[&str] = &[
    "Install missing package: npm install <package_name>",
    "Check package.json dependencies",
    "Clear npm cache: npm cache clean --force",
];

const NETWORK_SOLUTIONS: &[&str] = &[
    "Check internet connectivity",
    "Verify firewall settings",
    "Test with different network or VPN",
    "Check if service/API is accessible",
];

const PERMISSION_SOLUTIONS: &[&str] = &[
    "Run with appropriate permissions (sudo if needed)",
    "Check file/directory ownership and permissions",
    "Verify user has access to required resources",
    "Review security policies and access controls",
];

/// Handler output for `context`. May be empty: fallback kinds have no
/// handler, and the syntax/dependency handlers only know python and javascript.
pub fn handler_solutions(context: &ErrorContext) -> &'static [&'static str] {
    match context.kind() {
        ErrorKind::Compilation => compilation_solutions(context.message()),
        ErrorKind::Syntax => match context.language() {
            Some(Language::Python) => PYTHON_SYNTAX_SOLUTIONS,
            Some(Language::Javascript) => JAVASCRIPT_SYNTAX_SOLUTIONS,
            _ => &[],
        },
        ErrorKind::Dependency => match context.language() {
            Some(Language::Python) => PYTHON_DEPENDENCY_SOLUTIONS,
            Some(Language::Javascript) => JAVASCRIPT_DEPENDENCY_SOLUTIONS,
            _ => &[],
        },
        ErrorKind::Network => NETWORK_SOLUTIONS,
        ErrorKind::Permission => PERMISSION_SOLUTIONS,
        ErrorKind::Runtime | ErrorKind::Configuration => &[],
    }
}

/// Case-sensitive, like the tool output it inspects
fn compilation_solutions(message: &str) -> &'static [&'static str] {
    if message.contains("undefined reference") {
        LINKAGE_SOLUTIONS
    } else if message.contains("cannot find symbol") {
        SYMBOL_SOLUTIONS
    } else {
        COMPILATION_GENERIC
    }
}

/// Dispatches to handlers and substitutes the configured fallback
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: EngineConfig,
}

impl Synthesizer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn fallback_text(&self) -> &str {
        &self.config.fallback_text
    }

    /// Ordered remediation steps, never empty
    pub fn synthesize(&self, context: &ErrorContext) -> Vec<String> {
        let solutions = handler_solutions(context);
        if solutions.is_empty() {
            debug!(kind = context.kind().as_str(), "no handler output, using fallback");
            return vec![self.config.fallback_text.clone()];
        }
        solutions.iter().map(|s| s.to_string()).collect()
    }
}
