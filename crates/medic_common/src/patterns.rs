//! Pattern Registry
//!
//! Ordered mapping from error kind to the regular expressions that signal it.
//! Built once per process and never mutated afterwards.

use crate::error::Result;
use crate::error_kind::ErrorKind;
use regex::{Regex, RegexBuilder};
use std::sync::{Arc, LazyLock};

/// Builtin pattern text, in classifier priority order.
/// `error:` is anchored at a word boundary so exception names such as
/// `ModuleNotFoundError:` reach their own kind.
const BUILTIN_RULES: &[(ErrorKind, &[&str])] = &[
    (
        ErrorKind::Compilation,
        &[
            r"\berror: (.+)",
            r"fatal error: (.+)",
            r"undefined reference to (.+)",
            r"cannot find symbol (.+)",
        ],
    ),
    (
        ErrorKind::Syntax,
        &[
            r"SyntaxError: (.+)",
            r"IndentationError: (.+)",
            r"unexpected token (.+)",
            r"missing semicolon",
        ],
    ),
    (
        ErrorKind::Dependency,
        &[
            r"ModuleNotFoundError: (.+)",
            r"ImportError: (.+)",
            r"package (.+) not found",
            r"cannot resolve dependency (.+)",
        ],
    ),
    (
        ErrorKind::Network,
        &[
            r"connection refused",
            r"timeout",
            r"network unreachable",
            r"DNS resolution failed",
        ],
    ),
    (
        ErrorKind::Permission,
        &[
            r"permission denied",
            r"access forbidden",
            r"unauthorized",
            r"insufficient privileges",
        ],
    ),
];

static BUILTIN: LazyLock<Arc<PatternRegistry>> = LazyLock::new(|| {
    Arc::new(PatternRegistry::from_source(BUILTIN_RULES).expect("builtin patterns compile"))
});

/// All patterns registered for one kind, tried in listed order
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub kind: ErrorKind,
    pub patterns: Vec<Regex>,
}

impl PatternRule {
    /// Compile case-insensitive patterns for `kind`
    pub fn new<S: AsRef<str>>(kind: ErrorKind, patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .build()
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { kind, patterns })
    }

    /// First pattern that hits anywhere in `message`
    pub fn first_match(&self, message: &str) -> Option<&Regex> {
        self.patterns.iter().find(|p| p.is_match(message))
    }

    pub fn is_match(&self, message: &str) -> bool {
        self.first_match(message).is_some()
    }
}

/// Ordered list of rules; position in the list is classification priority
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    /// Shared builtin registry
    pub fn builtin() -> Arc<PatternRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Build a registry from already compiled rules, keeping their order
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// Compile a registry from pattern text
    pub fn from_source<S: AsRef<str>>(source: &[(ErrorKind, &[S])]) -> Result<Self> {
        let rules = source
            .iter()
            .map(|(kind, patterns)| PatternRule::new(*kind, patterns))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn rule_for(&self, kind: ErrorKind) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    pub fn pattern_count(&self) -> usize {
        self.rules.iter().map(|r| r.patterns.len()).sum()
    }
}
