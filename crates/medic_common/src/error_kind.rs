//! Error Kind Classification
//!
//! The closed taxonomy every diagnosed message lands in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a raw error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Compiler or linker failure
    Compilation,
    /// Parser rejected the source
    Syntax,
    /// Missing or unresolvable package/module
    Dependency,
    /// Connectivity, DNS or timeout failure
    Network,
    /// Access denied or insufficient privileges
    Permission,
    /// Fallback when no pattern matches
    Runtime,
    /// Fallback of the coarse terminal classifier
    Configuration,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::Compilation,
        ErrorKind::Syntax,
        ErrorKind::Dependency,
        ErrorKind::Network,
        ErrorKind::Permission,
        ErrorKind::Runtime,
        ErrorKind::Configuration,
    ];

    /// Kinds the primary classifier matches, highest priority first.
    /// The first kind with any matching pattern wins.
    pub const PRIORITY: [ErrorKind; 5] = [
        ErrorKind::Compilation,
        ErrorKind::Syntax,
        ErrorKind::Dependency,
        ErrorKind::Network,
        ErrorKind::Permission,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Compilation => "compilation",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Dependency => "dependency",
            ErrorKind::Network => "network",
            ErrorKind::Permission => "permission",
            ErrorKind::Runtime => "runtime",
            ErrorKind::Configuration => "configuration",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorKind::Compilation => "Compilation",
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Dependency => "Dependency",
            ErrorKind::Network => "Network",
            ErrorKind::Permission => "Permission",
            ErrorKind::Runtime => "Runtime",
            ErrorKind::Configuration => "Configuration",
        }
    }

    /// True for kinds that are only ever produced as a fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, ErrorKind::Runtime | ErrorKind::Configuration)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
