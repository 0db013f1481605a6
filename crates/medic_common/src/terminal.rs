//! Terminal diagnosis - coarse classifier for dev-server shell failures.
//!
//! Cheaper and blunter than the primary classifier: a handful of substring
//! tests aimed at `npm run dev` style output (missing node, busy port,
//! npm permission trouble).

use crate::classifier::Classify;
use crate::config::MINIMAL_FALLBACK;
use crate::context::ErrorContext;
use crate::error_kind::ErrorKind;
use crate::report::Report;
use serde::{Deserialize, Serialize};

/// Issue buckets of the coarse classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalIssue {
    Dependency,
    Permission,
    Port,
    Npm,
    Node,
    Configuration,
}

impl TerminalIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalIssue::Dependency => "dependency",
            TerminalIssue::Permission => "permission",
            TerminalIssue::Port => "port",
            TerminalIssue::Npm => "npm",
            TerminalIssue::Node => "node",
            TerminalIssue::Configuration => "configuration",
        }
    }

    /// Checks run in order, first hit wins
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();

        if lower.contains("command not found") || lower.contains("not found") {
            return TerminalIssue::Dependency;
        }
        if lower.contains("permission denied") {
            return TerminalIssue::Permission;
        }
        // errno names are upper-case in node output
        if lower.contains("port") || message.contains("EADDRINUSE") {
            return TerminalIssue::Port;
        }
        if lower.contains("npm") {
            return TerminalIssue::Npm;
        }
        if lower.contains("node") {
            return TerminalIssue::Node;
        }
        TerminalIssue::Configuration
    }

    pub fn error_kind(&self) -> ErrorKind {
        match self {
            TerminalIssue::Dependency | TerminalIssue::Npm | TerminalIssue::Node => {
                ErrorKind::Dependency
            }
            TerminalIssue::Permission => ErrorKind::Permission,
            TerminalIssue::Port => ErrorKind::Network,
            TerminalIssue::Configuration => ErrorKind::Configuration,
        }
    }

    /// Fixed remediation list; empty for `Configuration`
    pub fn solutions(&self) -> &'static [&'static str] {
        match self {
            TerminalIssue::Node => &[
                "Install Node.js from https://nodejs.org",
                "Check if Node.js is in your PATH: echo $PATH",
                "Restart terminal after installation",
                "Try using nvm to manage Node.js versions",
            ],
            TerminalIssue::Npm => &[
                "Node.js installation includes npm",
                "Reinstall Node.js if npm is missing",
                "Check npm permissions: npm config get prefix",
                "Clear npm cache: npm cache clean --force",
            ],
            TerminalIssue::Port => &[
                "Kill process using the port: lsof -ti:3000 | xargs kill -9",
                "Use a different port: npm run dev -- -p 3001",
                "Check for other services using the port",
                "Restart your computer to clear all processes",
            ],
            TerminalIssue::Permission => &[
                "Fix npm permissions: sudo chown -R $(whoami) ~/.npm",
                "Use npx instead of global npm installs",
                "Check file permissions: ls -la",
                "Run with sudo if absolutely necessary (not recommended)",
            ],
            TerminalIssue::Dependency => &[
                "Delete node_modules: rm -rf node_modules",
                "Clear npm cache: npm cache clean --force",
                "Reinstall: npm install",
                "Check package.json for correct scripts",
            ],
            TerminalIssue::Configuration => &[],
        }
    }
}

/// Coarse classifier usable wherever a [`Classify`] is expected
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalClassifier;

impl Classify for TerminalClassifier {
    fn classify(&self, message: &str) -> ErrorKind {
        TerminalIssue::detect(message).error_kind()
    }
}

/// Terminal issue plus the standard report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalDiagnosis {
    pub issue: TerminalIssue,
    #[serde(flatten)]
    pub report: Report,
}

/// Diagnose with the minimal fallback text
pub fn diagnose_terminal(message: &str) -> TerminalDiagnosis {
    diagnose_terminal_with_fallback(message, MINIMAL_FALLBACK)
}

/// Diagnose terminal output. Location and attributes are not extracted.
pub fn diagnose_terminal_with_fallback(message: &str, fallback: &str) -> TerminalDiagnosis {
    let issue = TerminalIssue::detect(message);
    let context = ErrorContext::bare(message, issue.error_kind());
    let solutions = issue.solutions().iter().map(|s| s.to_string()).collect();
    TerminalDiagnosis {
        issue,
        report: Report::build(&context, solutions, fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_order() {
        assert_eq!(
            TerminalIssue::detect("zsh: command not found: node"),
            TerminalIssue::Dependency
        );
        assert_eq!(
            TerminalIssue::detect("EACCES: permission denied, mkdir '/usr/lib/node_modules'"),
            TerminalIssue::Permission
        );
        assert_eq!(
            TerminalIssue::detect("Error: listen EADDRINUSE: address already in use :::3000"),
            TerminalIssue::Port
        );
        assert_eq!(
            TerminalIssue::detect("npm ERR! code ELIFECYCLE"),
            TerminalIssue::Npm
        );
        assert_eq!(
            TerminalIssue::detect("node: bad option: --foo"),
            TerminalIssue::Node
        );
        assert_eq!(
            TerminalIssue::detect("something odd happened"),
            TerminalIssue::Configuration
        );
    }

    #[test]
    fn test_eaddrinuse_is_case_sensitive() {
        assert_eq!(
            TerminalIssue::detect("eaddrinuse"),
            TerminalIssue::Configuration
        );
    }

    #[test]
    fn test_configuration_uses_fallback() {
        let diagnosis = diagnose_terminal("something odd happened");
        assert_eq!(diagnosis.report.kind, ErrorKind::Configuration);
        assert_eq!(
            diagnosis.report.suggested_solutions,
            vec![MINIMAL_FALLBACK.to_string()]
        );
    }

    #[test]
    fn test_classify_trait() {
        let classifier = TerminalClassifier;
        assert_eq!(
            classifier.classify("Port 3000 is already in use"),
            ErrorKind::Network
        );
        assert_eq!(classifier.classify(""), ErrorKind::Configuration);
    }

    #[test]
    fn test_flattened_json() {
        let json = serde_json::to_value(diagnose_terminal("npm ERR! missing script: dev")).unwrap();
        assert_eq!(json["issue"], "npm");
        assert_eq!(json["kind"], "dependency");
        assert_eq!(json["suggested_solutions"].as_array().unwrap().len(), 4);
    }
}
