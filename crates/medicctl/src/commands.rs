//! Command handlers

use crate::display::{render_report, render_run_report, render_terminal, Painter};
use anyhow::{Context, Result};
use medic_common::config::OutputFormat;
use medic_common::fix_plan::{TestOutcome, TestRunReport};
use medic_common::terminal::diagnose_terminal_with_fallback;
use medic_common::{Diagnoser, EngineConfig, MedicConfig};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::info;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    pub config: MedicConfig,
    pub painter: Painter,
}

impl Session {
    fn wants_json(&self, flag: bool) -> bool {
        flag || self.config.output.format == OutputFormat::Json
    }
}

/// Read a whole file, `-` meaning stdin.
/// Invalid UTF-8 is replaced with U+FFFD, tool logs are not always clean.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_stdin() -> Result<String> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read stdin")?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("report saved to {}", path.display());
    Ok(())
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

pub fn analyze(
    session: &Session,
    message: Option<String>,
    file: Option<&Path>,
    json: bool,
    minimal: bool,
    output: Option<&Path>,
) -> Result<()> {
    let message = match (message, file) {
        (Some(message), _) => message,
        (None, Some(path)) => read_source(path)?,
        (None, None) => read_stdin()?,
    };

    let engine_config = if minimal {
        EngineConfig::minimal()
    } else {
        session.config.engine_config()
    };
    let report = Diagnoser::new(engine_config).diagnose(&message, None);

    if let Some(path) = output {
        write_json(&report, path)?;
    }
    if session.wants_json(json) {
        emit(&report.to_json_pretty()?)
    } else {
        emit(&render_report(&report, session.painter))
    }
}

pub fn request(session: &Session, path: &Path) -> Result<()> {
    let raw = read_source(path)?;
    let document: serde_json::Value =
        serde_json::from_str(&raw).context("Request is not valid JSON")?;

    let engine = Diagnoser::new(session.config.engine_config());
    let report = engine.diagnose_request(&document)?;
    emit(&report.to_json_pretty()?)
}

pub fn terminal(session: &Session, message: Option<String>, json: bool) -> Result<()> {
    let message = match message {
        Some(message) => message,
        None => read_stdin()?,
    };

    let diagnosis = diagnose_terminal_with_fallback(&message, session.config.terminal_fallback());

    if session.wants_json(json) {
        emit(&serde_json::to_string_pretty(&diagnosis)?)
    } else {
        emit(&render_terminal(&diagnosis, session.painter))
    }
}

pub fn plan(session: &Session, path: &Path, json: bool, output: Option<&Path>) -> Result<()> {
    let raw = read_source(path)?;
    let outcomes: Vec<TestOutcome> =
        serde_json::from_str(&raw).context("Expected a JSON array of test outcomes")?;
    info!("aggregating {} test outcomes", outcomes.len());

    let report = TestRunReport::from_outcomes(outcomes);
    if let Some(path) = output {
        write_json(&report, path)?;
    }
    if session.wants_json(json) {
        emit(&serde_json::to_string_pretty(&report)?)
    } else {
        emit(&render_run_report(&report, session.painter))
    }
}
