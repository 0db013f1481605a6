//! Console rendering for diagnosis and test-run reports.

use medic_common::fix_plan::TestRunReport;
use medic_common::{ErrorKind, Report, TerminalDiagnosis};
use owo_colors::{OwoColorize, Style};
use std::fmt::Write as _;

/// Applies styles only when color is enabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, Style::new().dimmed())
    }
}

fn kind_style(kind: ErrorKind) -> Style {
    match kind {
        ErrorKind::Compilation | ErrorKind::Syntax => Style::new().red().bold(),
        ErrorKind::Dependency => Style::new().yellow().bold(),
        ErrorKind::Network => Style::new().cyan().bold(),
        ErrorKind::Permission => Style::new().magenta().bold(),
        ErrorKind::Runtime | ErrorKind::Configuration => Style::new().white().bold(),
    }
}

pub fn render_report(report: &Report, painter: Painter) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        painter.heading("Error type:"),
        painter.paint(report.kind.display_name(), kind_style(report.kind))
    );
    let _ = writeln!(out, "{} {}", painter.heading("Message:"), report.message.trim_end());

    match (&report.location.file, report.location.line) {
        (Some(file), Some(line)) => {
            let _ = writeln!(out, "{} {}:{}", painter.heading("Location:"), file, line);
        }
        (Some(file), None) => {
            let _ = writeln!(out, "{} {}", painter.heading("Location:"), file);
        }
        _ => {}
    }
    if let Some(language) = report.context.language {
        let _ = writeln!(out, "{} {}", painter.heading("Language:"), language);
    }
    if let Some(framework) = report.context.framework {
        let _ = writeln!(out, "{} {}", painter.heading("Framework:"), framework);
    }

    let _ = writeln!(out, "\n{}", painter.heading("Suggested solutions"));
    for (i, solution) in report.suggested_solutions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, solution);
    }

    let _ = writeln!(out, "\n{}", painter.heading("Next steps"));
    for step in &report.next_steps {
        let _ = writeln!(out, "  {} {}", painter.dim("-"), step);
    }

    out
}

pub fn render_terminal(diagnosis: &TerminalDiagnosis, painter: Painter) -> String {
    format!(
        "{} {}\n{}",
        painter.heading("Terminal issue:"),
        diagnosis.issue.as_str(),
        render_report(&diagnosis.report, painter)
    )
}

fn render_list(out: &mut String, title: &str, items: &[String], limit: usize, painter: Painter) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {}", painter.heading(title));
    for item in items.iter().take(limit) {
        let _ = writeln!(out, "    - {}", item);
    }
}

pub fn render_run_report(report: &TestRunReport, painter: Painter) -> String {
    let mut out = String::new();
    let summary = &report.test_summary;

    let _ = writeln!(out, "{}", painter.heading("Test results"));
    let _ = writeln!(out, "  Total:   {}", summary.total_tests);
    let _ = writeln!(
        out,
        "  Passed:  {}",
        painter.paint(&summary.passed.to_string(), Style::new().green())
    );
    let _ = writeln!(
        out,
        "  Failed:  {}",
        painter.paint(&summary.failed.to_string(), Style::new().red())
    );
    let _ = writeln!(out, "  Errors:  {}", summary.errors);
    let _ = writeln!(out, "  Skipped: {}", summary.skipped);
    let _ = writeln!(out, "  Success rate: {}%", summary.success_rate);

    if !report.failed_features.is_empty() {
        let _ = writeln!(
            out,
            "\n{} ({})",
            painter.heading("Failed features"),
            report.failed_features.len()
        );
        for (i, feature) in report.failed_features.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, feature);
        }
    }

    if !report.critical_issues.is_empty() {
        let _ = writeln!(out, "\n{}", painter.paint("Critical issues", Style::new().red().bold()));
        for issue in &report.critical_issues {
            let _ = writeln!(out, "  - {}", issue);
        }
    }

    let _ = writeln!(out, "\n{}", painter.heading("Recommendations"));
    for rec in &report.recommendations {
        let _ = writeln!(out, "  - {}", rec);
    }

    if !report.fix_plan.is_empty() {
        let _ = writeln!(out, "\n{}", painter.heading("Fix plan"));
        render_list(&mut out, "Immediate", &report.fix_plan.immediate, 3, painter);
        render_list(&mut out, "Short term", &report.fix_plan.short_term, 3, painter);
        render_list(&mut out, "Long term", &report.fix_plan.long_term, 3, painter);
    }

    out
}
