//! Report formatting and printing.
//!
//! Text output is cargo-style; JSON output is a single pretty-printed document.
//! Kept apart from the core so the engine can be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{CheckReport, ScanStats},
    diagnostics::{Category, HealthScore, I18nDiagnostic, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the text report to stdout.
pub fn print_text(report: &CheckReport, verbose: bool) {
    let _ = write_text(report, verbose, &mut io::stdout().lock());
    print_load_warnings(report, verbose);
}

/// Print the JSON report to stdout.
pub fn print_json(report: &CheckReport) -> Result<()> {
    let mut out = io::stdout().lock();
    write_json(report, &mut out)?;
    print_load_warnings(report, false);
    Ok(())
}

/// Render the text report to a custom writer.
pub fn write_text<W: Write>(report: &CheckReport, verbose: bool, writer: &mut W) -> io::Result<()> {
    let mut shown: Vec<&I18nDiagnostic> = report
        .diagnostics
        .iter()
        .filter(|d| verbose || d.severity != Severity::Info)
        .collect();
    shown.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.column.cmp(&b.column))
            .then_with(|| a.rule.cmp(&b.rule))
    });

    let max_line_width = shown
        .iter()
        .map(|d| d.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for diag in &shown {
        write_diagnostic(diag, writer, max_line_width)?;
    }

    write_summary(report, writer)?;
    write_score(&report.score, writer)
}

/// Render the JSON report to a custom writer.
pub fn write_json<W: Write>(report: &CheckReport, writer: &mut W) -> Result<()> {
    let document = JsonReport {
        diagnostics: &report.diagnostics,
        score: &report.score,
        stats: &report.stats,
        files_scanned: report.files_scanned,
        files_failed: report.files_failed,
    };
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    diagnostics: &'a [I18nDiagnostic],
    score: &'a HealthScore,
    stats: &'a ScanStats,
    files_scanned: usize,
    files_failed: usize,
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
        Severity::Info => "info".bold().cyan(),
    }
}

fn caret(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
        Severity::Info => "^".cyan(),
    }
}

fn write_diagnostic<W: Write>(
    diag: &I18nDiagnostic,
    writer: &mut W,
    max_line_width: usize,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}: {}  {}",
        severity_label(diag.severity),
        diag.message,
        diag.rule.to_string().dimmed().cyan()
    )?;

    if diag.has_location() {
        writeln!(
            writer,
            "  {} {}:{}:{}",
            "-->".blue(),
            diag.file_path,
            diag.line,
            diag.column
        )?;
    } else if !diag.file_path.is_empty() {
        writeln!(writer, "  {} {}", "-->".blue(), diag.file_path)?;
    }

    if diag.has_location()
        && let Some(source_line) = &diag.source_line
    {
        writeln!(writer, "{:>width$} {}", "", "|".blue(), width = max_line_width)?;
        writeln!(
            writer,
            "{:>width$} {} {}",
            diag.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        )?;

        // Column is 1-based; pad by display width so wide glyphs line up.
        let prefix: String = source_line
            .chars()
            .take(diag.column.saturating_sub(1))
            .collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret(diag.severity),
            width = max_line_width,
            padding = caret_padding
        )?;
    }

    if !diag.help.is_empty() {
        writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "help:".bold().cyan(),
            diag.help,
            width = max_line_width
        )?;
    }

    writeln!(writer)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn write_summary<W: Write>(report: &CheckReport, writer: &mut W) -> io::Result<()> {
    let count = |severity: Severity| {
        report
            .diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    };
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);
    let infos = count(Severity::Info);
    let files = report.files_scanned;

    if errors + warnings == 0 {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - no problems found",
                files,
                plural(files, "file", "files")
            )
            .green()
        )?;
    } else {
        writeln!(
            writer,
            "{} {} problems ({} {}, {} {}) in {} source {}",
            FAILURE_MARK.red(),
            errors + warnings,
            errors,
            plural(errors, "error", "errors").red(),
            warnings,
            plural(warnings, "warning", "warnings").yellow(),
            files,
            plural(files, "file", "files")
        )?;
    }

    if infos > 0 {
        writeln!(
            writer,
            "  {} {}",
            infos,
            plural(infos, "info diagnostic", "info diagnostics").dimmed()
        )?;
    }
    Ok(())
}

fn write_score<W: Write>(score: &HealthScore, writer: &mut W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "Health score".bold())?;
    for category in Category::ALL {
        writeln!(
            writer,
            "  {:<12} {:>3}",
            category.to_string(),
            score.category(category)
        )?;
    }
    writeln!(
        writer,
        "  {} {:>3}",
        format!("{:<12}", "overall").bold(),
        score.overall
    )?;

    if score.passed {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("passed (threshold {})", score.threshold).green()
        )
    } else {
        writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("failed (threshold {})", score.threshold).red()
        )
    }
}

/// Warn on stderr about files that could not be read or parsed.
fn print_load_warnings(report: &CheckReport, verbose: bool) {
    let _ = write_load_warnings(report, verbose, &mut io::stderr().lock());
}

pub fn write_load_warnings<W: Write>(
    report: &CheckReport,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    if report.files_failed > 0 {
        writeln!(
            writer,
            "{} {} file(s) could not be parsed",
            "warning:".bold().yellow(),
            report.files_failed
        )?;
        if verbose {
            for error in &report.scan_errors {
                writeln!(writer, "  {} {}: {}", "-->".blue(), error.file_path, error.error)?;
            }
        }
    }
    for warning in &report.locale_warnings {
        writeln!(
            writer,
            "{} skipped locale file {}: {}",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        )?;
    }
    Ok(())
}
