use std::fmt::Write;

use crate::checker::{CheckReport, Issue, IssueKind};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// Each issue renders as a 3-line record: message, location, blank.
    fn format_issue(&self, issue: &Issue, output: &mut String) {
        writeln!(output, "{}", self.message_line(issue)).ok();
        writeln!(output, "{}", self.location_line(issue)).ok();
        writeln!(output).ok();
    }

    fn message_line(&self, issue: &Issue) -> String {
        let file_name = file_name_of(issue);
        match &issue.kind {
            IssueKind::MissingSummary { method } => format!(
                "{} does not have a summary",
                self.colorize(&format!("Method {method}"), ansi::YELLOW)
            ),
            IssueKind::MissingReturn { method } => format!(
                "{} has a return type, but no return comment",
                self.colorize(&format!("Method {method}"), ansi::YELLOW)
            ),
            IssueKind::MissingParam { method, param } => format!(
                "{} does not have a parameter comment for parameter {param}",
                self.colorize(&format!("Method {method}"), ansi::YELLOW)
            ),
            IssueKind::RedundantParam { method, param } => format!(
                "{} has a redundant comment for parameter {param}",
                self.colorize(&format!("Method {method}"), ansi::YELLOW)
            ),
            IssueKind::MalformedInlineComment => format!(
                "{} does not have a proper comment at line {}",
                self.colorize(&format!("File {file_name}"), ansi::YELLOW),
                issue.line
            ),
        }
    }

    fn location_line(&self, issue: &Issue) -> String {
        let name = self.colorize(&file_name_of(issue), ansi::BLUE);
        let line = self.colorize(&issue.line.to_string(), ansi::GREEN);
        match issue.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                format!(
                    "File: {}{}{name}:{line}",
                    parent.display(),
                    std::path::MAIN_SEPARATOR
                )
            }
            _ => format!("File: {name}:{line}"),
        }
    }

    fn format_summary(&self, report: &CheckReport) -> String {
        let count = report.issues.len();
        let count_str = if report.is_clean() {
            self.colorize("no issues", ansi::GREEN)
        } else {
            self.colorize(&format!("{count} issue(s)"), ansi::RED)
        };
        format!(
            "Summary: {} file(s) checked, {count_str} found",
            report.files_checked
        )
    }

    fn format_breakdown(report: &CheckReport, output: &mut String) {
        let mut counts = [0usize; 5];
        for issue in &report.issues {
            let slot = match issue.kind {
                IssueKind::MissingSummary { .. } => 0,
                IssueKind::MissingReturn { .. } => 1,
                IssueKind::MissingParam { .. } => 2,
                IssueKind::RedundantParam { .. } => 3,
                IssueKind::MalformedInlineComment => 4,
            };
            counts[slot] += 1;
        }
        writeln!(
            output,
            "Breakdown: summary={}, return={}, param={}, redundant={}, inline={}",
            counts[0], counts[1], counts[2], counts[3], counts[4]
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();

        for issue in &report.issues {
            self.format_issue(issue, &mut output);
        }

        if self.verbose >= 1 {
            Self::format_breakdown(report, &mut output);
        }

        writeln!(output, "{}", self.format_summary(report)).ok();

        Ok(output)
    }
}

fn file_name_of(issue: &Issue) -> String {
    issue
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
