use serde::Serialize;

use crate::checker::{CheckReport, Issue};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    issues: Vec<JsonIssue>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    total_issues: usize,
}

#[derive(Serialize)]
struct JsonIssue {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<String>,
    file: String,
    line: usize,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_checked: report.files_checked,
                total_issues: report.issues.len(),
            },
            issues: report.issues.iter().map(convert_issue).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_issue(issue: &Issue) -> JsonIssue {
    JsonIssue {
        kind: issue.kind.code().to_string(),
        method: issue.kind.method().map(str::to_string),
        param: issue.kind.param().map(str::to_string),
        file: issue.file.display().to_string(),
        line: issue.line,
        message: issue.message(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
