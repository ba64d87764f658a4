use std::path::{Path, PathBuf};

/// One rule violation, append-only per run, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub file: PathBuf,
    /// 1-based line number of the signature or comment.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    MissingSummary { method: String },
    MissingReturn { method: String },
    MissingParam { method: String, param: String },
    RedundantParam { method: String, param: String },
    MalformedInlineComment,
}

impl IssueKind {
    /// Stable machine-readable identifier, used by the JSON output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingSummary { .. } => "missing-summary",
            Self::MissingReturn { .. } => "missing-return",
            Self::MissingParam { .. } => "missing-param",
            Self::RedundantParam { .. } => "redundant-param",
            Self::MalformedInlineComment => "malformed-inline-comment",
        }
    }

    /// The method the issue is tied to, if any.
    ///
    /// Inline comments are not tied to a signature and carry no method.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        match self {
            Self::MissingSummary { method }
            | Self::MissingReturn { method }
            | Self::MissingParam { method, .. }
            | Self::RedundantParam { method, .. } => Some(method),
            Self::MalformedInlineComment => None,
        }
    }

    /// The documented-but-unknown or undocumented parameter name, if any.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::MissingParam { param, .. } | Self::RedundantParam { param, .. } => Some(param),
            Self::MissingSummary { .. }
            | Self::MissingReturn { .. }
            | Self::MalformedInlineComment => None,
        }
    }
}

impl Issue {
    #[must_use]
    pub fn new(kind: IssueKind, file: &Path, line: usize) -> Self {
        Self {
            kind,
            file: file.to_path_buf(),
            line,
        }
    }

    /// Plain (uncolored) message text for this issue.
    #[must_use]
    pub fn message(&self) -> String {
        let file_name = self
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match &self.kind {
            IssueKind::MissingSummary { method } => {
                format!("Method {method} does not have a summary")
            }
            IssueKind::MissingReturn { method } => {
                format!("Method {method} has a return type, but no return comment")
            }
            IssueKind::MissingParam { method, param } => {
                format!("Method {method} does not have a parameter comment for parameter {param}")
            }
            IssueKind::RedundantParam { method, param } => {
                format!("Method {method} has a redundant comment for parameter {param}")
            }
            IssueKind::MalformedInlineComment => {
                format!(
                    "File {file_name} does not have a proper comment at line {}",
                    self.line
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
