mod docblock;
mod issue;
mod rules;
mod signature;

pub use docblock::{COMMENT_MARKER, DOC_MARKER, DocBlock, EXEMPT_MARKER, is_exempt};
pub use issue::{Issue, IssueKind};
pub use rules::CommentRules;
pub use signature::{Accessibility, SignatureMatch, SignatureMatcher};

use std::path::Path;

/// The validation engine: runs signature-based doc checks and inline-comment
/// checks over the ordered lines of one file at a time.
pub struct DocChecker {
    signatures: SignatureMatcher,
    rules: CommentRules,
    check_docs: bool,
    check_inline: bool,
}

impl Default for DocChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl DocChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            signatures: SignatureMatcher::new(),
            rules: CommentRules::new(),
            check_docs: true,
            check_inline: true,
        }
    }

    #[must_use]
    pub const fn with_doc_checks(mut self, enabled: bool) -> Self {
        self.check_docs = enabled;
        self
    }

    #[must_use]
    pub const fn with_inline_checks(mut self, enabled: bool) -> Self {
        self.check_inline = enabled;
        self
    }

    /// Validate one file's lines and return its issues in line order.
    ///
    /// Both passes run independently per line; a line can be a signature for
    /// the doc pass and carry an inline comment for the inline pass. The
    /// result is deterministic for identical input.
    #[must_use]
    pub fn check_file(&self, file: &Path, lines: &[String]) -> Vec<Issue> {
        let mut issues = Vec::new();
        for index in 0..lines.len() {
            if self.check_docs {
                issues.extend(self.signature_issues(file, lines, index));
            }
            if self.check_inline {
                issues.extend(self.inline_issues(file, lines, index));
            }
        }
        issues
    }

    fn signature_issues(&self, file: &Path, lines: &[String], index: usize) -> Vec<Issue> {
        let Some(signature) = self.signatures.match_line(&lines[index]) else {
            return Vec::new();
        };

        // An exemption directly above the signature suppresses every doc
        // check for it, including doc-block collection.
        if index > 0 && is_exempt(lines, index - 1) {
            return Vec::new();
        }

        let block = DocBlock::collect_above(lines, index);
        let joined = block.joined();
        let line = index + 1;

        let mut issues = Vec::new();
        issues.extend(rules::summary_issues(
            &self.rules,
            &joined,
            &signature.method_name,
            file,
            line,
        ));
        if signature.has_return_value() {
            issues.extend(rules::return_issues(
                &self.rules,
                &joined,
                &signature.method_name,
                file,
                line,
            ));
        }
        let expected = signature.argument_names();
        if !expected.is_empty() {
            issues.extend(rules::param_issues(
                &self.rules,
                &expected,
                &block,
                &signature.method_name,
                file,
                line,
            ));
        }
        issues
    }

    fn inline_issues(&self, file: &Path, lines: &[String], index: usize) -> Option<Issue> {
        let line = &lines[index];
        if !self.rules.is_inline_comment(line) {
            return None;
        }
        if is_exempt(lines, index) {
            return None;
        }
        if self.rules.is_well_formed_inline(line) {
            return None;
        }
        Some(Issue::new(IssueKind::MalformedInlineComment, file, index + 1))
    }
}

/// Accumulated outcome of a whole run, in file-then-line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub files_checked: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one checked file and append its issues.
    pub fn add_file(&mut self, issues: Vec<Issue>) {
        self.files_checked += 1;
        self.issues.extend(issues);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
