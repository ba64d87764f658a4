use std::path::Path;

use indexmap::IndexSet;
use regex::Regex;

use super::docblock::DocBlock;
use super::issue::{Issue, IssueKind};

/// Compiled content rules for doc blocks and inline comments.
///
/// All checks are textual pattern searches, not XML parsing; malformed but
/// coincidentally matching markup passes. That is the accepted trade-off of
/// a line-oriented linter.
pub struct CommentRules {
    summary_opening: Regex,
    summary_closing: Regex,
    returns: Regex,
    param_tag: Regex,
    inline_trigger: Regex,
    inline_sentence: Regex,
}

impl Default for CommentRules {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentRules {
    #[must_use]
    pub fn new() -> Self {
        Self {
            summary_opening: Regex::new(r"<summary>\s* [A-Z]").expect("Invalid regex"),
            summary_closing: Regex::new(r"\.\s*</summary>").expect("Invalid regex"),
            // Dot spans newlines so a return description may wrap across
            // several doc lines.
            returns: Regex::new(r"(?s)<returns> [A-Z].*?\. </returns>").expect("Invalid regex"),
            param_tag: Regex::new(r#"^<param name="(?P<arg_name>[^"]*)"> [A-Z].*\. </param>$"#)
                .expect("Invalid regex"),
            inline_trigger: Regex::new(r"[^/]// ").expect("Invalid regex"),
            inline_sentence: Regex::new(r"[^/]// [A-Z].*\. ?$").expect("Invalid regex"),
        }
    }

    /// The block must open its summary with an uppercase sentence start and
    /// close it with a period. The two conditions are independent substring
    /// searches, so the sentence may span physical lines.
    fn has_summary(&self, block: &str) -> bool {
        self.summary_opening.is_match(block) && self.summary_closing.is_match(block)
    }

    fn has_return_comment(&self, block: &str) -> bool {
        self.returns.is_match(block)
    }

    /// Names of all parameters documented in the block.
    ///
    /// Each trimmed doc line must independently satisfy the full param-tag
    /// shape (quoted name, uppercase start, period end) to be counted.
    fn param_names(&self, block: &DocBlock) -> Vec<String> {
        block
            .lines()
            .iter()
            .filter_map(|line| {
                self.param_tag
                    .captures(line.trim())
                    .map(|caps| caps["arg_name"].trim().to_string())
            })
            .collect()
    }

    /// Whether the line carries an inline comment subject to validation.
    ///
    /// The marker must be preceded by a non-slash character, which excludes
    /// `///` documentation lines.
    #[must_use]
    pub fn is_inline_comment(&self, line: &str) -> bool {
        self.inline_trigger.is_match(line)
    }

    /// Whether an inline comment reads as a capitalized, period-terminated
    /// sentence.
    #[must_use]
    pub fn is_well_formed_inline(&self, line: &str) -> bool {
        self.inline_sentence.is_match(line)
    }
}

/// Validate the summary section of a doc block.
pub(crate) fn summary_issues(
    rules: &CommentRules,
    block: &str,
    method: &str,
    file: &Path,
    line: usize,
) -> Option<Issue> {
    if rules.has_summary(block) {
        return None;
    }
    Some(Issue::new(
        IssueKind::MissingSummary {
            method: method.to_string(),
        },
        file,
        line,
    ))
}

/// Validate the `<returns>` section. Only invoked for non-void signatures.
pub(crate) fn return_issues(
    rules: &CommentRules,
    block: &str,
    method: &str,
    file: &Path,
    line: usize,
) -> Option<Issue> {
    if rules.has_return_comment(block) {
        return None;
    }
    Some(Issue::new(
        IssueKind::MissingReturn {
            method: method.to_string(),
        },
        file,
        line,
    ))
}

/// Cross-check declared argument names against documented param tags.
///
/// Two symmetric set differences drive reporting: undocumented arguments in
/// declaration order first, then documented-but-undeclared names in found
/// order. Names are compared after whitespace stripping.
pub(crate) fn param_issues(
    rules: &CommentRules,
    expected_names: &[String],
    block: &DocBlock,
    method: &str,
    file: &Path,
    line: usize,
) -> Vec<Issue> {
    let expected: IndexSet<&str> = expected_names.iter().map(String::as_str).collect();
    let found_names = rules.param_names(block);
    let found: IndexSet<&str> = found_names.iter().map(String::as_str).collect();

    let mut issues = Vec::new();
    for name in expected.difference(&found) {
        issues.push(Issue::new(
            IssueKind::MissingParam {
                method: method.to_string(),
                param: (*name).to_string(),
            },
            file,
            line,
        ));
    }
    for name in found.difference(&expected) {
        issues.push(Issue::new(
            IssueKind::RedundantParam {
                method: method.to_string(),
                param: (*name).to_string(),
            },
            file,
            line,
        ));
    }
    issues
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
