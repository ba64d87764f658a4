/// Marker prefix of a documentation-comment line.
pub const DOC_MARKER: &str = "///";

/// Marker of an ordinary single-line comment (with its trailing space).
pub const COMMENT_MARKER: &str = "// ";

/// Comment token that suppresses validation for the block directly below it.
pub const EXEMPT_MARKER: &str = "// <exempt>";

/// The contiguous run of documentation-comment lines directly above a
/// signature, in source order, with the `///` marker stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    lines: Vec<String>,
}

impl DocBlock {
    /// Collect the doc block above `signature_index`.
    ///
    /// Walks upward from the line directly above the signature while each
    /// line carries the `///` marker, then restores source order. The walk
    /// stops at the first non-documentation line and never runs past the
    /// start of the file. A signature with no documentation above it yields
    /// an empty block, which the validators treat as missing everything.
    #[must_use]
    pub fn collect_above(lines: &[String], signature_index: usize) -> Self {
        let mut collected = Vec::new();
        let mut index = signature_index;
        while index > 0 {
            let line = &lines[index - 1];
            if !line.contains(DOC_MARKER) {
                break;
            }
            collected.push(line.replace(DOC_MARKER, ""));
            index -= 1;
        }
        collected.reverse();
        Self { lines: collected }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block as one newline-joined searchable string.
    #[must_use]
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Walk upward from `start` through contiguous single-line comments looking
/// for the exemption marker.
///
/// Stops at the first line without a comment marker, including the start
/// line itself, and at the start of the file. Out-of-range start indices
/// report not exempt.
#[must_use]
pub fn is_exempt(lines: &[String], start: usize) -> bool {
    let mut index = start;
    loop {
        let Some(line) = lines.get(index) else {
            return false;
        };
        if !line.contains(COMMENT_MARKER) {
            return false;
        }
        if line.contains(EXEMPT_MARKER) {
            return true;
        }
        if index == 0 {
            return false;
        }
        index -= 1;
    }
}

#[cfg(test)]
#[path = "docblock_tests.rs"]
mod tests;
