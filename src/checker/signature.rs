use regex::Regex;

/// Lines containing this token are never treated as method signatures.
/// Record declarations carry their documentation on the type, not per member.
const RECORD_TOKEN: &str = "record";

/// Declared accessibility of a matched method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Private,
    Internal,
    Protected,
}

impl Accessibility {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "internal" => Some(Self::Internal),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
            Self::Protected => "protected",
        }
    }
}

/// A single line recognized as a method declaration.
///
/// Ephemeral: derived per line, consumed by the validators, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMatch {
    pub accessibility: Accessibility,
    pub return_type: String,
    pub method_name: String,
    raw_arguments: String,
}

impl SignatureMatch {
    /// Whether the declared return type calls for a `<returns>` description.
    #[must_use]
    pub fn has_return_value(&self) -> bool {
        self.return_type != "void"
    }

    /// Argument names declared in the signature, in declaration order.
    ///
    /// Each `", "`-separated argument contributes its last space-separated
    /// token as the name, so `List<Foo> bar` yields `bar`. Generic types with
    /// internal commas (`Dictionary<string, int> map`) defeat the split and
    /// produce best-effort names; this is a known limitation of the
    /// line-oriented match, not silently corrected.
    #[must_use]
    pub fn argument_names(&self) -> Vec<String> {
        if self.raw_arguments.is_empty() {
            return Vec::new();
        }
        self.raw_arguments
            .split(", ")
            .map(|arg| {
                arg.split(' ')
                    .next_back()
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            })
            .collect()
    }
}

/// Recognizes single-line method declarations.
///
/// The pattern must consume the entire whitespace-trimmed line; signatures
/// spanning multiple lines are deliberately not matched.
pub struct SignatureMatcher {
    pattern: Regex,
}

impl Default for SignatureMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(
                r"^(?P<accessibility>public|private|internal|protected)\s(?:async\s)?(?:(?:static|virtual|abstract|override|new)\s)?(?:async\s)?(?P<return_type>[a-zA-Z0-9<>]*)\s(?P<method_name>[A-Za-z_0-9<>, ]*)\((?P<arguments>[A-Za-z_0-9\[\]<>, ]*)\)$",
            )
            .expect("Invalid regex"),
        }
    }

    /// Match one line as a method declaration, or return `None`.
    ///
    /// Non-matching lines are simply skipped by the caller; this is a scan,
    /// not a parse of the whole file.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<SignatureMatch> {
        if line.contains(RECORD_TOKEN) {
            return None;
        }

        let caps = self.pattern.captures(line.trim())?;

        let accessibility = Accessibility::parse(&caps["accessibility"])?;
        Some(SignatureMatch {
            accessibility,
            return_type: caps["return_type"].to_string(),
            method_name: caps["method_name"].trim().to_string(),
            raw_arguments: caps["arguments"].to_string(),
        })
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
