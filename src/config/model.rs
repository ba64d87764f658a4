use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/bin/**".to_string(),
        "**/obj/**".to_string(),
        "**/.git/**".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultConfig {
    /// File extensions subject to checking.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directories to scan when no paths are given on the command line.
    #[serde(default)]
    pub include_paths: Vec<String>,

    /// Respect .gitignore rules while scanning.
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Validate doc blocks above method signatures.
    #[serde(default = "default_true")]
    pub check_docs: bool,

    /// Validate inline comment sentences.
    #[serde(default = "default_true")]
    pub check_inline: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_paths: Vec::new(),
            gitignore: true,
            check_docs: true,
            check_inline: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
    /// Glob patterns for files and directories to skip.
    #[serde(default = "default_exclude_patterns")]
    pub patterns: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            patterns: default_exclude_patterns(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
