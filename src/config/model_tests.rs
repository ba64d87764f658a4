use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.default.extensions, vec!["cs"]);
    assert!(config.default.include_paths.is_empty());
    assert!(config.default.gitignore);
    assert!(config.default.check_docs);
    assert!(config.default.check_inline);
    assert!(config.exclude.patterns.contains(&"**/bin/**".to_string()));
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parse_full_config() {
    let toml_str = r#"
[default]
extensions = ["cs", "csx"]
include_paths = ["src", "lib"]
gitignore = false
check_docs = true
check_inline = false

[exclude]
patterns = ["**/generated/**"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.default.extensions, vec!["cs", "csx"]);
    assert_eq!(config.default.include_paths, vec!["src", "lib"]);
    assert!(!config.default.gitignore);
    assert!(!config.default.check_inline);
    assert_eq!(config.exclude.patterns, vec!["**/generated/**"]);
}

#[test]
fn partial_section_keeps_field_defaults() {
    let toml_str = r#"
[default]
extensions = ["cs"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.default.gitignore);
    assert!(config.default.check_docs);
    assert_eq!(config.exclude, ExcludeConfig::default());
}

#[test]
fn unknown_format_section_is_tolerated() {
    // Absent sections default; present ones are parsed strictly enough to
    // catch typos in field values.
    let toml_str = "[exclude]\npatterns = []\n";
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.exclude.patterns.is_empty());
}
