use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use doc_guard::checker::{CheckReport, DocChecker};
use doc_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, InitArgs};
use doc_guard::config::{Config, ConfigLoader, FileConfigLoader, validate_config};
use doc_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use doc_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use doc_guard::{DocGuardError, EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> doc_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Create GlobFilter
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.default.extensions.clone());
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    // 4. Determine paths to scan
    let paths_to_scan = get_scan_paths(args, &config);

    // 5. Scan directories
    let scanner = DirectoryScanner::with_gitignore(filter, config.default.gitignore);
    let mut all_files = Vec::new();
    for path in &paths_to_scan {
        let files = scanner.scan(path)?;
        all_files.extend(files);
    }

    // 6. Validate each file sequentially; issue order is file-then-line
    let checker = DocChecker::new()
        .with_doc_checks(config.default.check_docs)
        .with_inline_checks(config.default.check_inline);

    let mut report = CheckReport::new();
    for file_path in &all_files {
        let lines = read_lines(file_path)?;
        report.add_file(checker.check_file(file_path, &lines));
    }

    // 7. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose)?;

    // 8. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 9. Determine exit code
    if report.is_clean() || args.warn_only {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_ISSUES_FOUND)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> doc_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

const fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if args.no_doc {
        config.default.check_docs = false;
    }

    if args.no_inline {
        config.default.check_inline = false;
    }
}

fn get_scan_paths(args: &CheckArgs, config: &Config) -> Vec<PathBuf> {
    // CLI --include overrides config include_paths
    if !args.include.is_empty() {
        return args.include.iter().map(PathBuf::from).collect();
    }

    // If CLI paths provided (other than default "."), use them
    let default_path = PathBuf::from(".");
    if args.paths.len() != 1 || args.paths[0] != default_path {
        return args.paths.clone();
    }

    // Use config include_paths if available
    if !config.default.include_paths.is_empty() {
        return config
            .default
            .include_paths
            .iter()
            .map(PathBuf::from)
            .collect();
    }

    // Default to current directory
    args.paths.clone()
}

/// Read a file's lines verbatim. Read failures are fatal and abort the run.
fn read_lines(path: &Path) -> doc_guard::Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

fn format_output(
    format: OutputFormat,
    report: &CheckReport,
    color_mode: ColorMode,
    verbose: u8,
) -> doc_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> doc_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> doc_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DocGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# doc-guard configuration file

[default]
# File extensions to check
extensions = ["cs"]

# Directories to include (empty = scan from current directory)
# include_paths = ["src"]

# Respect .gitignore rules while scanning (default: true)
gitignore = true

# Validate doc blocks above method signatures (default: true)
check_docs = true

# Validate inline comment sentences (default: true)
check_inline = true

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    "**/bin/**",
    "**/obj/**",
    "**/.git/**",
]
"#
}

fn run_config(args: &doc_guard::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> doc_guard::Result<()> {
    if !config_path.exists() {
        return Err(DocGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    validate_config(&config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> doc_guard::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[default]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.default.extensions);
    if !config.default.include_paths.is_empty() {
        let _ = writeln!(
            output,
            "  include_paths = {:?}",
            config.default.include_paths
        );
    }
    let _ = writeln!(output, "  gitignore = {}", config.default.gitignore);
    let _ = writeln!(output, "  check_docs = {}", config.default.check_docs);
    let _ = writeln!(output, "  check_inline = {}", config.default.check_inline);

    if !config.exclude.patterns.is_empty() {
        output.push_str("\n[exclude]\n");
        output.push_str("  patterns = [\n");
        for pattern in &config.exclude.patterns {
            let _ = writeln!(output, "    \"{pattern}\",");
        }
        output.push_str("  ]\n");
    }

    output
}
