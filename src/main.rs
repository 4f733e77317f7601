use std::fs;
use std::path::Path;

use clap::Parser;

use repo_guard::checker::{CompiledRules, StructureValidator, Violation};
use repo_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, InitArgs};
use repo_guard::config::{Config, ConfigLoader, FileConfigLoader};
use repo_guard::output::{ColorMode, OutputFormatter, TextFormatter};
use repo_guard::{RepoGuardError, EXIT_INTERNAL_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

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
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Config(args)) => run_config(args),
        // Bare invocation validates the current directory.
        None => run_check(&CheckArgs::default(), &cli),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INTERNAL_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> repo_guard::Result<i32> {
    // 1. Resolve the repository root
    let root = dunce::canonicalize(&args.root)
        .map_err(|_| RepoGuardError::RootNotFound(args.root.clone()))?;

    // 2. Load configuration
    let config = load_config(&root, args.config.as_deref(), cli.no_config)?;

    // 3. Compile rule tables
    let rules = CompiledRules::from_config(&config)?;

    if cli.verbose > 0 && !cli.quiet {
        println!("Validating {}", root.display());
    }

    // 4. Run all rule checks sequentially
    let validator = StructureValidator::new(&root, &rules);
    let violations = validator.validate();

    // 5. Print the grouped report
    let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
    let output = formatter.format(&violations)?;
    if !cli.quiet {
        print!("{output}");
    }

    // 6. Warnings alone never fail the run
    if violations.iter().any(Violation::is_error) {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(
    root: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> repo_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INTERNAL_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> repo_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RepoGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r##"# repo-guard configuration file

[validator]
# Packages permitted to contain a scripts/ subdirectory
allowed_scripts_packages = ["dev-tools"]

# Package-name patterns (glob syntax) whose packages must not contain examples/
# no_examples_patterns = ["*-runtime"]

# Additional root-level source filenames exempt from location rules
# allowed_root_files = ["build.config.ts"]

# Additional path patterns (regex syntax) exempt from location rules
# allowed_package_paths = ["^packages/[^/]+/benchmarks/"]
"##
}

fn run_config(args: &repo_guard::cli::ConfigArgs) -> i32 {
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
            EXIT_INTERNAL_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> repo_guard::Result<()> {
    let loader = FileConfigLoader::new();
    let config = loader.load_from_path(config_path)?;

    // Pattern compilation is the semantic half of validation.
    CompiledRules::from_config(&config)?;

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
            EXIT_INTERNAL_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> repo_guard::Result<String> {
    let config = load_config(Path::new("."), config_path, false)?;

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
    output.push_str("[validator]\n");
    let _ = writeln!(
        output,
        "  allowed_scripts_packages = {:?}",
        config.validator.allowed_scripts_packages
    );
    let _ = writeln!(
        output,
        "  no_examples_patterns = {:?}",
        config.validator.no_examples_patterns
    );
    let _ = writeln!(
        output,
        "  allowed_root_files = {:?}",
        config.validator.allowed_root_files
    );
    let _ = writeln!(
        output,
        "  allowed_package_paths = {:?}",
        config.validator.allowed_package_paths
    );
    output
}
