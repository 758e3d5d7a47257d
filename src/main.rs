//! muadil: coffee machine catalog search with equivalent products
//!
//! Searches a catalog workbook by category, text, features and usage, and
//! lists each match's equivalent ("muadil") products.

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use muadil::{
    cli,
    config::{self, AppConfig, CategoriesConfig, SearchConfig, Validatable},
    pipeline::exit_codes,
    reports::OutputFormat,
    CatalogQuery, Category, Feature, UsageTag,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "muadil")]
#[command(version)]
#[command(about = "Coffee machine catalog search with equivalent products", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  At least one product matched
    1  No products matched
    3  Error occurred

EXAMPLES:
    # Espresso machines with a milk frother, for office use
    muadil search ESPRESSO --feature SUTLU --usage Ofis

    # Look up a stock code and its equivalents as JSON
    muadil search \"TÜRK KAHVESİ\" TK-100 -o json

    # Show what the workbook contains
    muadil categories --workbook /srv/katalog/KAHVEMUADİLLER.xlsx")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Workbook selection shared by catalog commands
#[derive(Args)]
struct WorkbookArgs {
    /// Catalog workbook (defaults to the configured path, then KAHVEMUADİLLER.xlsx)
    #[arg(short, long, env = "MUADIL_WORKBOOK")]
    workbook: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `search` subcommand
#[derive(Parser)]
struct SearchArgs {
    /// Category: ESPRESSO, TURK_KAHVESI or FILTRE_KAHVE (Turkish spellings accepted)
    category: Category,

    /// Text to find in stock codes and stock names (case-insensitive)
    query: Option<String>,

    /// Required feature, e.g. OGUTUCU or SUTLU (repeatable)
    #[arg(short, long = "feature", value_name = "FEATURE")]
    features: Vec<Feature>,

    /// Accepted usage tag: Ev, Ofis or Profesyonel (repeatable)
    #[arg(short, long = "usage", value_name = "USAGE")]
    usage: Vec<UsageTag>,

    #[command(flatten)]
    workbook: WorkbookArgs,

    /// Output format (auto: table if interactive, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: OutputFormat,

    /// Maximum number of products to list
    #[arg(long)]
    limit: Option<usize>,

    /// Seed for sampling feature-matched equivalents
    #[arg(long)]
    seed: Option<u64>,

    /// Number of feature-matched equivalents to sample
    #[arg(long)]
    sample_size: Option<usize>,

    /// Hide feature ticks
    #[arg(long)]
    no_features: bool,
}

/// Arguments for the `categories` subcommand
#[derive(Parser)]
struct CategoriesArgs {
    #[command(flatten)]
    workbook: WorkbookArgs,

    /// Output format (auto: table if interactive, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a category and list equivalents of each match
    Search(SearchArgs),

    /// Summarize the categories found in the workbook
    Categories(CategoriesArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema of the configuration file
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Write a commented example config to ./.muadil.yaml
    Init,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Load the config file, layer `overrides` on top and validate the result.
fn effective_config(config_path: Option<&Path>, overrides: &AppConfig) -> Result<AppConfig> {
    if let Some(path) = config_path {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Search(args) => {
            let mut builder = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.workbook.output_file)
                .no_color(cli.no_color)
                .show_features(!args.no_features)
                .seed(args.seed)
                .limit(args.limit);
            if let Some(path) = args.workbook.workbook {
                builder = builder.catalog_path(path);
            }
            if let Some(sample_size) = args.sample_size {
                builder = builder.sample_size(sample_size);
            }
            let app_config = effective_config(cli.config.as_deref(), &builder.build())?;

            let query = CatalogQuery {
                text: args.query,
                features: args.features,
                usage: args.usage.iter().map(|tag| tag.label().to_string()).collect(),
            };
            cli::run_search(SearchConfig::from_app_config(&app_config, args.category, query))
        }

        Commands::Categories(args) => {
            let mut builder = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.workbook.output_file)
                .no_color(cli.no_color);
            if let Some(path) = args.workbook.workbook {
                builder = builder.catalog_path(path);
            }
            let app_config = effective_config(cli.config.as_deref(), &builder.build())?;

            cli::run_categories(CategoriesConfig {
                catalog_path: app_config.catalog.path,
                output: app_config.output,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "muadil", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("muadil").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".muadil.yaml");
                if target.exists() {
                    bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_args() {
        let cli = Cli::try_parse_from([
            "muadil",
            "search",
            "Türk Kahvesi",
            "tk",
            "-f",
            "kozde",
            "--feature",
            "SUTLU",
            "-u",
            "Ev",
            "--seed",
            "4",
            "-o",
            "csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.category, Category::TurkishCoffee);
                assert_eq!(args.query.as_deref(), Some("tk"));
                assert_eq!(args.features, vec![Feature::Embers, Feature::Milk]);
                assert_eq!(args.usage, vec![UsageTag::Home]);
                assert_eq!(args.seed, Some(4));
                assert_eq!(args.output, OutputFormat::Csv);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_usage_restricted_to_tags() {
        let cli = Cli::try_parse_from(["muadil", "search", "ESPRESSO", "-u", "ofis"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert_eq!(args.usage, vec![UsageTag::Office]),
            _ => panic!("expected search"),
        }
        assert!(Cli::try_parse_from(["muadil", "search", "ESPRESSO", "-u", "Ev Tipi"]).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["muadil", "search", "CAPPUCCINO"]).is_err());
    }
}
