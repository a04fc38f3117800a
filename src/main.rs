//! browser-router CLI
//!
//! Inspect and exercise a routing document without the desktop host:
//!
//! ```text
//! browser-router resolve https://github.com --source-name Slack
//! browser-router check
//! browser-router rules
//! browser-router init --default-browser org.mozilla.firefox
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use browser_router::config::{
    default_config_path, load_config, load_or_default, save_config, validate_config, RoutingConfig,
    DEFAULT_TARGET,
};
use browser_router::observability::init_logging;
use browser_router::routing::{LaunchOptions, Resolution, RuleEngine, SourceApp};

#[derive(Parser)]
#[command(name = "browser-router")]
#[command(about = "Decide which browser opens a URL", long_about = None)]
struct Cli {
    /// Routing document (JSON, or TOML by extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `browser_router=debug` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL to launch options
    Resolve {
        url: String,
        /// Display name of the application that opened the URL
        #[arg(long)]
        source_name: Option<String>,
        /// Identifier (bundle id) of the application that opened the URL
        #[arg(long)]
        source_id: Option<String>,
    },
    /// Load the document strictly and report authoring problems
    Check,
    /// List rules in evaluation order
    Rules,
    /// Write a fresh document with no rules
    Init {
        #[arg(long, default_value = DEFAULT_TARGET)]
        default_browser: String,
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let path = match cli.config.or_else(default_config_path) {
        Some(path) => path,
        None => return Err("no config directory on this platform; pass --config".into()),
    };

    match cli.command {
        Commands::Resolve {
            url,
            source_name,
            source_id,
        } => {
            let config = load_or_default(&path);
            let engine = RuleEngine::new(&config);
            let source = match (source_name, source_id) {
                (None, None) => None,
                (name, id) => Some(SourceApp::new(name.unwrap_or_default(), id.unwrap_or_default())),
            };

            let resolution = match url::Url::parse(&url) {
                Ok(parsed) => engine.explain(&parsed, source.as_ref()),
                Err(e) => {
                    tracing::warn!(url = %url, "Unparseable URL: {}", e);
                    Resolution {
                        options: LaunchOptions::fallback(engine.default_target()),
                        rule: None,
                    }
                }
            };
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
        Commands::Check => {
            let config = load_config(&path)?;
            let warnings = validate_config(&config);
            println!(
                "{}: version {}, {} rule(s), default {}",
                path.display(),
                config.version,
                config.rules.len(),
                config.default_target
            );
            for warning in &warnings {
                println!("warning: {}", warning);
            }
            if warnings.is_empty() {
                println!("ok");
            }
        }
        Commands::Rules => {
            let config = load_or_default(&path);
            let engine = RuleEngine::new(&config);
            for rule in engine.rules() {
                let mut flags = Vec::new();
                if !rule.is_eligible() {
                    flags.push("never applies");
                }
                if rule.launch_private() {
                    flags.push("private");
                }
                if rule.launch_new_window() {
                    flags.push("new window");
                }
                println!(
                    "{:>6}  {:<24} -> {}{}",
                    rule.priority,
                    rule.id,
                    rule.target,
                    if flags.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", flags.join(", "))
                    }
                );
            }
            println!("{:>6}  {:<24} -> {}", "-", "(default)", engine.default_target());
        }
        Commands::Init {
            default_browser,
            force,
        } => {
            if path.exists() && !force {
                return Err(format!("{} already exists; pass --force to overwrite", path.display()).into());
            }
            save_config(&path, &RoutingConfig::new(default_browser))?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
