use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use docref::config::{get_config_path, load_config, save_config, DocRefConfig};
use docref::errors::{DocRefError, Result};
use docref::resolution::{find_shadowed, ReferenceResolver};
use docref::types::*;

/// Manual lookup for API identifiers.
#[derive(Parser)]
#[command(name = "docref", about = "Manual lookup for API identifiers")]
struct Cli {
    /// Config file (default: ./docref.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the manual URL for each identifier
    Resolve {
        /// Fully-qualified identifiers, e.g. bpy.types.Modifier.show_viewport
        #[arg(required = true)]
        identifiers: Vec<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show which table entry an identifier hits
    Explain {
        /// Fully-qualified identifier
        identifier: String,
    },
    /// List the effective table in evaluation order
    Table {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Report entries hidden behind earlier ones
    Audit,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_env("DOCREF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = cli
        .config
        .unwrap_or_else(|| get_config_path(&current_dir()));

    match cli.command {
        Commands::Resolve { identifiers, json } => {
            let resolver = open_resolver(&config_path)?;
            if json {
                let result = resolver.resolve_all(&identifiers);
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for identifier in &identifiers {
                    match resolver.resolve(identifier) {
                        Some(url) => println!("{}", url),
                        None => println!("No reference for '{}'", identifier),
                    }
                }
            }
        }
        Commands::Explain { identifier } => {
            let resolver = open_resolver(&config_path)?;
            let reference = resolver.resolve_reference(&identifier);
            println!("{}", identifier);
            if let Some(reference) = &reference {
                println!("  Entry:   #{}", reference.entry);
                println!("  Pattern: {}", reference.pattern);
                if reference.target.is_empty() {
                    println!("  Target:  (none)");
                } else {
                    println!("  Target:  {}", reference.target);
                }
            }
            let outcome = Outcome::from(reference.as_ref());
            println!("  Outcome: {}", outcome.as_str());
            if let Some(url) = outcome.url() {
                println!("  URL:     {}", url);
            }
        }
        Commands::Table { json } => {
            let resolver = open_resolver(&config_path)?;
            let entries: Vec<&MappingEntry> = resolver.table().entries().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("Prefix: {}", resolver.prefix());
                for (i, entry) in entries.iter().enumerate() {
                    println!("{:4}  {}  ->  {}", i, entry.pattern, entry.target);
                }
            }
        }
        Commands::Audit => {
            let resolver = open_resolver(&config_path)?;
            let shadowed = find_shadowed(resolver.table());
            if shadowed.is_empty() {
                println!("No unreachable entries");
                return Ok(0);
            }
            for s in &shadowed {
                println!(
                    "#{} {} is hidden by #{} {} ({})",
                    s.entry,
                    s.pattern,
                    s.shadowed_by,
                    s.shadowing_pattern,
                    s.reason.as_str()
                );
            }
            return Ok(1);
        }
        Commands::Init { force } => {
            if config_path.exists() && !force {
                return Err(DocRefError::Config {
                    message: format!(
                        "'{}' already exists; pass --force to overwrite",
                        config_path.display()
                    ),
                });
            }
            save_config(&config_path, &DocRefConfig::default())?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(0)
}

/// Loads the config at `path` (defaults when absent) and builds its resolver.
fn open_resolver(path: &std::path::Path) -> Result<ReferenceResolver> {
    load_config(path)?.build_resolver()
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
