//! CLI entry point for the day scaffolder.

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use scaffold::check::check_from_root;
use scaffold::error::ConfigurationError;
use scaffold::exit_codes;
use scaffold::generate::generate_from_root;
use scaffold::io::init::{InitOptions, init_scaffold};
use scaffold::logging;

#[derive(Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Idempotent per-day directory scaffolding from templates"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `scaffold.toml` and a starter template directory.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Create missing day directories and templated files.
    Generate,
    /// Load config and templates, report what a run would use.
    Check,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = Path::new(".");
    match cli.command {
        Command::Init { force } => {
            init_scaffold(root, &InitOptions { force })?;
        }
        Command::Generate => {
            let summary = generate_from_root(root)?;
            println!("Created {} days", summary.created);
            println!("Updated {} days", summary.updated);
        }
        Command::Check => {
            let outcome = check_from_root(root)?;
            println!(
                "year {}, {} templates -> {}/",
                outcome.year,
                outcome.template_names.len(),
                outcome.output_dir
            );
            for name in &outcome.template_names {
                println!("  {name}");
            }
        }
    }
    Ok(())
}

/// Configuration problems get their own exit code; everything else is
/// the generic error code.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err
        .chain()
        .any(|cause| cause.downcast_ref::<ConfigurationError>().is_some())
    {
        exit_codes::CONFIG
    } else {
        exit_codes::ERROR
    }
}
