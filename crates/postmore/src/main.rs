//! postmore CLI - excerpt truncation with "read more" links.
//!
//! Provides commands for:
//! - `excerpt`: Truncate a rendered post body at its excerpt marker
//! - `render`: Render a post through a template using the excerpt filter

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExcerptArgs, RenderArgs};
use output::Output;

/// postmore - cut posts at their excerpt marker.
#[derive(Parser)]
#[command(name = "postmore", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover postmore.toml).
    #[arg(short, long, global = true, env = "POSTMORE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Truncate a rendered post body at its excerpt marker.
    Excerpt(ExcerptArgs),
    /// Render a post through a template.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let filter = log_filter(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Excerpt(args) => args.execute(config),
        Commands::Render(args) => args.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
