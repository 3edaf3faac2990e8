// CLI binary is only available with the native feature
#![cfg(feature = "native")]

mod cli;

use clap::{Parser, Subcommand};
use cli::{OutputFormat, RecordKind};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "exam-content")]
#[command(version, about = "Typed CFP / EA exam content registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: ./.exam-content.toml if present)
    #[arg(short, long, global = true, env = "EXAM_CONTENT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the configured library and report registry sizes
    Validate,

    /// Print one question or lesson
    Show {
        /// Record id (e.g. CFP-RIS-002, SEE1-001)
        id: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List records in registry order
    List {
        /// Which registry to list
        #[arg(value_enum)]
        kind: RecordKind,

        /// Only this exam section (e.g. CFP-RISK, SEE1)
        #[arg(long)]
        section: Option<String>,

        /// Only this blueprint area (e.g. RIS-2, SEE1-3)
        #[arg(long)]
        area: Option<String>,
    },

    /// Counts per section and blueprint coverage
    Stats {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a content file or directory without building the library
    Lint {
        /// JSON/YAML file or directory
        path: PathBuf,

        /// Record kind held by the files
        #[arg(long, value_enum)]
        kind: RecordKind,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("exam-content v{}", env!("CARGO_PKG_VERSION"));

    let config = cli::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate => {
            cli::lint::cmd_validate(&config)?;
        }
        Commands::Show { id, format } => {
            let library = cli::load_library(&config)?;
            cli::inspect::cmd_show(&library, &id, format)?;
        }
        Commands::List {
            kind,
            section,
            area,
        } => {
            let library = cli::load_library(&config)?;
            cli::inspect::cmd_list(&library, kind, section.as_deref(), area.as_deref())?;
        }
        Commands::Stats { format } => {
            let library = cli::load_library(&config)?;
            cli::stats::cmd_stats(&library, format)?;
        }
        Commands::Lint { path, kind } => {
            info!("Linting {:?}", path);
            cli::lint::cmd_lint(&path, kind, &config.validation)?;
        }
    }

    Ok(())
}
