//! Formsmith CLI
//!
//! Command-line front end for the form engine.
//!
//! # Usage
//!
//! ```bash
//! formsmith schemas create --name Contact --field "text=Name*" --field "email=Email*"
//! formsmith schemas import -f contact.json
//! formsmith schemas list
//! formsmith submit <schema-id> --value "Name=Ada" --value "Email=ada@example.com"
//! formsmith submissions list --schema-id <schema-id> --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use formsmith_forms::{open_service, FormsConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "formsmith")]
#[command(author = "Formsmith")]
#[command(version = "0.1.0")]
#[command(about = "Formsmith Command Line Interface", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, env = "FORMSMITH_CONFIG", default_value = "formsmith.toml")]
    config: PathBuf,

    /// Data directory, overrides the config file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage form schemas
    Schemas {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Validate and submit values against a stored schema
    Submit {
        schema_id: String,
        /// `<label or field id>=<value>`, repeatable
        #[arg(long = "value", short = 'v')]
        values: Vec<String>,
    },
    /// Inspect submissions
    Submissions {
        #[command(subcommand)]
        action: SubmissionCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// List stored schemas
    List,
    /// Show a schema's fields
    Show { id: String },
    /// Build a schema from field specs and save it
    Create {
        #[arg(long)]
        name: String,
        /// `<type>[=<label>][*]`, `*` marks the field required
        #[arg(long = "field")]
        fields: Vec<String>,
    },
    /// Import a schema document from a JSON file
    Import {
        #[arg(short, long)]
        file: PathBuf,
        /// Name to save under instead of the document's own
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum SubmissionCommands {
    /// List submissions in arrival order
    List {
        #[arg(long)]
        schema_id: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match config::resolve(&cli.config, cli.data_dir.clone()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli, settings).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, settings: FormsConfig) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Commands::Config { action } => commands::config::handle(action, &cli.config, &settings, format),
        Commands::Schemas { action } => {
            let service = open_service(&settings.storage).await?;
            commands::schemas::handle(action, &service, format).await
        }
        Commands::Submit { schema_id, values } => {
            let service = open_service(&settings.storage).await?;
            commands::submit::handle(&schema_id, &values, &service, format).await
        }
        Commands::Submissions { action } => {
            let service = open_service(&settings.storage).await?;
            commands::submissions::handle(action, &service, format).await
        }
    }
}
