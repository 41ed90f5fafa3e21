use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ipl_stats_core::AppConfig;
use ipl_stats_llm::ProviderRouter;
use ipl_stats_service::{AskService, QueryPipeline};
use ipl_stats_storage::PgDatabase;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "ipl-stats")]
#[command(about = "Ask IPL cricket statistics questions in plain English", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web form and JSON API
    Serve {
        #[arg(short, long, default_value = "7860")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Answer a single question and print every pipeline stage
    Ask {
        question: String,
        /// Model id (see `ipl-stats models`)
        #[arg(short, long)]
        model: Option<String>,
        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported models
    Models,
    /// Print the table info embedded in prompts
    Schema,
}

/// Connect to the database, read the schema once and wire up the pipeline.
pub(crate) async fn build_service(config: &AppConfig) -> Result<AskService> {
    let db = PgDatabase::connect(&config.database_url).await?;
    let table_info = db.table_info().await?;
    tracing::info!(chars = table_info.len(), "loaded table info");
    let pipeline = QueryPipeline::new(Arc::new(db), table_info, config.top_k);
    let router = ProviderRouter::from_config(config)?;
    Ok(AskService::new(pipeline, router))
}

/// `RUST_LOG` when it is set and valid, otherwise `info`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Ask { question, model, json } => {
            commands::ask::run(question, model, json).await?;
        },
        Commands::Models => commands::catalog::run_models(),
        Commands::Schema => commands::catalog::run_schema().await?,
    }

    Ok(())
}
