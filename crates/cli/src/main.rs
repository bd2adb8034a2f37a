use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use filestore::FileStoreClient;
use orchestrator::Orchestrator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILESTORE_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "planrun")]
#[command(about = "Executes tool-call plans found in model output", long_about = None)]
#[command(version)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["input", "input_file"])
))]
struct Cli {
    /// Model output as a string.
    #[arg(long)]
    input: Option<String>,

    /// Path to a file containing the model output.
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Base URL of the filestore service.
    #[arg(long, default_value = DEFAULT_FILESTORE_URL)]
    filestore_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let raw_output = match (cli.input, cli.input_file) {
        (_, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        (Some(text), None) => text,
        // clap's arg group guarantees one of the two is present.
        (None, None) => unreachable!(),
    };

    tracing::info!(
        filestore_url = %cli.filestore_url,
        input_bytes = raw_output.len(),
        "starting orchestration run"
    );

    let orchestrator = Orchestrator::new(FileStoreClient::new(cli.filestore_url));
    let exit_code = orchestrator.run(&raw_output).await;
    tracing::info!(exit_code, "orchestration run finished");

    std::process::exit(exit_code);
}
