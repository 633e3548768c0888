use std::path::PathBuf;

use clap::Parser;

mod applier;
mod client;
mod spec;

use client::DbClient;
use spec::BootstrapSpec;

#[derive(Debug, thiserror::Error)]
enum BootstrapError {
    #[error("could not read spec file: {0}")]
    Io(#[from] std::io::Error),
    #[error("spec file is not valid JSON: {0}")]
    Spec(#[from] serde_json::Error),
    #[error(transparent)]
    Db(#[from] client::DbError),
}

#[derive(Parser, Debug)]
#[command(name = "bootstrap", about = "Idempotent database bootstrap for the operator")]
struct Cli {
    /// Database server to bootstrap.
    #[arg(long, env = "BOOTSTRAP_SERVER_URL", default_value = "http://127.0.0.1:8529")]
    server_url: String,

    #[arg(long, env = "BOOTSTRAP_USERNAME", default_value = "root")]
    username: String,

    #[arg(long, env = "BOOTSTRAP_PASSWORD", default_value = "")]
    password: String,

    /// JSON file listing the users, databases, collections, and grants
    /// that must exist.
    #[arg(long, env = "BOOTSTRAP_SPEC")]
    spec: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), BootstrapError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.spec)?;
    let spec = BootstrapSpec::from_json(&raw)?;

    let client = DbClient::new(&cli.server_url, &cli.username, &cli.password)?;
    let summary = applier::apply(&client, &spec).await?;

    tracing::info!(
        created = summary.created,
        existing = summary.existing,
        "bootstrap complete"
    );
    Ok(())
}
