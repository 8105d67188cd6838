use clap::Parser;

use water::cli::{self, Cli};
use water::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();
    tracing::debug!(?cli, "starting");
    cli::run(cli).await
}
