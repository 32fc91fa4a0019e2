use anyhow::Result;
use clap::Parser;
use climate_compare::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    climate_compare::run(cli).await
}
