use anyhow::Result;
use clap::Parser;

use wardrobe_bootstrap::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    wardrobe_bootstrap::run(cli).await
}
