use anyhow::Result;
use bitbuddy::cli::Cli;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    bitbuddy::runtime::run(Cli::parse()).await
}
