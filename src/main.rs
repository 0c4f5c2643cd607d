//! Zammad provider - Main entry point

use clap::Parser;
use log::info;
use tokio::io::BufReader;

use zammad_provider::{Cli, ProviderServer, ZammadProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout carries protocol responses, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .target(env_logger::Target::Stderr)
        .init();

    info!(
        "Starting terraform-provider-zammad v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut server = ProviderServer::new(ZammadProvider::new());
    server
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Input closed, shutting down");
    Ok(())
}
