mod auth;
mod cli;
mod error;
mod insights;
mod kpi;
mod mailer;
mod models;
mod report;
mod selection;
mod source;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting LinePulse - Daily Production Report Tool");
    cli.execute().await?;

    Ok(())
}
