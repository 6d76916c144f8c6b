//! Entry point for `eat`, the deploy status page server.
//!
//! Reads `PORT`, `DEPLOY_DATE` and the version file at startup, then serves
//! `GET /` until interrupted.

use anyhow::{Context, Result};
use eat::cli::ServeCli;
use eat::commands;
use eat::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ServeCli::parse_args();
    init_logging(&cli.log_level)?;

    commands::cmd_serve(cli)
        .await
        .context("status page server failed")?;

    Ok(())
}
