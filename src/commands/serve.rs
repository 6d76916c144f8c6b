//! Implementation of `eat`, the status page server.

use crate::cli::ServeCli;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::status::{StatusInfo, serve};

/// Load configuration and the version file, then serve until shutdown.
///
/// Missing `PORT` or an unreadable version file fail here, before binding.
pub async fn cmd_serve(cli: ServeCli) -> Result<()> {
    let config = ServerConfig::from_env()?.with_cli(&cli);
    let info = StatusInfo::load(&config)?;

    tracing::info!(
        version = %info.version,
        deploy_date = %info.deploy_date,
        version_file = %config.version_file.display(),
        "starting status page"
    );
    println!("{}", info.banner());

    serve(&config, &info).await
}
