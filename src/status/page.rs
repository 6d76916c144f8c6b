//! Status page content.

use crate::config::ServerConfig;
use crate::error::{EatError, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;

const HELLO: &str = "hello";
const HELLO_TEMPLATE: &str = include_str!("templates/hello.html");

/// The two strings the status page shows, computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub version: String,
    pub deploy_date: String,
}

impl StatusInfo {
    /// Read the version file named by `config` and pair it with the deploy date.
    pub fn load(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            version: read_version(&config.version_file)?,
            deploy_date: config.deploy_date.clone(),
        })
    }

    /// One-line startup banner.
    pub fn banner(&self) -> String {
        format!("eat v{} (deployed {})", self.version, self.deploy_date)
    }
}

/// Read a version file, trimming surrounding whitespace.
pub fn read_version(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EatError::Config(format!(
            "failed to read version file '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(content.trim().to_string())
}

/// Handlebars registry holding the embedded page template.
///
/// Strict mode turns a placeholder with no matching field into an error
/// instead of an empty string. Values are HTML-escaped on output.
fn renderer() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string(HELLO, HELLO_TEMPLATE)
        .map_err(|e| EatError::Server(format!("invalid status page template: {}", e)))?;
    Ok(handlebars)
}

/// Render the status page HTML.
pub fn render_page(info: &StatusInfo) -> Result<String> {
    renderer()?
        .render(HELLO, info)
        .map_err(|e| EatError::Server(format!("failed to render status page: {}", e)))
}
