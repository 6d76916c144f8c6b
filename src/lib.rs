//! eat: a coding-agent dispatcher and a deploy status page.
//!
//! Two independent tools share this crate:
//!
//! - `eat-agent` runs Claude Code or Codex against a repository with a
//!   prompt, mirroring the agent's exit code.
//! - `eat` serves a single HTML page showing the deployed version and date.

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod status;

#[cfg(test)]
mod test_support;
