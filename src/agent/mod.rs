//! Coding-agent dispatch.
//!
//! Two external agent CLIs are supported, Claude Code (`claude`) and Codex
//! (`codex`). Each run goes through two steps:
//!
//! - **Assembly**: [`AgentHandle::command`] turns the resolved options, the
//!   repository directory and the prompt into an [`AgentCommand`]. This is
//!   pure apart from checking whether the optional system-prompt file exists.
//! - **Launch**: [`AgentHandle::run`] executes that command, blocks until it
//!   exits, and turns a non-zero exit into [`EatError::ExternalProcess`].

mod claude;
mod codex;
mod command;
pub mod config;
pub mod dispatch;
mod prompt;

pub use claude::ClaudeAgent;
pub use codex::CodexAgent;
pub use command::AgentCommand;
pub use config::{AgentDefaults, AgentOptions, OptionOverrides};
pub use dispatch::{AgentOutcome, execute, run_to_completion};
pub use prompt::PromptSource;

use crate::error::{EatError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The supported agent executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Claude,
    Codex,
}

impl Tool {
    /// Accepted tool names, in the order shown in help output.
    pub const NAMES: [&'static str; 2] = ["claude", "codex"];

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Claude => claude::PROGRAM,
            Tool::Codex => codex::PROGRAM,
        }
    }
}

impl FromStr for Tool {
    type Err = EatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "claude" => Ok(Tool::Claude),
            "codex" => Ok(Tool::Codex),
            other => Err(EatError::UnsupportedTool(other.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured agent, ready to assemble and run commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentHandle {
    Claude(ClaudeAgent),
    Codex(CodexAgent),
}

/// Select the agent named `tool_name`, configured from `options`.
///
/// Only the options relevant to the chosen tool are used.
pub fn select_agent(tool_name: &str, options: &AgentOptions) -> Result<AgentHandle> {
    let handle = match tool_name.parse::<Tool>()? {
        Tool::Claude => AgentHandle::Claude(options.claude()),
        Tool::Codex => AgentHandle::Codex(options.codex()),
    };
    Ok(handle)
}

impl AgentHandle {
    pub fn tool(&self) -> Tool {
        match self {
            AgentHandle::Claude(_) => Tool::Claude,
            AgentHandle::Codex(_) => Tool::Codex,
        }
    }

    /// Assemble the command that would run this agent on `repo_dir`.
    pub fn command(&self, repo_dir: &Path, prompt: &str) -> AgentCommand {
        match self {
            AgentHandle::Claude(agent) => agent.command(repo_dir, prompt),
            AgentHandle::Codex(agent) => agent.command(repo_dir, prompt),
        }
    }

    /// Run the agent on `repo_dir` and wait for it to finish.
    ///
    /// # Errors
    ///
    /// - [`EatError::Launch`] if the executable cannot be spawned
    /// - [`EatError::ExternalProcess`] if it exits non-zero
    pub fn run(&self, repo_dir: &Path, prompt: &str) -> Result<AgentOutcome> {
        let cmd = self.command(repo_dir, prompt);
        tracing::info!(
            tool = %self.tool(),
            repo = %repo_dir.display(),
            "launching agent"
        );
        tracing::debug!(command = %cmd, "assembled agent command");

        run_to_completion(&cmd)
    }
}
