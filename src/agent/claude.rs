//! Claude Code CLI invocation.
//!
//! Claude runs headless with `-p` inside the repository directory and takes
//! the prompt as its final positional argument.

use crate::agent::command::AgentCommand;
use crate::fs::resolve_existing;
use std::path::{Path, PathBuf};

pub const PROGRAM: &str = "claude";

/// Flag pointing Claude at extra system-prompt text.
pub const SYSTEM_PROMPT_FLAG: &str = "--append-system-prompt-file";

/// Flag restricting which tools Claude may use in headless mode.
pub const ALLOWED_TOOLS_FLAG: &str = "--allowedTools";

/// Tools allowed when nothing else is configured.
pub const DEFAULT_ALLOWED_TOOLS: &str = "Read,Edit,Bash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeAgent {
    /// Optional system-prompt additions. Skipped if the file is absent.
    pub append_system_prompt_file: Option<PathBuf>,
    /// Comma-separated tool names passed to `--allowedTools`.
    pub allowed_tools: String,
    /// Omit `--allowedTools` entirely.
    pub no_allowed_tools: bool,
}

impl Default for ClaudeAgent {
    fn default() -> Self {
        Self {
            append_system_prompt_file: None,
            allowed_tools: DEFAULT_ALLOWED_TOOLS.to_string(),
            no_allowed_tools: false,
        }
    }
}

impl ClaudeAgent {
    pub fn command(&self, repo_dir: &Path, prompt: &str) -> AgentCommand {
        let mut cmd = AgentCommand::new(PROGRAM).arg("-p").current_dir(repo_dir);

        if let Some(path) = self.system_prompt_path() {
            cmd = cmd.arg(SYSTEM_PROMPT_FLAG).arg(path);
        }

        if !self.no_allowed_tools {
            cmd = cmd.arg(ALLOWED_TOOLS_FLAG).arg(self.allowed_tools.as_str());
        }

        cmd.arg(prompt)
    }

    /// The resolved system-prompt file, if one is configured and exists.
    ///
    /// Relative paths resolve against the current working directory, not the
    /// repository directory.
    fn system_prompt_path(&self) -> Option<PathBuf> {
        let configured = self.append_system_prompt_file.as_deref()?;
        let resolved = resolve_existing(configured);
        if resolved.is_none() {
            tracing::debug!(
                path = %configured.display(),
                "system prompt file not found, omitting {}",
                SYSTEM_PROMPT_FLAG
            );
        }
        resolved
    }
}
