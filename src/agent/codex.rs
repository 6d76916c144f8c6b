//! Codex CLI invocation.
//!
//! Codex runs non-interactively via `codex exec`, pointed at the repository
//! with `-C`. The prompt is streamed on stdin (the trailing `-` argument).

use crate::agent::command::AgentCommand;
use std::path::{Path, PathBuf};

pub const PROGRAM: &str = "codex";

/// Flag enabling Codex's full-auto approval preset.
pub const FULL_AUTO_FLAG: &str = "--full-auto";

/// Flag capturing the agent's final message to a file.
pub const OUTPUT_LAST_MESSAGE_FLAG: &str = "--output-last-message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodexAgent {
    /// Where Codex should write its last message, if anywhere.
    pub output_last_message: Option<PathBuf>,
    /// Run without approval prompts.
    pub full_auto: bool,
}

impl CodexAgent {
    pub fn command(&self, repo_dir: &Path, prompt: &str) -> AgentCommand {
        let mut cmd = AgentCommand::new(PROGRAM)
            .args(["exec", "-C"])
            .arg(repo_dir.as_os_str())
            .arg("-")
            .stdin(prompt);

        if let Some(ref path) = self.output_last_message {
            cmd = cmd.arg(OUTPUT_LAST_MESSAGE_FLAG).arg(path.as_os_str());
        }

        if self.full_auto {
            cmd = cmd.arg(FULL_AUTO_FLAG);
        }

        cmd
    }
}
