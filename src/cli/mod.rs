//! CLI argument parsing for the eat binaries.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module only defines the argument structure; the work happens in
//! the `commands` module.

use crate::agent::{OptionOverrides, Tool};
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, ArgGroup, Args, Parser};
use std::path::PathBuf;

/// Run a coding-agent CLI (Claude Code or Codex) with a prompt.
///
/// Exactly one of `--prompt` or `--prompt-file` is required. The exit code
/// mirrors the agent's own exit code.
#[derive(Parser, Debug)]
#[command(name = "eat-agent")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("prompt_source")
        .required(true)
        .args(["prompt", "prompt_file"])
))]
pub struct AgentCli {
    /// Which agent CLI to use.
    #[arg(value_parser = PossibleValuesParser::new(Tool::NAMES))]
    pub tool: String,

    /// Target repository path.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Prompt text to send to the agent.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt.
    #[arg(long, value_name = "PATH")]
    pub prompt_file: Option<PathBuf>,

    /// Agent defaults file [default: .automation/agent.yaml].
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the command that would run without launching it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub codex: CodexArgs,

    #[command(flatten)]
    pub claude: ClaudeArgs,
}

/// Options that only apply to `codex`.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Codex")]
pub struct CodexArgs {
    /// Write Codex's last message to this path.
    #[arg(long, value_name = "PATH")]
    pub output_last_message: Option<PathBuf>,

    /// Enable Codex's full-auto preset.
    #[arg(long, overrides_with = "no_full_auto")]
    pub full_auto: bool,

    /// Disable full-auto even if the defaults file enables it.
    #[arg(long, overrides_with = "full_auto")]
    pub no_full_auto: bool,
}

/// Options that only apply to `claude`.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Claude")]
pub struct ClaudeArgs {
    /// System prompt additions file, skipped if absent
    /// [default: .automation/claude-system.txt].
    #[arg(long, value_name = "PATH")]
    pub append_system_prompt_file: Option<PathBuf>,

    /// Allowed tools for headless mode [default: Read,Edit,Bash].
    #[arg(long, value_name = "LIST")]
    pub allowed_tools: Option<String>,

    /// Do not pass --allowedTools at all. Wins over --allowed-tools.
    #[arg(long)]
    pub no_allowed_tools: bool,
}

impl AgentCli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        AgentCli::parse()
    }

    /// The per-tool options given explicitly on the command line.
    ///
    /// An explicit `--allowed-tools` list re-enables the restriction even if
    /// the defaults file turned it off.
    pub fn overrides(&self) -> OptionOverrides {
        let full_auto = match (self.codex.full_auto, self.codex.no_full_auto) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        let no_allowed_tools = if self.claude.no_allowed_tools {
            Some(true)
        } else if self.claude.allowed_tools.is_some() {
            Some(false)
        } else {
            None
        };

        OptionOverrides {
            output_last_message: self.codex.output_last_message.clone(),
            full_auto,
            append_system_prompt_file: self.claude.append_system_prompt_file.clone(),
            allowed_tools: self.claude.allowed_tools.clone(),
            no_allowed_tools,
        }
    }

    /// Log filter implied by `-v` flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Serve the deploy status page.
///
/// The listen port comes from the required `PORT` environment variable and
/// the deploy date from the optional `DEPLOY_DATE`.
#[derive(Parser, Debug)]
#[command(name = "eat")]
#[command(author, version, about, long_about = None)]
pub struct ServeCli {
    /// Version file to read at startup [env: EAT_VERSION_FILE] [default: VERSION].
    #[arg(long, value_name = "PATH")]
    pub version_file: Option<PathBuf>,

    /// Address to bind [env: EAT_HOST] [default: 0.0.0.0].
    #[arg(long)]
    pub host: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServeCli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        ServeCli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_debug_assert() {
        AgentCli::command().debug_assert();
        ServeCli::command().debug_assert();
    }

    #[test]
    fn parse_claude_with_prompt() {
        let cli = AgentCli::try_parse_from(["eat-agent", "claude", "--prompt", "fix it"]).unwrap();
        assert_eq!(cli.tool, "claude");
        assert_eq!(cli.prompt.as_deref(), Some("fix it"));
        assert!(cli.prompt_file.is_none());
        assert_eq!(cli.repo, PathBuf::from("."));
        assert!(!cli.dry_run);
    }

    #[test]
    fn parse_codex_full() {
        let cli = AgentCli::try_parse_from([
            "eat-agent",
            "codex",
            "--repo",
            "/work/repo",
            "--prompt-file",
            "task.md",
            "--output-last-message",
            "last.txt",
            "--full-auto",
        ])
        .unwrap();

        assert_eq!(cli.tool, "codex");
        assert_eq!(cli.repo, PathBuf::from("/work/repo"));
        assert_eq!(cli.prompt_file, Some(PathBuf::from("task.md")));
        assert_eq!(cli.codex.output_last_message, Some(PathBuf::from("last.txt")));
        assert!(cli.codex.full_auto);
    }

    #[test]
    fn both_prompt_sources_rejected() {
        let err = AgentCli::try_parse_from([
            "eat-agent",
            "claude",
            "--prompt",
            "x",
            "--prompt-file",
            "p.md",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(err.exit_code(), crate::exit_codes::USAGE_ERROR);
    }

    #[test]
    fn empty_prompt_with_prompt_file_rejected() {
        let err = AgentCli::try_parse_from([
            "eat-agent",
            "claude",
            "--prompt",
            "",
            "--prompt-file",
            "p.md",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn missing_prompt_source_rejected() {
        let err = AgentCli::try_parse_from(["eat-agent", "codex"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), crate::exit_codes::USAGE_ERROR);
    }

    #[test]
    fn unknown_tool_rejected() {
        let err = AgentCli::try_parse_from(["eat-agent", "gemini", "--prompt", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn claude_flags_become_overrides() {
        let cli = AgentCli::try_parse_from([
            "eat-agent",
            "claude",
            "--prompt",
            "x",
            "--append-system-prompt-file",
            "sys.txt",
            "--allowed-tools",
            "Read",
            "--no-allowed-tools",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(
            overrides.append_system_prompt_file,
            Some(PathBuf::from("sys.txt"))
        );
        assert_eq!(overrides.allowed_tools.as_deref(), Some("Read"));
        assert_eq!(overrides.no_allowed_tools, Some(true));
        assert_eq!(overrides.full_auto, None);
    }

    #[test]
    fn explicit_allowed_tools_clears_no_allowed_tools() {
        let cli = AgentCli::try_parse_from([
            "eat-agent",
            "claude",
            "--prompt",
            "x",
            "--allowed-tools",
            "Read",
        ])
        .unwrap();
        assert_eq!(cli.overrides().no_allowed_tools, Some(false));
    }

    #[test]
    fn last_full_auto_flag_wins() {
        let cli = AgentCli::try_parse_from([
            "eat-agent",
            "codex",
            "--prompt",
            "x",
            "--full-auto",
            "--no-full-auto",
        ])
        .unwrap();
        assert_eq!(cli.overrides().full_auto, Some(false));

        let cli = AgentCli::try_parse_from([
            "eat-agent",
            "codex",
            "--prompt",
            "x",
            "--no-full-auto",
            "--full-auto",
        ])
        .unwrap();
        assert_eq!(cli.overrides().full_auto, Some(true));
    }

    #[test]
    fn unset_flags_defer_to_defaults_file() {
        let cli = AgentCli::try_parse_from(["eat-agent", "claude", "--prompt", "x"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.allowed_tools.is_none());
        assert!(overrides.append_system_prompt_file.is_none());
        assert!(overrides.full_auto.is_none());
        assert!(overrides.no_allowed_tools.is_none());
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        let cli = AgentCli::try_parse_from(["eat-agent", "codex", "--prompt", "x"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
        let cli = AgentCli::try_parse_from(["eat-agent", "codex", "--prompt", "x", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn parse_serve_defaults() {
        let cli = ServeCli::try_parse_from(["eat"]).unwrap();
        assert!(cli.version_file.is_none());
        assert!(cli.host.is_none());
        assert_eq!(cli.log_level, "info");
    }
}
