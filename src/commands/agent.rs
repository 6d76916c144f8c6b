//! Implementation of `eat-agent`.

use crate::agent::config::DEFAULT_CONFIG_PATH;
use crate::agent::{AgentCommand, AgentDefaults, AgentHandle, PromptSource, Tool, select_agent};
use crate::cli::AgentCli;
use crate::error::{EatError, Result};
use crate::fs::resolve_repo_dir;
use std::path::PathBuf;

/// Run the selected agent with the given prompt.
///
/// Every input is validated before anything is launched:
/// 1. Exactly one prompt source
/// 2. Repository directory exists
/// 3. Defaults file (if any) parses
/// 4. Tool name is supported
/// 5. Prompt loads
///
/// Then the agent runs (or, with `--dry-run`, its command is printed).
pub fn cmd_agent(cli: AgentCli) -> Result<()> {
    let source = PromptSource::from_args(cli.prompt.clone(), cli.prompt_file.clone())?;
    let repo_dir = resolve_repo_dir(&cli.repo)?;
    let defaults = load_defaults(cli.config.as_ref())?;
    let options = defaults.resolve(cli.overrides());
    let agent = select_agent(&cli.tool, &options)?;
    let prompt = source.load()?;

    if cli.dry_run {
        print_dry_run(&agent, &agent.command(&repo_dir, &prompt));
        return Ok(());
    }

    agent.run(&repo_dir, &prompt)?;
    Ok(())
}

/// Load the defaults file.
///
/// The implicit default path may be absent; an explicitly named one may not.
fn load_defaults(explicit: Option<&PathBuf>) -> Result<AgentDefaults> {
    match explicit {
        Some(path) => AgentDefaults::load(path)?.ok_or_else(|| {
            EatError::Config(format!(
                "agent defaults file '{}' does not exist",
                path.display()
            ))
        }),
        None => Ok(AgentDefaults::load(DEFAULT_CONFIG_PATH)?.unwrap_or_default()),
    }
}

fn print_dry_run(agent: &AgentHandle, cmd: &AgentCommand) {
    println!("Dry run - would execute:");
    println!();
    println!("  Agent:     {}", agent.tool());
    println!("  Command:   {}", cmd);
    if let Some(ref dir) = cmd.working_dir {
        println!("  Directory: {}", dir.display());
    }
    if agent.tool() == Tool::Codex {
        println!("  Stdin:     prompt ({} bytes)", cmd.stdin.as_ref().map_or(0, String::len));
    }
}
