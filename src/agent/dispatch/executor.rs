//! Agent subprocess executor.

use crate::agent::command::AgentCommand;
use crate::error::{EatError, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running an agent command to completion.
#[derive(Debug, Clone)]
pub struct AgentOutcome {
    /// Exit code of the process (None if killed by a signal).
    pub exit_code: Option<i32>,
    /// Wall-clock time from spawn to exit.
    pub duration: Duration,
}

impl AgentOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Spawn the command, feed its stdin if any, and wait for it to exit.
///
/// Failing to spawn is an error; a non-zero exit is not, it is reported in
/// the returned [`AgentOutcome`].
pub fn execute(cmd: &AgentCommand) -> Result<AgentOutcome> {
    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args);

    if let Some(ref dir) = cmd.working_dir {
        command.current_dir(dir);
    }

    command.stdin(if cmd.stdin.is_some() {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    let start_time = Instant::now();
    let mut child = command.spawn().map_err(|e| EatError::Launch {
        program: cmd.program.clone(),
        reason: format!("{}\nFix: ensure '{}' is installed and in PATH.", e, cmd.program),
    })?;

    if let Some(ref input) = cmd.stdin
        && let Some(mut stdin) = child.stdin.take()
    {
        // A child that exits without reading its input is judged by its
        // exit status, not by the broken pipe.
        match stdin.write_all(input.as_bytes()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(EatError::Launch {
                    program: cmd.program.clone(),
                    reason: format!("failed to write prompt to stdin: {}", e),
                });
            }
        }
        // Dropping stdin closes the pipe so the child sees EOF.
    }

    let status = child.wait().map_err(|e| EatError::Launch {
        program: cmd.program.clone(),
        reason: format!("failed to wait for process: {}", e),
    })?;

    Ok(AgentOutcome {
        exit_code: status.code(),
        duration: start_time.elapsed(),
    })
}

/// Execute the command and require a zero exit status.
///
/// A non-zero exit becomes [`EatError::ExternalProcess`] carrying the
/// child's exit code.
pub fn run_to_completion(cmd: &AgentCommand) -> Result<AgentOutcome> {
    let outcome = execute(cmd)?;
    tracing::info!(
        program = %cmd.program,
        exit_code = ?outcome.exit_code,
        duration_ms = outcome.duration.as_millis() as u64,
        "agent finished"
    );

    if !outcome.is_success() {
        return Err(EatError::ExternalProcess {
            program: cmd.program.clone(),
            code: outcome.exit_code,
        });
    }
    Ok(outcome)
}
