//! Agent subprocess execution.
//!
//! Launches an assembled [`AgentCommand`](crate::agent::AgentCommand) and
//! blocks until it exits. The child inherits stdout and stderr, so the
//! agent's own output streams straight to the terminal. There is no timeout
//! and no retry.

mod executor;

pub use executor::{AgentOutcome, execute, run_to_completion};
