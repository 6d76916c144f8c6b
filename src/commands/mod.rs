//! Command implementations for the eat binaries.

mod agent;
mod serve;

pub use agent::cmd_agent;
pub use serve::cmd_serve;
