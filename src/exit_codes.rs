//! Exit code constants for the eat binaries.
//!
//! - 0: Success
//! - 1: Failure (unknown tool, bad configuration, server failure)
//! - 2: Usage error (same code clap uses for argument errors)
//! - 127: External executable could not be launched
//!
//! When an agent process exits non-zero, `eat-agent` exits with that
//! process's own code instead.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Generic failure: unsupported tool, configuration or server error.
pub const FAILURE: i32 = 1;

/// Usage error: bad arguments, unreadable prompt file, missing repo directory.
pub const USAGE_ERROR: i32 = 2;

/// The external agent executable was not found or could not be spawned.
pub const LAUNCH_FAILURE: i32 = 127;

/// Clamp an exit code into the range a process can actually report.
///
/// Out-of-range codes (negative, or above 255 as on Windows) collapse to
/// [`FAILURE`] so a failing child never turns into a successful exit.
pub fn to_process_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(FAILURE as u8)
}
