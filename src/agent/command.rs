//! Assembled external-process invocations.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// A fully assembled agent invocation, ready to launch.
///
/// Building one has no side effects, so the exact argument list an agent
/// would receive can be inspected in tests and dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCommand {
    /// Executable name, looked up on `PATH`.
    pub program: String,
    /// Arguments in order, excluding the program itself.
    pub args: Vec<OsString>,
    /// Working directory for the child; `None` inherits ours.
    pub working_dir: Option<PathBuf>,
    /// Text written to the child's stdin, which is then closed.
    pub stdin: Option<String>,
}

impl AgentCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

#[cfg(test)]
impl AgentCommand {
    /// Number of times `arg` appears in the argument list.
    pub(crate) fn count(&self, arg: &str) -> usize {
        self.args.iter().filter(|a| a.as_os_str() == arg).count()
    }

    pub(crate) fn contains(&self, arg: &str) -> bool {
        self.count(arg) > 0
    }

    /// The value following `flag`, if the flag is present and the value is UTF-8.
    pub(crate) fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a.as_os_str() == flag)
            .and_then(|i| self.args.get(i + 1))
            .and_then(|a| a.to_str())
    }
}

impl fmt::Display for AgentCommand {
    /// Shell-quoted command line, suitable for logs and copy-paste.
    ///
    /// Non-UTF-8 arguments are shown lossily; the child still receives them intact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(Cow::Borrowed(self.program.as_str()))
            .chain(self.args.iter().map(|a| a.to_string_lossy()));
        f.write_str(&shell_words::join(words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_args_in_order() {
        let cmd = AgentCommand::new("codex")
            .arg("exec")
            .args(["-C", "/repo"])
            .arg("-");
        assert_eq!(cmd.program, "codex");
        assert_eq!(cmd.args, vec!["exec", "-C", "/repo", "-"]);
        assert!(cmd.working_dir.is_none());
        assert!(cmd.stdin.is_none());
    }

    #[test]
    fn value_of_returns_following_argument() {
        let cmd = AgentCommand::new("claude").args(["--allowedTools", "Read,Edit"]);
        assert_eq!(cmd.value_of("--allowedTools"), Some("Read,Edit"));
        assert_eq!(cmd.value_of("--missing"), None);
    }

    #[test]
    fn value_of_trailing_flag_is_none() {
        let cmd = AgentCommand::new("codex").arg("--full-auto");
        assert_eq!(cmd.value_of("--full-auto"), None);
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = AgentCommand::new("claude").args(["-p", "fix the bug"]);
        assert_eq!(cmd.to_string(), "claude -p 'fix the bug'");
    }

    #[test]
    fn count_and_contains() {
        let cmd = AgentCommand::new("x").args(["-a", "-b", "-a"]);
        assert_eq!(cmd.count("-a"), 2);
        assert!(cmd.contains("-b"));
        assert!(!cmd.contains("-c"));
    }
}
