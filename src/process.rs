//! External process execution.
//!
//! Every tool the release touches (git, bazel, gh) is driven through the
//! [`CommandRunner`] trait so the pipeline can be exercised against a mock
//! runner without touching a real repository or the network.
use log::*;
use std::{
    fmt,
    process::{Command, Output, Stdio},
};

use crate::error::{ReleaseError, Result};

/// A program and its arguments, rendered as a single command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

#[cfg(test)]
impl CommandSpec {
    /// True when `args` appear in this order, back to back.
    pub fn contains_args(&self, args: &[&str]) -> bool {
        args.is_empty()
            || self.args.windows(args.len()).any(|window| window == args)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands, blocking until they exit.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run a command with stdout streamed to the terminal and stderr
    /// captured for the error report.
    fn run(&self, cmd: &CommandSpec) -> Result<()>;

    /// Run a command and return its stdout.
    fn capture(&self, cmd: &CommandSpec) -> Result<String>;
}

/// [`CommandRunner`] backed by real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn execute(cmd: &CommandSpec, stdout: Stdio) -> Result<Output> {
        info!("Running command: {cmd}");

        let output = cmd
            .to_command()
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ReleaseError::Spawn {
                command: cmd.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ReleaseError::Command {
                command: cmd.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        debug!("command succeeded: {cmd}");

        Ok(output)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<()> {
        Self::execute(cmd, Stdio::inherit())?;
        Ok(())
    }

    fn capture(&self, cmd: &CommandSpec) -> Result<String> {
        let output = Self::execute(cmd, Stdio::piped())?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_full_command_line() {
        let cmd = CommandSpec::new("git")
            .args(["push", "origin", "tag"])
            .arg("v1.0.0")
            .arg("--force");

        assert_eq!(cmd.to_string(), "git push origin tag v1.0.0 --force");
    }

    #[test]
    fn displays_program_without_args() {
        assert_eq!(CommandSpec::new("gh").to_string(), "gh");
    }

    #[test]
    fn matches_adjacent_args() {
        let cmd = CommandSpec::new("gh").args(["--title", "v1", "--draft"]);

        assert!(cmd.contains_args(&["--title", "v1"]));
        assert!(cmd.contains_args(&["--draft"]));
        assert!(cmd.contains_args(&[]));
        assert!(!cmd.contains_args(&["--title", "--draft"]));
    }

    #[cfg(unix)]
    #[test_log::test]
    fn captures_stdout() {
        let cmd = CommandSpec::new("sh").args(["-c", "printf hello"]);
        let output = SystemRunner.capture(&cmd).unwrap();
        assert_eq!(output, "hello");
    }

    #[cfg(unix)]
    #[test_log::test]
    fn reports_stderr_on_failure() {
        let cmd =
            CommandSpec::new("sh").args(["-c", "printf broken >&2; exit 3"]);

        let err = SystemRunner.run(&cmd).unwrap_err();

        match err {
            ReleaseError::Command {
                command, stderr, ..
            } => {
                assert_eq!(command, "sh -c printf broken >&2; exit 3");
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test_log::test]
    fn reports_missing_program() {
        let cmd = CommandSpec::new("definitely-not-a-real-program-4242");
        let err = SystemRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, ReleaseError::Spawn { .. }));
    }
}
