//! Git tagging and source archival through the git CLI.
use std::path::{Path, PathBuf};

use crate::{
    config::PROJECT_NAME,
    error::Result,
    process::{CommandRunner, CommandSpec},
};

/// File name of the source archive for `tag`.
pub fn archive_file_name(tag: &str) -> String {
    format!("{PROJECT_NAME}-{tag}.zip")
}

/// Directory every archive entry is nested under.
pub fn archive_prefix(tag: &str) -> String {
    format!("{PROJECT_NAME}-{tag}/")
}

pub fn tag_command(tag: &str) -> CommandSpec {
    CommandSpec::new("git").args(["tag", tag, "--force"])
}

pub fn push_tag_command(remote: &str, tag: &str) -> CommandSpec {
    CommandSpec::new("git").args(["push", remote, "tag", tag, "--force"])
}

pub fn archive_command(tag: &str, output: &Path) -> CommandSpec {
    CommandSpec::new("git")
        .args(["archive", "--format", "zip", "--output"])
        .arg(output.to_string_lossy())
        .arg("--prefix")
        .arg(archive_prefix(tag))
        .arg(tag)
}

/// Point `tag` at HEAD, replacing any existing local tag.
pub fn create_tag(runner: &dyn CommandRunner, tag: &str) -> Result<()> {
    runner.run(&tag_command(tag))
}

/// Push `tag` to `remote`, replacing any existing remote tag.
pub fn push_tag(
    runner: &dyn CommandRunner,
    remote: &str,
    tag: &str,
) -> Result<()> {
    runner.run(&push_tag_command(remote, tag))
}

/// Write a zip of the tree at `tag` into `dir` and return its path.
pub fn archive(
    runner: &dyn CommandRunner,
    tag: &str,
    dir: &Path,
) -> Result<PathBuf> {
    let output = dir.join(archive_file_name(tag));
    runner.run(&archive_command(tag, &output))?;
    Ok(output)
}
