//! Release pipeline: resolve tag, tag, push, archive, publish.
//!
//! Stages run strictly in order and the first failure aborts the run.
//! Completed stages are not rolled back, so a tag that was already pushed
//! stays on the remote when archiving or publishing fails.
use color_eyre::eyre::WrapErr;
use log::*;
use std::{
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    bazel,
    config::{ReleaseConfig, TEMP_DIR_PREFIX},
    error::ReleaseError,
    git,
    github::ReleaseCommand,
    process::{CommandRunner, CommandSpec},
    result::Result,
};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub tag: String,
    /// Location the archive was written to. The file is removed together
    /// with its temporary directory before the outcome is returned.
    pub archive: PathBuf,
    pub command: CommandSpec,
    /// False when the release command was only printed.
    pub published: bool,
}

pub struct Orchestrator {
    config: ReleaseConfig,
    runner: Box<dyn CommandRunner>,
}

impl Orchestrator {
    pub fn new(
        config: ReleaseConfig,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self { config, runner }
    }

    /// Use the explicit tag when one was given, otherwise the version of
    /// the root bazel module. Tags are passed to git and gh as positional
    /// arguments, so a leading '-' is rejected.
    pub fn resolve_tag(&self) -> Result<String> {
        if let Some(tag) = &self.config.tag {
            debug!("using explicit tag: {tag}");
            return Ok(checked_tag(tag.clone())?);
        }

        info!("resolving tag from bazel module version");

        let node = bazel::mod_deps(self.runner.as_ref())
            .wrap_err("Error getting default tag from bazel module")?;

        if node.version.is_empty() {
            return Err(ReleaseError::resolution(ReleaseError::EmptyVersion))
                .wrap_err("Error getting default tag from bazel module");
        }

        checked_tag(node.version)
            .wrap_err("Error getting default tag from bazel module")
    }

    /// Run the whole pipeline. A dry run describes the skipped release
    /// command on `out`.
    pub fn publish(&self, out: &mut dyn Write) -> Result<ReleaseOutcome> {
        let tag = self.resolve_tag()?;

        info!("release tag: {tag}");

        let tmp_dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(ReleaseError::from)
            .wrap_err("Failed to create temporary directory")?;

        debug!("created temporary directory: {}", tmp_dir.path().display());

        let runner = self.runner.as_ref();

        git::create_tag(runner, &tag).wrap_err("Failed to create Git tag")?;

        git::push_tag(runner, &self.config.remote, &tag)
            .wrap_err("Failed to push Git tag")?;

        let archive = git::archive(runner, &tag, tmp_dir.path())
            .wrap_err("Failed to archive code")?;

        info!("archived source to {}", archive.display());

        let release = ReleaseCommand::new(&self.config, &tag, &archive);
        let command = release.to_spec();

        let published = self
            .create_release(&command, out)
            .wrap_err("Failed to create GitHub release")?;

        Ok(ReleaseOutcome {
            tag,
            archive,
            command,
            published,
        })
    }

    fn create_release(
        &self,
        command: &CommandSpec,
        out: &mut dyn Write,
    ) -> Result<bool> {
        if self.config.dry_run {
            write_skipped_release(out, command)?;
            return Ok(false);
        }

        self.runner.run(command)?;

        Ok(true)
    }
}

fn checked_tag(tag: String) -> std::result::Result<String, ReleaseError> {
    if tag.starts_with('-') {
        return Err(ReleaseError::resolution(ReleaseError::InvalidTag(tag)));
    }

    Ok(tag)
}

/// Describe the release command a dry run did not execute.
pub fn write_skipped_release(
    out: &mut dyn Write,
    command: &CommandSpec,
) -> io::Result<()> {
    writeln!(out, "SKIPPING RELEASE -- GitHub release command would be:")?;
    writeln!(out, "  {command}")?;
    out.flush()
}
