//! GitHub release creation through the `gh` CLI.
use std::path::{Path, PathBuf};

use crate::{config::ReleaseConfig, process::CommandSpec};

/// A `gh release create` invocation for one tag and one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCommand {
    pub repo: Option<String>,
    pub tag: String,
    pub asset: PathBuf,
    pub notes: String,
    pub draft: bool,
}

impl ReleaseCommand {
    pub fn new(config: &ReleaseConfig, tag: &str, asset: &Path) -> Self {
        Self {
            repo: config.repo.clone(),
            tag: tag.to_string(),
            asset: asset.to_path_buf(),
            notes: config.notes.clone(),
            draft: config.draft,
        }
    }

    /// Releases are always marked as pre-releases and the tag must already
    /// exist on the remote.
    pub fn to_spec(&self) -> CommandSpec {
        let mut cmd = CommandSpec::new("gh");

        if let Some(repo) = &self.repo {
            cmd = cmd.args(["--repo", repo.as_str()]);
        }

        cmd = cmd
            .args(["release", "create", self.tag.as_str()])
            .arg(self.asset.to_string_lossy())
            .args(["--verify-tag", "--title", self.tag.as_str()])
            .args(["--notes", self.notes.as_str()])
            .arg("--prerelease");

        if self.draft {
            cmd = cmd.arg("--draft");
        }

        cmd
    }
}
