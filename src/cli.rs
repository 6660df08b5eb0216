//! CLI argument parsing.
use clap::{ArgAction, Parser};

use crate::config::{DEFAULT_GITHUB_REPO, DEFAULT_RELEASE_NOTES};

/// Tag the current commit, archive it and publish a GitHub release.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// The Git tag to create the release for. Defaults to the version of
    /// the root bazel module.
    pub tag: String,

    #[arg(long, default_value_t = false)]
    /// Skip creating the GitHub release and print the command instead.
    pub dry_run: bool,

    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    /// Whether to create the release in a draft state.
    pub draft: bool,

    #[arg(long, default_value = DEFAULT_GITHUB_REPO)]
    /// GitHub repository (owner/name) to publish to. Pass an empty value to
    /// use the repository of the current directory.
    pub repo: String,

    #[arg(long, default_value = DEFAULT_RELEASE_NOTES)]
    /// Release notes attached to the GitHub release.
    pub notes: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
