//! Release configuration and fixed project constants.
use crate::cli::Args;

/// Name embedded in the archive file name and the archive entry prefix.
pub const PROJECT_NAME: &str = "protobuf-javascript";

/// Repository the release is published to unless overridden.
pub const DEFAULT_GITHUB_REPO: &str = "gonzojive/protobuf-javascript";

/// Notes attached to every release unless overridden.
pub const DEFAULT_RELEASE_NOTES: &str =
    "experimental version with bzlmod support.";

/// Remote the release tag is pushed to.
pub const DEFAULT_REMOTE: &str = "origin";

/// Prefix of the temporary directory holding the release archive.
pub const TEMP_DIR_PREFIX: &str = "protobuf-javascript-release";

/// Everything a single release run needs to know, resolved from CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Explicit tag. `None` derives the tag from the bazel module version.
    pub tag: Option<String>,
    /// Print the release command instead of running it.
    pub dry_run: bool,
    /// Create the release as a draft.
    pub draft: bool,
    /// Target repository. `None` lets the GitHub CLI use the current one.
    pub repo: Option<String>,
    pub notes: String,
    pub remote: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag: None,
            dry_run: false,
            draft: true,
            repo: Some(DEFAULT_GITHUB_REPO.into()),
            notes: DEFAULT_RELEASE_NOTES.into(),
            remote: DEFAULT_REMOTE.into(),
        }
    }
}

impl From<&Args> for ReleaseConfig {
    fn from(args: &Args) -> Self {
        Self {
            tag: non_empty(&args.tag),
            dry_run: args.dry_run,
            draft: args.draft,
            repo: non_empty(&args.repo),
            notes: args.notes.clone(),
            remote: DEFAULT_REMOTE.into(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn converts_empty_strings_to_none() {
        let args =
            Args::try_parse_from(["upload-release", "--repo", ""]).unwrap();
        let config = ReleaseConfig::from(&args);

        assert_eq!(config.tag, None);
        assert_eq!(config.repo, None);
        assert_eq!(config.remote, DEFAULT_REMOTE);
    }

    #[test]
    fn default_config_matches_default_args() {
        let args = Args::try_parse_from(["upload-release"]).unwrap();
        assert_eq!(ReleaseConfig::from(&args), ReleaseConfig::default());
    }

    #[test]
    fn keeps_explicit_tag_verbatim() {
        let args =
            Args::try_parse_from(["upload-release", "--tag", " v1.0.0-rc.1"])
                .unwrap();
        let config = ReleaseConfig::from(&args);
        assert_eq!(config.tag.as_deref(), Some(" v1.0.0-rc.1"));
    }
}
