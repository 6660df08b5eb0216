//! Typed errors raised while cutting a release.

use std::io;

use thiserror::Error;

/// Main error type for release operations.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Tag resolution errors
    #[error("unable to resolve release tag")]
    Resolution {
        #[source]
        source: Box<ReleaseError>,
    },

    #[error("module dependency graph has an empty version")]
    EmptyVersion,

    #[error("invalid release tag `{0}`: tags must not start with '-'")]
    InvalidTag(String),

    #[error("Error parsing JSON")]
    InvalidGraph(#[from] serde_json::Error),

    // External process errors
    #[error("command failed: {status}; command output: {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Error executing command `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    // Filesystem errors
    #[error("filesystem error")]
    Filesystem(#[from] io::Error),
}

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Wrap any error as a tag resolution failure
    pub fn resolution(err: ReleaseError) -> Self {
        if err.is_resolution() {
            return err;
        }

        Self::Resolution {
            source: Box::new(err),
        }
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    #[cfg(test)]
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command { .. } | Self::Spawn { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ReleaseError::Command {
            command: "git tag v1 --force".into(),
            status: "exit status: 128".into(),
            stderr: "fatal: not a git repository".into(),
        };
        assert_eq!(
            err.to_string(),
            "command failed: exit status: 128; command output: fatal: not a git repository"
        );

        let err = ReleaseError::resolution(ReleaseError::EmptyVersion);
        assert_eq!(err.to_string(), "unable to resolve release tag");
    }

    #[test]
    fn test_causes_appear_once_in_report_chain() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err();
        let cause = json_err.to_string();
        let err = color_eyre::Report::new(ReleaseError::resolution(
            json_err.into(),
        ));

        let rendered = format!("{err:#}");

        let expected =
            format!("unable to resolve release tag: Error parsing JSON: {cause}");
        assert_eq!(rendered, expected);
        assert_eq!(rendered.matches(cause.as_str()).count(), 1);
    }

    #[test]
    fn test_spawn_error_names_os_error_once() {
        let err = color_eyre::Report::new(ReleaseError::Spawn {
            command: "nope-xyz-42".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        });

        assert_eq!(
            format!("{err:#}"),
            "Error executing command `nope-xyz-42`: not found"
        );
    }

    #[test]
    fn test_resolution_is_not_nested() {
        let err = ReleaseError::resolution(ReleaseError::resolution(
            ReleaseError::EmptyVersion,
        ));

        match err {
            ReleaseError::Resolution { source } => {
                assert!(matches!(*source, ReleaseError::EmptyVersion))
            }
            _ => panic!("expected resolution error"),
        }
    }

    #[test]
    fn test_error_helpers() {
        let err = ReleaseError::Spawn {
            command: "gh".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_command());
        assert!(!err.is_resolution());

        let err: ReleaseError =
            io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ReleaseError::Filesystem(_)));
    }

    #[test]
    fn test_from_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("{");
        assert!(json_err.is_err());
        let err: ReleaseError = json_err.unwrap_err().into();
        assert!(matches!(err, ReleaseError::InvalidGraph(_)));
    }
}
