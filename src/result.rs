//! Result type used by the release pipeline.
//!
//! Low level operations return [`crate::error::Result`] with a typed
//! [`crate::error::ReleaseError`]. The pipeline stages lift those into a
//! `color-eyre` report and attach the name of the failing stage with
//! `.wrap_err()`, so the binary can print the full chain on failure:
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//!
//! git::create_tag(runner, &tag).wrap_err("Failed to create Git tag")?;
//! ```
//!
//! The typed error stays reachable through `Report::downcast_ref`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the pipeline and the binary.
pub type Result<T> = EyreResult<T>;
