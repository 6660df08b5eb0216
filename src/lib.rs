pub mod bazel;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod orchestrator;
pub mod process;
pub mod result;

pub use cli::Args;
pub use config::ReleaseConfig;
pub use error::ReleaseError;
pub use orchestrator::{Orchestrator, ReleaseOutcome};
pub use process::{CommandRunner, CommandSpec, SystemRunner};
pub use result::Result;
