//! Bazel module dependency graph lookup.
use log::*;
use serde::Deserialize;

use crate::{
    error::{ReleaseError, Result},
    process::{CommandRunner, CommandSpec},
};

/// One node of `bazel mod deps --output json`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepsNode {
    pub key: String,
    pub name: String,
    pub version: String,
    pub dependencies: Vec<DepsNode>,
    pub indirect_dependencies: Vec<DepsNode>,
    pub cycles: Vec<serde_json::Value>,
    pub root: bool,
}

impl DepsNode {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub fn mod_deps_command() -> CommandSpec {
    CommandSpec::new("bazel").args(["mod", "deps", "--output", "json"])
}

/// Query the dependency graph of the root bazel module.
pub fn mod_deps(runner: &dyn CommandRunner) -> Result<DepsNode> {
    let output = runner
        .capture(&mod_deps_command())
        .map_err(ReleaseError::resolution)?;

    let node = DepsNode::parse(&output).map_err(ReleaseError::resolution)?;

    debug!(
        "root module: key={}, name={}, version={}, dependencies={}",
        node.key,
        node.name,
        node.version,
        node.dependencies.len()
    );

    Ok(node)
}
