//! Process specifications produced by the command builders.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// A fully-resolved, ready-to-launch process description.
///
/// Created fresh per invocation and not retained after launch. The argument
/// string is kept in its substituted form; splitting into an argument vector
/// happens at spawn time via [`ProcessSpec::args_vec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Absolute path to the executable
    pub program: PathBuf,

    /// Argument string, after template substitution
    pub args: String,

    /// Request a hidden window. Advisory: only meaningful when a GUI host
    /// performs the spawn; the CLI spawner ignores it.
    pub hidden: bool,
}

impl ProcessSpec {
    pub fn new(program: impl Into<PathBuf>, args: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: args.into(),
            hidden: true,
        }
    }

    /// Split the argument string into an argument vector.
    ///
    /// Uses shell-style word splitting so quoted arguments (e.g. a file path
    /// with spaces) survive as single words. Unbalanced quoting is a
    /// configuration error, not a panic.
    pub fn args_vec(&self) -> Result<Vec<String>> {
        shlex::split(&self.args)
            .ok_or_else(|| Error::args(format!("unbalanced quoting in {:?}", self.args)))
    }
}
