//! Error types for texwclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole count.
///
/// Failures on individual files inside the tree are not errors at this level;
/// they are recorded on the affected node as a [`NodeError`](crate::NodeError).
#[derive(Error, Debug)]
pub enum TexwcError {
    /// The root document could not be found, not even under the fallback directory
    #[error("Root file {} not found.", .0.display())]
    RootNotFound(PathBuf),

    /// The current working directory could not be determined
    #[error("failed to determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}
