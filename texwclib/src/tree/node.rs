//! Document tree nodes.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::data::stats::WordCounts;

/// Why a referenced file contributed nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// Nothing exists at the resolved location
    #[error("File not found")]
    NotFound,

    /// The file exists but could not be read as UTF-8 text
    #[error("{0}")]
    Read(String),
}

impl Serialize for NodeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One processed (or attempted) file and the includes it pulled in.
///
/// A node's own counts cover only its own text. Totals including descendants
/// are derived on demand by [`DocumentNode::aggregate`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    path: PathBuf,
    counts: WordCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<NodeError>,
    children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// A successfully read file.
    pub fn new(path: PathBuf, counts: WordCounts, children: Vec<DocumentNode>) -> Self {
        Self {
            path,
            counts,
            error: None,
            children,
        }
    }

    /// A file that could not be counted: zero counts, no children.
    pub fn failed(path: PathBuf, error: NodeError) -> Self {
        Self {
            path,
            counts: WordCounts::zero(),
            error: Some(error),
            children: Vec::new(),
        }
    }

    /// Path as referenced, relative to the working directory unless it was
    /// given absolute.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Counts for this file's own text.
    pub fn counts(&self) -> WordCounts {
        self.counts
    }

    pub fn error(&self) -> Option<&NodeError> {
        self.error.as_ref()
    }

    pub fn children(&self) -> &[DocumentNode] {
        &self.children
    }

    /// Own counts plus the aggregate of every child.
    pub fn aggregate(&self) -> WordCounts {
        self.counts + self.children.iter().map(DocumentNode::aggregate).sum::<WordCounts>()
    }

    /// Number of nodes in this subtree, error nodes included.
    pub fn file_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DocumentNode::file_count)
            .sum::<usize>()
    }
}

/// Sum a tree's counts bottom-up.
pub fn aggregate(node: &DocumentNode) -> WordCounts {
    node.aggregate()
}
