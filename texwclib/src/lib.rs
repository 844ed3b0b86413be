//! # texwclib
//!
//! Word counting for LaTeX document trees, for authors tracking a thesis or
//! paper against a length target.
//!
//! ## Overview
//!
//! Starting from a root `.tex` file the library follows `\input{...}` and
//! `\include{...}` directives recursively and measures every file it reaches:
//!
//! - **Chinese**: CJK Unified Ideographs, one unit per character
//! - **English**: whitespace-separated words after punctuation is removed
//!
//! Text is cleaned lexically before counting (comments, math, and a fixed set
//! of non-content commands are stripped); there is no LaTeX parser. Each file
//! becomes a [`DocumentNode`] holding its own counts, and totals are derived by
//! aggregation. Files that are missing or unreadable become nodes carrying an
//! error instead of aborting the count, and a file reached a second time is
//! left out of the tree so include cycles terminate.
//!
//! ## Example
//!
//! ```rust
//! use texwclib::{count_document, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.tex"), "Hello world. \\input{b}").unwrap();
//! fs::write(dir.path().join("b.tex"), "你好 test").unwrap();
//!
//! let report = count_document("a.tex", CountOptions::new().working_dir(dir.path())).unwrap();
//! assert_eq!(report.root.children().len(), 1);
//! assert_eq!(report.total.chinese, 2);
//! assert_eq!(report.total.english, 3);
//! assert_eq!(report.file_count, 2);
//! ```

pub mod data;
pub mod error;
pub mod source;
pub mod tree;

pub use data::{clean, count_cleaned, count_text, WordCounts};
pub use error::TexwcError;
pub use source::{extract_includes, PathResolver, DEFAULT_FALLBACK_DIR, DEFAULT_ROOT};
pub use tree::{aggregate, DocumentNode, NodeError, TreeBuilder, VisitedSet};

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Result type for texwclib operations
pub type Result<T> = std::result::Result<T, TexwcError>;

/// Options for counting a document tree.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Directory relative paths are resolved against (None = process cwd)
    pub working_dir: Option<PathBuf>,
    /// Directory tried when the root does not exist as given
    pub fallback_dir: PathBuf,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            working_dir: None,
            fallback_dir: PathBuf::from(DEFAULT_FALLBACK_DIR),
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve paths against `dir` instead of the current directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set the fallback directory for the root document.
    pub fn fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = dir.into();
        self
    }
}

/// Result of counting a document tree.
#[derive(Debug, Clone, Serialize)]
pub struct CountReport {
    /// Root of the include tree
    pub root: DocumentNode,
    /// Counts aggregated over the whole tree
    pub total: WordCounts,
    /// Number of nodes in the tree, error nodes included
    pub file_count: usize,
}

/// Count a LaTeX document and everything it includes.
///
/// The root is looked up as given, then under the fallback directory; if
/// neither exists the count fails with [`TexwcError::RootNotFound`]. Every
/// other file problem is recorded on the affected node.
pub fn count_document(root: impl AsRef<Path>, options: CountOptions) -> Result<CountReport> {
    let resolver = match options.working_dir {
        Some(dir) => PathResolver::new(dir),
        None => PathResolver::current()?,
    };

    let root_path = resolver.resolve_root(root.as_ref(), &options.fallback_dir)?;

    let mut visited = VisitedSet::new();
    // A fresh visited set never rejects the first path.
    let root = TreeBuilder::new(&resolver)
        .build(&root_path, &mut visited)
        .ok_or_else(|| TexwcError::RootNotFound(root_path.clone()))?;

    tracing::debug!("visited {} files", visited.len());

    Ok(CountReport {
        total: root.aggregate(),
        file_count: root.file_count(),
        root,
    })
}
