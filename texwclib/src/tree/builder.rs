//! Recursive document tree construction.
//!
//! The builder walks includes depth-first in source order. A single
//! [`VisitedSet`] is threaded through the whole walk: once a file has been
//! visited (by canonical path) anywhere in the tree, every later reference to
//! it is dropped without leaving a node behind. That is what makes
//! self-including documents terminate.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::counter::count_text;
use crate::source::includes::extract_includes;
use crate::source::resolver::PathResolver;

use super::node::{DocumentNode, NodeError};

/// Canonical paths already visited during one build.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    paths: HashSet<PathBuf>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Record `path`; returns `false` if it was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Builds [`DocumentNode`] trees using a [`PathResolver`].
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    resolver: &'a PathResolver,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// Build the node for `path` and, recursively, for everything it includes.
    ///
    /// Returns `None` when `path` was already visited, in which case the
    /// caller must not add anything to the tree. A missing or unreadable file
    /// still yields a node, with zero counts and its error set.
    pub fn build(&self, path: &Path, visited: &mut VisitedSet) -> Option<DocumentNode> {
        let location = self.resolver.locate(path);
        let key = canonical_key(&location);

        if visited.contains(&key) {
            tracing::debug!("skipping already visited {}", path.display());
            return None;
        }
        visited.insert(key);

        // Missing paths stay in the visited set so a repeated reference to
        // the same location is omitted rather than reported twice.
        if !location.exists() {
            tracing::debug!("include {} not found", path.display());
            return Some(DocumentNode::failed(path.to_path_buf(), NodeError::NotFound));
        }

        let content = match fs::read_to_string(&location) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", location.display(), e);
                return Some(DocumentNode::failed(
                    path.to_path_buf(),
                    NodeError::Read(e.to_string()),
                ));
            }
        };

        tracing::debug!("counting {}", path.display());

        let includes = extract_includes(&content);
        let counts = count_text(&content);

        let children = includes
            .iter()
            .filter_map(|target| {
                let child = self.resolver.resolve_include(target, Some(path));
                self.build(&child, visited)
            })
            .collect();

        Some(DocumentNode::new(path.to_path_buf(), counts, children))
    }
}

/// Key used for cycle detection: the canonical path when the file exists,
/// otherwise the lexically absolute one.
fn canonical_key(location: &Path) -> PathBuf {
    fs::canonicalize(location)
        .or_else(|_| std::path::absolute(location))
        .unwrap_or_else(|_| location.to_path_buf())
}
