//! Path resolution for root documents and include targets.
//!
//! All relative paths are interpreted against the resolver's working
//! directory rather than the process's, so a resolver can be pointed at any
//! project root.

use std::path::{Path, PathBuf};

use crate::error::TexwcError;
use crate::Result;

/// Root document used when none is given.
pub const DEFAULT_ROOT: &str = "body/graduate/content.tex";

/// Directory tried for a root document that does not exist as given.
pub const DEFAULT_FALLBACK_DIR: &str = "body/graduate";

const TEX_EXTENSION: &str = ".tex";

/// Resolves document paths against a working directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    working_dir: PathBuf,
}

impl PathResolver {
    /// Resolver rooted at `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Resolver rooted at the process's current directory.
    pub fn current() -> Result<Self> {
        let dir = std::env::current_dir().map_err(TexwcError::WorkingDir)?;
        Ok(Self::new(dir))
    }

    /// The on-disk location of `path`. Absolute paths are returned unchanged.
    pub fn locate(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }

    /// Whether `path` exists relative to the working directory.
    pub fn exists(&self, path: &Path) -> bool {
        self.locate(path).exists()
    }

    /// Map an include target to a candidate file.
    ///
    /// A missing `.tex` suffix is appended. The target is tried relative to
    /// the working directory, then relative to the directory containing
    /// `referrer`. If neither exists the working-directory candidate is
    /// returned anyway, so the failure shows up when the file is read.
    pub fn resolve_include(&self, target: &str, referrer: Option<&Path>) -> PathBuf {
        let target = if target.ends_with(TEX_EXTENSION) {
            target.to_string()
        } else {
            format!("{target}{TEX_EXTENSION}")
        };

        let candidate = PathBuf::from(&target);
        if self.exists(&candidate) {
            return candidate;
        }

        if let Some(referrer) = referrer {
            let sibling = referrer
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(&target);
            if self.exists(&sibling) {
                return sibling;
            }
        }

        candidate
    }

    /// Locate the root document, trying `fallback_dir/root` when `root` does
    /// not exist as given.
    pub fn resolve_root(&self, root: &Path, fallback_dir: &Path) -> Result<PathBuf> {
        if self.exists(root) {
            return Ok(root.to_path_buf());
        }

        let alternative = fallback_dir.join(root);
        if self.exists(&alternative) {
            tracing::debug!(
                "root {} found under fallback directory as {}",
                root.display(),
                alternative.display()
            );
            return Ok(alternative);
        }

        Err(TexwcError::RootNotFound(root.to_path_buf()))
    }
}
