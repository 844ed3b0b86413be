//! Source discovery: find the files a document pulls in.
//!
//! - **Include extraction**: `\input{...}` / `\include{...}` targets of a file
//! - **Path resolution**: map targets and the root document to files on disk
//!
//! ## Example
//!
//! ```rust,ignore
//! use texwclib::source::{extract_includes, PathResolver};
//!
//! let resolver = PathResolver::current()?;
//! for target in extract_includes(&text) {
//!     let path = resolver.resolve_include(&target, Some(referrer));
//! }
//! ```

pub mod includes;
pub mod resolver;

pub use includes::extract_includes;
pub use resolver::{PathResolver, DEFAULT_FALLBACK_DIR, DEFAULT_ROOT};
