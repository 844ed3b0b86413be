//! Document tree: build the include hierarchy and aggregate it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use texwclib::tree::{TreeBuilder, VisitedSet};
//! use texwclib::source::PathResolver;
//!
//! let resolver = PathResolver::current()?;
//! let mut visited = VisitedSet::new();
//! if let Some(root) = TreeBuilder::new(&resolver).build("main.tex".as_ref(), &mut visited) {
//!     println!("{} units", root.aggregate().total);
//! }
//! ```

pub mod builder;
pub mod node;

pub use builder::{TreeBuilder, VisitedSet};
pub use node::{aggregate, DocumentNode, NodeError};
