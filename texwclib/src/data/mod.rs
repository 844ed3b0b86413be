//! Text measurement: clean LaTeX source and count what is left.
//!
//! - **Cleaning**: ordered lexical passes that strip comments, math and commands
//! - **Counting**: CJK characters and English words in cleaned text
//! - **Statistics**: the [`WordCounts`] value type
//!
//! ## Example
//!
//! ```rust
//! use texwclib::data::{clean, count_cleaned};
//!
//! let cleaned = clean(r"\section{Results} 结果 % draft");
//! let counts = count_cleaned(&cleaned);
//! assert_eq!((counts.chinese, counts.english), (2, 1));
//! ```

pub mod cleaner;
pub mod counter;
pub mod stats;

pub use cleaner::{clean, strip_comments, IGNORED_COMMANDS};
pub use counter::{count_cleaned, count_text, is_cjk};
pub use stats::WordCounts;
