//! PathMap path layer.
//!
//! The string helpers in this crate define what it means for two paths to
//! be "the same" everywhere else in PathMap:
//! - `components` / `decompose`: split into normalized components
//! - `normalize`: canonical string, absoluteness preserved
//! - `absolute`: canonical string rooted at `/`
//! - `join`: combine a base with a relative or absolute name
//!
//! A `..` that would climb above the start of the path is an error
//! ([`PathError::TooManyBackrefs`]), never silently dropped.
//!
//! `Path` is the owned form of a normalized absolute path.
//!
//! # Example
//!
//! ```rust
//! use pathmap_path::{absolute, Path, PathError};
//!
//! assert_eq!(absolute("hello/world"), absolute("/hello/there/../world"));
//! assert_eq!(Path::parse("hello/world").unwrap().to_string(), "/hello/world");
//! assert!(matches!(absolute("/../hello"), Err(PathError::TooManyBackrefs { .. })));
//! ```

mod error;
mod normalize;
mod path;

pub use error::{PathError, Result};
pub use normalize::{
    absolute, basename, components, decompose, dirname, is_absolute, is_prefix, join, normalize,
    split, SEPARATOR,
};
pub use path::Path;
