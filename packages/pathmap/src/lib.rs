//! PathMap: a dictionary whose keys are filesystem-style paths.
//!
//! Keys are normalized before use, so `"hello/world"` and
//! `"/hello/there/../world"` are the same entry. Listing, enumerating and
//! clearing can be scoped to everything under a path prefix without
//! touching the rest of the map.
//!
//! ```rust
//! use pathmap::PathTrie;
//!
//! let mut map: PathTrie<i32> = PathTrie::new();
//! map.set("hello/world", 42)?;
//! assert_eq!(map.get("/hello/there/../world"), Ok(&42));
//!
//! // `..` cannot climb above the root.
//! assert!(map.get("/../hello/world").is_err());
//! # Ok::<(), pathmap::TrieError>(())
//! ```

pub use pathmap_path::{
    absolute, basename, components, decompose, dirname, is_absolute, is_prefix, join, normalize,
    path, split, Path, PathError,
};
pub use pathmap_trie::{Items, Keys, Names, PathTrie, TrieError, Values};
