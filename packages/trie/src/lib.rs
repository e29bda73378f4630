//! PathMap trie layer.
//!
//! `PathTrie<T>` is a map keyed by normalized paths, stored one component
//! per level:
//! - point operations (`get`, `set`, `delete`, `pop`) cost O(path depth)
//! - `clear` and `take_subtree` detach a whole subtree in one edit
//! - `items`, `keys`, `values` and `names` only walk the subtree under
//!   their prefix
//!
//! Every path argument is normalized first; a path whose `..` would climb
//! above the root fails with [`TrieError::Path`].
//!
//! The trie is not internally synchronized. Share it behind a single lock
//! (for example `Mutex<PathTrie<T>>`) if several threads need it.
//!
//! # Example
//!
//! ```rust
//! use pathmap_trie::{PathTrie, TrieError};
//!
//! let mut handles: PathTrie<u64> = PathTrie::new();
//! handles.set("/projects/app/main.rs", 3)?;
//! handles.set("/projects/app/lib.rs", 4)?;
//!
//! assert_eq!(handles.names("/projects")?.collect::<Vec<_>>(), vec!["app"]);
//! assert_eq!(handles.pop("/projects/app/lib.rs", 0)?, 4);
//! assert!(matches!(
//!     handles.delete("/projects/app/lib.rs"),
//!     Err(TrieError::NotFound { .. })
//! ));
//! assert!(matches!(
//!     handles.get("/../projects/app/main.rs"),
//!     Err(TrieError::Path(_))
//! ));
//! # Ok::<(), TrieError>(())
//! ```

mod codec;
mod error;
mod iter;
mod path_trie;

pub use error::{Result, TrieError};
pub use iter::{Items, Keys, Names, Values};
pub use path_trie::PathTrie;
