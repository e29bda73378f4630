//! Error types for trie operations.

use pathmap_path::PathError;

/// Errors raised by [`PathTrie`](crate::PathTrie) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// No value is stored at the exact normalized path.
    #[error("no value stored at {path}")]
    NotFound { path: String },

    /// The path argument could not be normalized.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl TrieError {
    /// `NotFound` for already-normalized components.
    pub(crate) fn not_found(parts: &[&str]) -> Self {
        TrieError::NotFound {
            path: format!("/{}", parts.join("/")),
        }
    }
}

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
