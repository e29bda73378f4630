//! Error types for path normalization.

/// Errors raised while normalizing a path string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `..` segment has no preceding component left to remove.
    #[error("too many backrefs in path '{path}'")]
    TooManyBackrefs { path: String },
}

/// Result type alias for path operations.
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_backrefs_display() {
        let err = PathError::TooManyBackrefs {
            path: "/../secret".to_string(),
        };
        assert_eq!(err.to_string(), "too many backrefs in path '/../secret'");
    }

    #[test]
    fn path_error_is_error() {
        let err: Box<dyn std::error::Error> = Box::new(PathError::TooManyBackrefs {
            path: "..".to_string(),
        });
        assert!(err.to_string().contains("backrefs"));
    }
}
