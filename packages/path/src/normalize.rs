//! String-level path helpers.
//!
//! Every function here treats `/` as the only separator, drops empty and
//! `.` segments, and resolves `..` against the preceding component. A `..`
//! with nothing left to remove fails with [`PathError::TooManyBackrefs`]
//! instead of being clamped, so `/../secret` never aliases `/secret`.

use crate::error::{PathError, Result};

/// Separator between path components.
pub const SEPARATOR: char = '/';

/// Split `path` into its normalized components, borrowing from the input.
///
/// ```rust
/// use pathmap_path::components;
///
/// assert_eq!(components("/a//b/./c/../d/").unwrap(), vec!["a", "b", "d"]);
/// assert!(components("/").unwrap().is_empty());
/// assert!(components("/../etc").is_err());
/// ```
pub fn components(path: &str) -> Result<Vec<&str>> {
    let mut out = Vec::new();
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                if out.pop().is_none() {
                    return Err(PathError::TooManyBackrefs {
                        path: path.to_string(),
                    });
                }
            }
            name => out.push(name),
        }
    }
    Ok(out)
}

/// Split `path` into owned, normalized, non-empty components.
pub fn decompose(path: &str) -> Result<Vec<String>> {
    Ok(components(path)?.into_iter().map(str::to_string).collect())
}

/// True if `path` starts at the root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Canonical form of `path`, keeping it absolute or relative as given.
///
/// ```rust
/// use pathmap_path::normalize;
///
/// assert_eq!(normalize("a/./b/").unwrap(), "a/b");
/// assert_eq!(normalize("/hello/there/../world").unwrap(), "/hello/world");
/// assert_eq!(normalize("/").unwrap(), "/");
/// ```
pub fn normalize(path: &str) -> Result<String> {
    let joined = components(path)?.join("/");
    if is_absolute(path) {
        Ok(format!("/{}", joined))
    } else {
        Ok(joined)
    }
}

/// Canonical absolute form of `path`. Relative paths are taken from the root.
pub fn absolute(path: &str) -> Result<String> {
    Ok(format!("/{}", components(path)?.join("/")))
}

/// Join `name` onto `base`.
///
/// An absolute `name` replaces `base` entirely.
///
/// ```rust
/// use pathmap_path::join;
///
/// assert_eq!(join("/a", "b/c").unwrap(), "/a/b/c");
/// assert_eq!(join("/a", "/z").unwrap(), "/z");
/// assert_eq!(join("a", "../b").unwrap(), "b");
/// assert!(join("a", "../../b").is_err());
/// ```
pub fn join(base: &str, name: &str) -> Result<String> {
    if base.is_empty() || is_absolute(name) {
        normalize(name)
    } else {
        normalize(&format!("{}/{}", base, name))
    }
}

/// Split a path into its parent directory and final component.
///
/// The parent of a single relative component is the empty string, and the
/// root splits into `("/", "")`.
pub fn split(path: &str) -> Result<(String, String)> {
    let normalized = normalize(path)?;
    Ok(match normalized.rsplit_once(SEPARATOR) {
        Some(("", name)) => ("/".to_string(), name.to_string()),
        Some((parent, name)) => (parent.to_string(), name.to_string()),
        None => (String::new(), normalized),
    })
}

/// Parent directory of `path`.
pub fn dirname(path: &str) -> Result<String> {
    Ok(split(path)?.0)
}

/// Final component of `path`, or the empty string for the root.
pub fn basename(path: &str) -> Result<String> {
    Ok(split(path)?.1)
}

/// True if `prefix` names `path` itself or one of its ancestors.
///
/// The comparison is per component, so `/foo` is not a prefix of `/foobar`.
pub fn is_prefix(prefix: &str, path: &str) -> Result<bool> {
    let prefix = components(prefix)?;
    let path = components(path)?;
    Ok(prefix.len() <= path.len() && prefix[..] == path[..prefix.len()])
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(
            prop_oneof![
                Just("".to_string()),
                Just(".".to_string()),
                Just("..".to_string()),
                "[a-c]{1,2}",
            ],
            0..8,
        )
    }

    proptest! {
        /// Normalizing twice changes nothing.
        #[test]
        fn prop_normalize_idempotent(segments in segments_strategy()) {
            let path = segments.join("/");
            if let Ok(once) = normalize(&path) {
                prop_assert_eq!(normalize(&once), Ok(once.clone()));
            }
        }

        /// A path fails exactly when some `..` has nothing left to remove.
        #[test]
        fn prop_backrefs_fail_only_when_escaping(segments in segments_strategy()) {
            let mut depth = 0usize;
            let mut escapes = false;
            for segment in &segments {
                match segment.as_str() {
                    "" | "." => {}
                    ".." if depth == 0 => escapes = true,
                    ".." => depth -= 1,
                    _ => depth += 1,
                }
            }
            let joined = segments.join("/");
            let result = components(&joined);
            prop_assert_eq!(result.is_err(), escapes);
            if let Ok(parts) = result {
                prop_assert_eq!(parts.len(), depth);
            }
        }

        /// Components never contain separators, dots or empty names.
        #[test]
        fn prop_components_are_clean(segments in segments_strategy()) {
            for component in components(&segments.join("/")).unwrap_or_default() {
                prop_assert!(!component.is_empty());
                prop_assert!(component != "." && component != "..");
                prop_assert!(!component.contains(SEPARATOR));
            }
        }
    }
}
