//! Owned, normalized path type.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PathError, Result};
use crate::normalize;

/// A normalized absolute path.
///
/// Components are non-empty and never `.` or `..`. The empty component list
/// is the root, displayed as `/`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse and normalize a path string.
    ///
    /// Leading, trailing and repeated separators are ignored, `.` is dropped
    /// and `..` removes the previous component. Relative input is taken from
    /// the root.
    ///
    /// ```rust
    /// use pathmap_path::Path;
    ///
    /// let path = Path::parse("users/./alice/../bob/").unwrap();
    /// assert_eq!(path.to_string(), "/users/bob");
    /// assert!(Path::parse("/../bob").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Ok(Path {
            components: normalize::decompose(s)?,
        })
    }

    /// True for the root path.
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    /// Join `name` onto this path with the rules of [`join`](crate::join):
    /// an absolute `name` replaces the path, a relative one is resolved
    /// against it.
    pub fn join(&self, name: &str) -> Result<Path> {
        Path::parse(&normalize::join(&self.to_string(), name)?)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.components.join("/"))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Path, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Path::parse(&s).map_err(D::Error::custom)
    }
}

/// Macro for creating paths from string literals.
///
/// # Example
///
/// ```rust
/// use pathmap_path::path;
///
/// let p = path!("users/123/name");
/// assert_eq!(p.to_string(), "/users/123/name");
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s).expect("invalid path literal")
    };
}
