//! Serde support: a trie is encoded as a map from absolute path to value.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use pathmap_path::Path;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PathTrie;

impl<T: Serialize> Serialize for PathTrie<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

struct PathTrieVisitor<T> {
    marker: PhantomData<fn() -> PathTrie<T>>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for PathTrieVisitor<T> {
    type Value = PathTrie<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of paths to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut trie = PathTrie::new();
        // Keys that normalize to the same path keep the last value.
        while let Some((path, value)) = access.next_entry::<Path, T>()? {
            trie.insert(&path, value);
        }
        Ok(trie)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PathTrie<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PathTrieVisitor {
            marker: PhantomData,
        })
    }
}
