//! `serde` support, enabled by the `serde` feature.
//!
//! A map serializes as a serde map with entries in ascending key order and
//! deserializes by inserting each entry; later duplicates overwrite earlier
//! ones.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Error, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::RbMap;

impl<K: Serialize, V: Serialize> Serialize for RbMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RbMapVisitor<K, V> {
    _kv: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V> Visitor<'de> for RbMapVisitor<K, V>
where
    K: Deserialize<'de> + PartialOrd,
    V: Deserialize<'de>,
{
    type Value = RbMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = RbMap::new();
        while let Some((k, v)) = access.next_entry()? {
            map.insert(k, v).map_err(A::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for RbMap<K, V>
where
    K: Deserialize<'de> + PartialOrd,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RbMapVisitor { _kv: PhantomData })
    }
}
