//! Content hierarchy: a node owns sites, sites nest and own pages.

use serde::{Deserialize, Deserializer};

/// Top-level content entity.
///
/// Only `node_name` and `node_description` are persisted. `node_id` is assigned
/// by the database and `child_sites` is accepted on the wire but not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Node {
    #[serde(deserialize_with = "nullable")]
    pub node_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub node_name: String,
    #[serde(deserialize_with = "nullable")]
    pub node_description: String,
    #[serde(rename = "child_sites", deserialize_with = "nullable")]
    pub sites: Vec<Site>,
}

/// A site under a node or under another site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Site {
    #[serde(deserialize_with = "nullable")]
    pub site_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub site_name: String,
    #[serde(deserialize_with = "nullable")]
    pub parent_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub child_sites: Vec<Site>,
    #[serde(deserialize_with = "nullable")]
    pub pages: Vec<Page>,
}

/// Leaf content entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub pagename: String,
}

/// Treat an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
