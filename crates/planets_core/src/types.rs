//! The `Planet` record.

use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned planet identifier.
pub type PlanetId = i64;

/// A planet row. `id` is `None` until the store assigns one on first save.
///
/// Equality compares every field, id included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Planet {
    #[serde(default)]
    pub id: Option<PlanetId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub climate: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub terrain: String,
}

impl Planet {
    /// An unsaved planet.
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    pub fn with_id(mut self, id: PlanetId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// Missing and `null` fields both land as "" so they fail validation rather
// than JSON parsing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
