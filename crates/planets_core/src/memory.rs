//! In-memory planet store (for tests and database-less local runs).

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::PlanetError;
use crate::filter::PlanetMatcher;
use crate::ports::{PlanetStore, Result};
use crate::types::{Planet, PlanetId};
use crate::validate::validate_planet;

#[derive(Debug, Default)]
struct Rows {
    next_id: PlanetId,
    by_id: BTreeMap<PlanetId, Planet>,
}

/// `PlanetStore` over a `BTreeMap`, so iteration order is id order like the
/// Postgres adapter's `ORDER BY id`.
#[derive(Debug, Default)]
pub struct InMemoryPlanetStore {
    rows: RwLock<Rows>,
}

impl InMemoryPlanetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PlanetStore for InMemoryPlanetStore {
    async fn save(&self, planet: &Planet) -> Result<Planet> {
        validate_planet(planet)?;

        // Uniqueness check and insert happen under one write lock.
        let mut rows = self.rows.write().await;
        if rows.by_id.values().any(|p| p.name == planet.name) {
            return Err(PlanetError::DuplicateKey(format!(
                "planet name '{}'",
                planet.name
            )));
        }

        rows.next_id += 1;
        let id = rows.next_id;
        let saved = Planet {
            id: Some(id),
            ..planet.clone()
        };
        rows.by_id.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().find(|p| p.name == name).cloned())
    }

    async fn find_all_matching(&self, matcher: &PlanetMatcher) -> Result<Vec<Planet>> {
        let rows = self.rows.read().await;
        Ok(rows
            .by_id
            .values()
            .filter(|p| matcher.matches(p))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: PlanetId) -> Result<()> {
        match self.rows.write().await.by_id.remove(&id) {
            Some(_) => Ok(()),
            None => Err(PlanetError::NotFound(format!("planet {id}"))),
        }
    }
}
