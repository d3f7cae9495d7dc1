//! PlanetService, the single entry point the HTTP layer uses.
//!
//! Takes the store via `Arc<dyn PlanetStore>` so the same logic runs against
//! Postgres or the in-memory store. The service validates nothing itself and
//! never recovers store errors: `Validation`, `DuplicateKey` and `NotFound`
//! reach the caller exactly as the store produced them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    filter::{build_matcher, PlanetProbe},
    ports::PlanetStore,
    types::{Planet, PlanetId},
};

pub use crate::ports::Result;

#[async_trait]
pub trait PlanetService: Send + Sync {
    async fn get(&self, id: PlanetId) -> Result<Option<Planet>>;

    /// Persist `planet` and return it with its assigned id.
    async fn create(&self, planet: Planet) -> Result<Planet>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Planet>>;

    /// Planets matching the optional filters. `None` or `""` leaves a filter off.
    async fn list(&self, terrain: Option<&str>, climate: Option<&str>) -> Result<Vec<Planet>>;

    async fn remove(&self, id: PlanetId) -> Result<()>;
}

pub struct PlanetServiceImpl {
    store: Arc<dyn PlanetStore>,
}

impl PlanetServiceImpl {
    pub fn new(store: Arc<dyn PlanetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlanetService for PlanetServiceImpl {
    async fn get(&self, id: PlanetId) -> Result<Option<Planet>> {
        tracing::debug!(id, "get planet");
        self.store.find_by_id(id).await
    }

    async fn create(&self, planet: Planet) -> Result<Planet> {
        tracing::debug!(name = %planet.name, "create planet");
        let saved = self.store.save(&planet).await?;
        tracing::info!(id = ?saved.id, name = %saved.name, "planet created");
        Ok(saved)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Planet>> {
        tracing::debug!(name, "get planet by name");
        self.store.find_by_name(name).await
    }

    async fn list(&self, terrain: Option<&str>, climate: Option<&str>) -> Result<Vec<Planet>> {
        let matcher = build_matcher(&PlanetProbe::climate_and_terrain(climate, terrain));
        tracing::debug!(
            constraints = matcher.constraints().len(),
            "list planets"
        );
        self.store.find_all_matching(&matcher).await
    }

    async fn remove(&self, id: PlanetId) -> Result<()> {
        tracing::debug!(id, "remove planet");
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "planet removed");
        Ok(())
    }
}
