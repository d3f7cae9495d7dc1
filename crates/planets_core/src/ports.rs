//! Storage port trait for planets.
//! Implemented by planets_postgres and by [`InMemoryPlanetStore`](crate::memory::InMemoryPlanetStore);
//! the service depends only on this trait.

use async_trait::async_trait;

use crate::error::PlanetError;
use crate::filter::PlanetMatcher;
use crate::types::{Planet, PlanetId};

pub type Result<T> = std::result::Result<T, PlanetError>;

/// The record store contract.
///
/// Implementations validate before persisting and own the uniqueness of
/// `name`; callers never pre-check either.
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Persist a new planet and return it with its assigned id.
    /// Fails with `Validation` or `DuplicateKey`.
    async fn save(&self, planet: &Planet) -> Result<Planet>;

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>>;

    /// Exact, case-sensitive lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>>;

    /// All planets selected by `matcher`, ordered by id.
    async fn find_all_matching(&self, matcher: &PlanetMatcher) -> Result<Vec<Planet>>;

    /// Fails with `NotFound` when no row has this id.
    async fn delete_by_id(&self, id: PlanetId) -> Result<()>;
}
