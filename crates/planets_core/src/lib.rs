//! Pure domain logic for the planets service.
//!
//! Holds the `Planet` record, its validation rules, the filter builder that
//! turns a partially-populated probe into a matcher, the `PlanetStore` port
//! trait and the `PlanetService` that the HTTP layer talks to.
//!
//! Storage adapters (`planets_postgres`) depend on this crate, never the
//! other way round.

pub mod error;
pub mod filter;
pub mod memory;
pub mod ports;
pub mod service;
pub mod types;
pub mod validate;

pub use error::{FieldViolation, PlanetError};
pub use filter::{build_matcher, FieldConstraint, PlanetField, PlanetMatcher, PlanetProbe};
pub use memory::InMemoryPlanetStore;
pub use ports::PlanetStore;
pub use service::{PlanetService, PlanetServiceImpl};
pub use types::{Planet, PlanetId};
