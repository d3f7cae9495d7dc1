//! planets_postgres — Postgres implementation of the `PlanetStore` port.
//!
//! All SQL is runtime-checked (`sqlx::query`, not `sqlx::query!`) so building
//! the crate never needs a live database.

pub mod config;
pub mod errors;
pub mod schema;
pub mod store;

pub use config::{connect, mask_database_url, PgConfig};
pub use schema::initialize_schema;
pub use store::PgPlanetStore;
