//! planets_server — REST surface for the planets service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
