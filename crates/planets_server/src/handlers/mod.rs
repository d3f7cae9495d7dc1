pub mod health;
pub mod planets;
