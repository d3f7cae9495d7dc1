//! Postgres error classification.

use anyhow::anyhow;
use planets_core::{FieldViolation, PlanetError};

const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";
const NOT_NULL_VIOLATION: &str = "23502";

/// Map a write error onto the planet error taxonomy.
///
/// `name` is the planet being written; it labels duplicate-key errors.
pub fn map_write_error(err: sqlx::Error, name: &str) -> PlanetError {
    let code = match &err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    };

    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => PlanetError::DuplicateKey(format!("planet name '{name}'")),
        Some(CHECK_VIOLATION) | Some(NOT_NULL_VIOLATION) => {
            let field = constraint_field(&err).unwrap_or("planet");
            PlanetError::Validation(vec![FieldViolation::new(field, "must not be empty")])
        }
        _ => PlanetError::Internal(anyhow!(err)),
    }
}

// Postgres names inline CHECKs `planets_<column>_check`.
fn constraint_field(err: &sqlx::Error) -> Option<&'static str> {
    let sqlx::Error::Database(db) = err else {
        return None;
    };
    let constraint = db.constraint()?;
    ["name", "climate", "terrain"]
        .into_iter()
        .find(|col| constraint == format!("planets_{col}_check"))
}
