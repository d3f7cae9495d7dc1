//! Field rules checked by every store before a planet is persisted.

use crate::error::{FieldViolation, PlanetError};
use crate::types::Planet;

/// Reject a planet whose required fields are empty or hold a NUL character.
///
/// Postgres cannot store NUL in `TEXT`, so it is refused here for every store.
/// Collects every violation instead of stopping at the first one.
pub fn validate_planet(planet: &Planet) -> Result<(), PlanetError> {
    let violations: Vec<FieldViolation> = [
        ("name", planet.name.as_str()),
        ("climate", planet.climate.as_str()),
        ("terrain", planet.terrain.as_str()),
    ]
    .into_iter()
    .filter_map(|(field, value)| {
        if value.is_empty() {
            Some(FieldViolation::new(field, "must not be empty"))
        } else if value.contains('\0') {
            Some(FieldViolation::new(field, "must not contain NUL characters"))
        } else {
            None
        }
    })
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(PlanetError::Validation(violations))
    }
}
