//! Filter builder: probe in, matcher out.
//!
//! A `PlanetProbe` is a partially-populated planet used only to express
//! filter intent; it is never persisted. `build_matcher` keeps the fields that
//! carry a non-empty value and drops the rest, so an unset or empty field
//! imposes no constraint at all (it does NOT mean "must equal empty string").
//!
//! The resulting `PlanetMatcher` is consumed by
//! [`PlanetStore::find_all_matching`](crate::ports::PlanetStore::find_all_matching):
//! in-process stores call [`PlanetMatcher::matches`], SQL stores render
//! [`PlanetMatcher::constraints`] into a `WHERE` clause.

use crate::types::Planet;

/// Filterable planet columns. `id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PlanetField {
    Name,
    Climate,
    Terrain,
}

impl PlanetField {
    /// Column name in the `planets` table.
    pub fn column(self) -> &'static str {
        self.into()
    }

    fn value_of(self, planet: &Planet) -> &str {
        match self {
            Self::Name => &planet.name,
            Self::Climate => &planet.climate,
            Self::Terrain => &planet.terrain,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetProbe {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetProbe {
    /// The probe `list` builds: name is never a list filter.
    pub fn climate_and_terrain(climate: Option<&str>, terrain: Option<&str>) -> Self {
        Self {
            name: None,
            climate: climate.map(str::to_owned),
            terrain: terrain.map(str::to_owned),
        }
    }

    /// Probe with every field of `planet` set. The id is ignored.
    pub fn from_planet(planet: &Planet) -> Self {
        Self {
            name: Some(planet.name.clone()),
            climate: Some(planet.climate.clone()),
            terrain: Some(planet.terrain.clone()),
        }
    }

    fn get(&self, field: PlanetField) -> Option<&str> {
        match field {
            PlanetField::Name => self.name.as_deref(),
            PlanetField::Climate => self.climate.as_deref(),
            PlanetField::Terrain => self.terrain.as_deref(),
        }
    }
}

/// One exact, case-sensitive equality test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConstraint {
    pub field: PlanetField,
    pub value: String,
}

/// Conjunction of field equalities. No constraints selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetMatcher {
    constraints: Vec<FieldConstraint>,
}

impl PlanetMatcher {
    pub fn constraints(&self) -> &[FieldConstraint] {
        &self.constraints
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn matches(&self, planet: &Planet) -> bool {
        self.constraints
            .iter()
            .all(|c| c.field.value_of(planet) == c.value)
    }
}

/// Build a matcher from a probe. Never fails.
pub fn build_matcher(probe: &PlanetProbe) -> PlanetMatcher {
    use strum::IntoEnumIterator;

    let constraints = PlanetField::iter()
        .filter_map(|field| match probe.get(field) {
            Some(value) if !value.is_empty() => Some(FieldConstraint {
                field,
                value: value.to_owned(),
            }),
            _ => None,
        })
        .collect();

    PlanetMatcher { constraints }
}
