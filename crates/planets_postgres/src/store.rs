//! Postgres-backed `PlanetStore`.

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use planets_core::ports::{PlanetStore, Result};
use planets_core::validate::validate_planet;
use planets_core::{Planet, PlanetError, PlanetId, PlanetMatcher};

use crate::errors::map_write_error;

const SELECT_PLANETS: &str = "SELECT id, name, climate, terrain FROM planets";

#[derive(Debug, FromRow)]
struct PgPlanetRow {
    id: i64,
    name: String,
    climate: String,
    terrain: String,
}

impl From<PgPlanetRow> for Planet {
    fn from(row: PgPlanetRow) -> Self {
        Planet {
            id: Some(row.id),
            name: row.name,
            climate: row.climate,
            terrain: row.terrain,
        }
    }
}

/// Render `matcher` as a `SELECT` with one bound equality per constraint.
pub fn matching_query(matcher: &PlanetMatcher) -> QueryBuilder<'_, Postgres> {
    let mut query_builder = QueryBuilder::new(SELECT_PLANETS);
    query_builder.push(" WHERE 1=1");

    for constraint in matcher.constraints() {
        query_builder.push(" AND ");
        query_builder.push(constraint.field.column());
        query_builder.push(" = ");
        query_builder.push_bind(constraint.value.as_str());
    }

    query_builder.push(" ORDER BY id");
    query_builder
}

pub struct PgPlanetStore {
    pool: PgPool,
}

impl PgPlanetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetStore for PgPlanetStore {
    async fn save(&self, planet: &Planet) -> Result<Planet> {
        validate_planet(planet)?;

        let row = sqlx::query_as::<_, PgPlanetRow>(
            r#"
            INSERT INTO planets (name, climate, terrain)
            VALUES ($1, $2, $3)
            RETURNING id, name, climate, terrain
            "#,
        )
        .bind(&planet.name)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &planet.name))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>> {
        let row = sqlx::query_as::<_, PgPlanetRow>(&format!("{SELECT_PLANETS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(row.map(Planet::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>> {
        let row = sqlx::query_as::<_, PgPlanetRow>(&format!("{SELECT_PLANETS} WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(row.map(Planet::from))
    }

    async fn find_all_matching(&self, matcher: &PlanetMatcher) -> Result<Vec<Planet>> {
        let rows = matching_query(matcher)
            .build_query_as::<PgPlanetRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn delete_by_id(&self, id: PlanetId) -> Result<()> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;

        if result.rows_affected() == 0 {
            return Err(PlanetError::NotFound(format!("planet {id}")));
        }
        Ok(())
    }
}
