//! Explicit schema for the `planets` table.
//!
//! Created idempotently at startup; there is no migration history.

use anyhow::Context;
use sqlx::PgPool;

/// Columns are exactly {id, name, climate, terrain}; `name` is unique.
/// The CHECKs mirror `validate_planet` so rows written around the service
/// still satisfy the invariants.
pub const PLANETS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS planets (
    id      BIGSERIAL PRIMARY KEY,
    name    TEXT NOT NULL UNIQUE CHECK (name <> ''),
    climate TEXT NOT NULL CHECK (climate <> ''),
    terrain TEXT NOT NULL CHECK (terrain <> '')
)
"#;

pub async fn initialize_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::raw_sql(PLANETS_DDL)
        .execute(pool)
        .await
        .context("Failed to initialize planets schema")?;
    tracing::info!("planets schema ready");
    Ok(())
}
