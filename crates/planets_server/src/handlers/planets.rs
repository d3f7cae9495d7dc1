//! Planet endpoints.
//!
//! POST   /planets                           — create (201)
//! GET    /planets?terrain=&climate=         — filtered list
//! GET    /planets/:id                       — by id
//! GET    /planets/name/:name                — by exact name
//! DELETE /planets/:id                       — remove (204)

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use planets_core::{Planet, PlanetError, PlanetId, PlanetService};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct ListPlanetsQuery {
    pub terrain: Option<String>,
    pub climate: Option<String>,
}

pub async fn create(
    Extension(service): Extension<Arc<dyn PlanetService>>,
    Json(planet): Json<Planet>,
) -> Result<(StatusCode, Json<Planet>), AppError> {
    // Clients never choose ids.
    let planet = Planet { id: None, ..planet };
    let created = service.create(planet).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    Extension(service): Extension<Arc<dyn PlanetService>>,
    Path(id): Path<PlanetId>,
) -> Result<Json<Planet>, AppError> {
    service
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| PlanetError::NotFound(format!("planet {id}")).into())
}

pub async fn get_by_name(
    Extension(service): Extension<Arc<dyn PlanetService>>,
    Path(name): Path<String>,
) -> Result<Json<Planet>, AppError> {
    service
        .get_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| PlanetError::NotFound(format!("planet named '{name}'")).into())
}

pub async fn list(
    Extension(service): Extension<Arc<dyn PlanetService>>,
    Query(query): Query<ListPlanetsQuery>,
) -> Result<Json<Vec<Planet>>, AppError> {
    let planets = service
        .list(query.terrain.as_deref(), query.climate.as_deref())
        .await?;
    Ok(Json(planets))
}

pub async fn remove(
    Extension(service): Extension<Arc<dyn PlanetService>>,
    Path(id): Path<PlanetId>,
) -> Result<StatusCode, AppError> {
    service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
