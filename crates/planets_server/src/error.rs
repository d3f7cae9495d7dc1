//! Service outcome → HTTP response.
//!
//! The status comes from `PlanetError::http_status`; this module only shapes
//! the body. Internal errors are logged and answered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use planets_core::PlanetError;
use serde_json::json;

#[derive(Debug)]
pub struct AppError(pub PlanetError);

impl From<PlanetError> for AppError {
    fn from(err: PlanetError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &self.0 {
            PlanetError::Validation(violations) => json!({
                "error": self.0.to_string(),
                "violations": violations,
            }),
            PlanetError::Internal(e) => {
                tracing::error!("internal error: {e:#}");
                json!({ "error": "internal server error" })
            }
            other => {
                tracing::debug!(%status, "request failed: {other}");
                json!({ "error": other.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_core_policy() {
        let cases = [
            (PlanetError::Validation(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (PlanetError::DuplicateKey("x".into()), StatusCode::CONFLICT),
            (PlanetError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                PlanetError::Internal(anyhow::anyhow!("db down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(AppError(err).into_response().status(), expected);
        }
    }
}
