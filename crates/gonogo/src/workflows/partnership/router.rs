use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::PartnershipInputs;
use super::service::{PartnershipService, PartnershipServiceError};
use super::snapshot::{SnapshotError, SnapshotStore};

/// Router exposing the seed inputs, evaluation and snapshot export.
pub fn partnership_router<S>(service: Arc<PartnershipService<S>>) -> Router
where
    S: SnapshotStore + 'static,
{
    Router::new()
        .route("/api/v1/partnerships/seed", get(seed_handler::<S>))
        .route("/api/v1/partnerships/evaluate", post(evaluate_handler::<S>))
        .route("/api/v1/partnerships/snapshots", post(snapshot_handler::<S>))
        .with_state(service)
}

pub(crate) async fn seed_handler<S>(State(service): State<Arc<PartnershipService<S>>>) -> Response
where
    S: SnapshotStore + 'static,
{
    (StatusCode::OK, axum::Json(service.seed())).into_response()
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<PartnershipService<S>>>,
    axum::Json(inputs): axum::Json<PartnershipInputs>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    let outcome = service.evaluate(&inputs);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn snapshot_handler<S>(
    State(service): State<Arc<PartnershipService<S>>>,
    axum::Json(inputs): axum::Json<PartnershipInputs>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    match service.save_snapshot(inputs) {
        Ok(saved) => (StatusCode::CREATED, axum::Json(saved)).into_response(),
        Err(PartnershipServiceError::Snapshot(SnapshotError::Serialize(error))) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
