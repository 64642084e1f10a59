//! HTTP API.
//!
//! One `POST /<operation>` route per arithmetic operation, plus
//! `GET /calculations` for the history and `GET /health`.

mod error;
mod types;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::calc::{NewCalculation, Operands, Operation};
use crate::db::Database;
use crate::history::CalculationRecord;

pub use error::ApiError;
pub use types::{CalculationRequest, ErrorResponse, HealthResponse};

/// Maximum JSON body size for calculation requests (64 KB).
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn Database>,
}

/// Build the axum router for the service.
pub fn router(store: Arc<dyn Database>) -> Router {
    let mut router = Router::new()
        .route("/calculations", get(list_calculations))
        .route("/health", get(health_check));

    for operation in Operation::ALL {
        router = router.route(
            &format!("/{}", operation),
            post(
                move |state: State<ApiState>,
                      payload: Result<Json<CalculationRequest>, JsonRejection>| {
                    calculate(operation, state, payload)
                },
            ),
        );
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(ApiState { store })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn calculate(
    operation: Operation,
    State(state): State<ApiState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CalculationRecord>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%operation, reason = %rejection.body_text(), "Rejected request body");
        ApiError::InvalidOperands
    })?;

    let operands = Operands::from_json(&request.operands)?;
    let calculation = NewCalculation::compute(operation, operands)?;
    let record = state.store.append_calculation(&calculation).await?;

    tracing::debug!(id = record.id, %operation, "Stored calculation");

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_calculations(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CalculationRecord>>, ApiError> {
    let records = state.store.list_calculations().await?;
    Ok(Json(records))
}
