use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use registry::{Registration, SUCCESS_SENTINEL, StoredRegistration, validate};
use tracing::{info, warn};

use crate::{error::AppError, state::AppState, utils::SummaryQuery};

pub const WELCOME: &str = "Welcome to the registration system!";

pub async fn home_handler() -> &'static str {
    WELCOME
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(registration) = payload.map_err(|e| {
        warn!("Unreadable registration: {e}");
        AppError::MalformedPayload
    })?;

    validate(&registration).inspect_err(|e| warn!("Rejected registration: {e}"))?;

    let stored = state.store.save(registration).await?;
    info!("Stored registration {}", stored.id);

    Ok((StatusCode::CREATED, Json(SUCCESS_SENTINEL)))
}

pub async fn summary_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Vec<StoredRegistration>>, AppError> {
    let filter = query.into_filter()?;
    let registrations = state.store.all().await?;

    Ok(Json(filter.apply(registrations)))
}

pub async fn debug_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoredRegistration>>, AppError> {
    Ok(Json(state.store.all().await?))
}

/// Stores whatever it is given, skipping validation.
pub async fn debug_create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<Json<StoredRegistration>, AppError> {
    let Json(registration) = payload.map_err(|_| AppError::MalformedPayload)?;

    Ok(Json(state.store.save(registration).await?))
}
