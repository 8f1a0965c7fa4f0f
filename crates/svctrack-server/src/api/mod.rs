//! Counter HTTP handlers.
//!
//! - `POST /track/:service` : increment, 204 with empty body
//! - `GET /count/:service`  : `{"count":N}` as `application/json`

mod error;

pub use error::ApiError;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use svctrack_core::protocol::CountBody;

use crate::app_state::AppState;

pub async fn track(
    State(state): State<AppState>,
    Path(service): Path<String>,
) -> Result<StatusCode, ApiError> {
    let name = state.service_name(service)?;
    let count = state.store().increment(name.as_str());
    tracing::debug!(service = %name, count, "tracked");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn count(
    State(state): State<AppState>,
    Path(service): Path<String>,
) -> Result<Response, ApiError> {
    let name = state.service_name(service)?;
    let count = state.store().get_count(name.as_str());
    let body = CountBody::new(count).to_json()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
