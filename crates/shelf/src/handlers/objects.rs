//! Object CRUD handlers.
//!
//! Handlers parse and validate the request, then delegate to the object
//! repository; storage errors keep their status mapping via `AppError`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use shelf_core::object::ObjectRecord;

use crate::{handlers::AppError, models::CreateObject, models::UpdateObject, state::AppState};

/// Error response with message (for body parse and validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg).into_response()
}

/// List all objects (GET /api/objects).
pub async fn list_objects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ObjectRecord>>, AppError> {
    let objects = state.repository.describe_all().await?;
    Ok(Json(objects))
}

/// Get a single object by ID (GET /api/objects/{id}).
pub async fn get_object(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ObjectRecord>, AppError> {
    let object = state.repository.describe_one(id).await?;
    Ok(Json(object))
}

/// Create a new object (POST /api/objects).
///
/// Returns the assigned identifier as `{"id": "<uuid>"}`.
pub async fn create_object(
    State(state): State<AppState>,
    body: Result<Json<CreateObject>, JsonRejection>,
) -> Result<Json<serde_json::Value>, Response> {
    let Json(payload) = body.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;

    payload
        .validate()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let id = state
        .repository
        .create(payload.into_record())
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(object_id = %id, "Created new object");

    Ok(Json(serde_json::json!({ "id": id })))
}

/// Update an object's name by ID (PUT /api/objects/{id}).
pub async fn update_object(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateObject>, JsonRejection>,
) -> Result<StatusCode, Response> {
    let Json(payload) = body.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;

    payload
        .validate()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    state
        .repository
        .update(id, &payload.into_record(id))
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(object_id = %id, "Updated object");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an object by ID (DELETE /api/objects/{id}).
pub async fn delete_object(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.repository.remove(id).await?;

    tracing::info!(object_id = %id, "Deleted object");

    Ok(StatusCode::NO_CONTENT)
}
