use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::field::CareerFieldRow;
use crate::state::AppState;

/// GET /api/v1/career-fields
///
/// The full catalog, ordered by name. The catalog is public and read-only
/// from this service's perspective; administration happens elsewhere.
pub async fn handle_list_fields(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerFieldRow>>, AppError> {
    Ok(Json(state.fields.list_fields().await?))
}

/// GET /api/v1/career-fields/:field_id
pub async fn handle_get_field(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
) -> Result<Json<CareerFieldRow>, AppError> {
    let field = state.fields.get_field(field_id).await?;
    field
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career field {field_id} not found")))
}
