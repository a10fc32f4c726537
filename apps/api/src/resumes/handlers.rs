//! Axum route handlers for resume CRUD and stats.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::builder::BuilderForm;
use crate::models::resume::{ResumeInput, ResumeRow};
use crate::response::Envelope;
use crate::resumes::stats::{compute_stats, ResumeStats};
use crate::resumes::store;
use crate::state::AppState;

/// POST /api/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(input): Json<ResumeInput>,
) -> Result<(StatusCode, Json<Envelope<ResumeRow>>), AppError> {
    input.validate()?;
    let resume = store::create(&state.db, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(resume).with_message("Resume created successfully")),
    ))
}

/// GET /api/resumes/user/:userId
pub async fn handle_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Envelope<Vec<ResumeRow>>>, AppError> {
    let resumes = store::list_by_user(&state.db, &user_id).await?;
    let count = resumes.len();
    Ok(Json(Envelope::new(resumes).with_count(count)))
}

/// GET /api/resumes/stats/:userId
pub async fn handle_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Envelope<ResumeStats>>, AppError> {
    let resumes = store::list_by_user(&state.db, &user_id).await?;
    Ok(Json(Envelope::new(compute_stats(&resumes))))
}

/// GET /api/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<ResumeRow>>, AppError> {
    let resume = store::get(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(Envelope::new(resume)))
}

/// PUT /api/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ResumeInput>,
) -> Result<Json<Envelope<ResumeRow>>, AppError> {
    input.validate()?;
    let resume = store::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(
        Envelope::new(resume).with_message("Resume updated successfully"),
    ))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Value>>, AppError> {
    if !store::delete(&state.db, id).await? {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }
    Ok(Json(
        Envelope::new(json!({})).with_message("Resume deleted successfully"),
    ))
}

/// GET /api/resumes/:id/builder
///
/// Returns the document translated into the builder form shape, for
/// loading an existing resume into the editor.
pub async fn handle_get_builder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<BuilderForm>>, AppError> {
    let resume = store::get(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(Envelope::new(BuilderForm::from_row(&resume))))
}

/// PUT /api/resumes/:id/builder
///
/// Accepts the builder form shape and stores it via the same translation.
pub async fn handle_update_builder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<BuilderForm>,
) -> Result<Json<Envelope<ResumeRow>>, AppError> {
    let input = form.into_input();
    input.validate()?;
    let resume = store::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(
        Envelope::new(resume).with_message("Resume updated successfully"),
    ))
}
