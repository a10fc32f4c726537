//! Axum route handlers for the AI analysis endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ai::analysis::{build_analysis_prompt, decode_report, AnalysisReport};
use crate::ai::prompts::{
    ANALYZE_MAX_TOKENS, IMPROVE_EXPERIENCE_PROMPT, IMPROVE_MAX_TOKENS, IMPROVE_SKILL_PROMPT,
    IMPROVE_SUMMARY_PROMPT,
};
use crate::errors::AppError;
use crate::models::resume::ResumeInput;
use crate::response::Envelope;
use crate::resumes::store;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub resume_data: Option<ResumeInput>,
    pub job_description: Option<String>,
    pub resume_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub improved_text: String,
}

/// POST /api/ai/analyze
///
/// Scores a resume against an optional job description. When `resumeId`
/// is supplied the score, suggestions, missing keywords, and analysis
/// timestamp are written back onto that document before the response is
/// sent. The write is not transactional with the model call.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Envelope<AnalysisReport>>, AppError> {
    // Both checks run before any upstream call is made.
    let resume = request
        .resume_data
        .as_ref()
        .filter(|data| data.personal_info.is_some())
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    if !state.llm.is_configured() {
        return Err(AppError::AiNotConfigured);
    }

    let prompt = build_analysis_prompt(resume, request.job_description.as_deref());
    let reply = state.llm.complete(&prompt, ANALYZE_MAX_TOKENS).await?;
    let report = decode_report(&reply)?;

    if let Some(resume_id) = request.resume_id {
        store::apply_analysis(&state.db, resume_id, &report)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
        info!("Persisted analysis for resume {resume_id} (atsScore={})", report.ats_score);
    }

    Ok(Json(Envelope::new(report)))
}

/// POST /api/ai/improve
///
/// Rewrites a single field with a type-specific prompt and returns the
/// model's text verbatim. No shape validation on the reply.
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<Envelope<ImproveResponse>>, AppError> {
    if !state.llm.is_configured() {
        return Err(AppError::AiNotConfigured);
    }

    // Unknown or absent type falls back to the summary prompt.
    let template = match request.kind.as_deref() {
        Some("experience") => IMPROVE_EXPERIENCE_PROMPT,
        Some("skill") => IMPROVE_SKILL_PROMPT,
        _ => IMPROVE_SUMMARY_PROMPT,
    };
    let prompt = template.replace("{text}", &request.text);

    let improved_text = state.llm.complete(&prompt, IMPROVE_MAX_TOKENS).await?;

    Ok(Json(Envelope::new(ImproveResponse { improved_text })))
}
