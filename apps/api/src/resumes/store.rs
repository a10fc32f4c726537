//! Persistence layer for resume documents.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ai::analysis::AnalysisReport;
use crate::models::resume::{ResumeInput, ResumeRow};

pub async fn create(pool: &PgPool, input: &ResumeInput) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (user_id, personal_info, summary, experience, education, skills,
             projects, certifications)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(input.user_id_or_guest())
    .bind(Json(input.personal_info.clone().unwrap_or_default()))
    .bind(&input.summary)
    .bind(Json(&input.experience))
    .bind(Json(&input.education))
    .bind(&input.skills)
    .bind(Json(&input.projects))
    .bind(Json(&input.certifications))
    .fetch_one(pool)
    .await
}

/// All documents for one owner, newest first.
pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Full replace of the document content. The owner only changes when the
/// payload names one. Returns `None` when the id does not exist.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &ResumeInput,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes SET
            user_id = COALESCE($2, user_id),
            personal_info = $3,
            summary = $4,
            experience = $5,
            education = $6,
            skills = $7,
            projects = $8,
            certifications = $9,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.user_id.as_deref())
    .bind(Json(input.personal_info.clone().unwrap_or_default()))
    .bind(&input.summary)
    .bind(Json(&input.experience))
    .bind(Json(&input.education))
    .bind(&input.skills)
    .bind(Json(&input.projects))
    .bind(Json(&input.certifications))
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was actually deleted.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Writes an analysis result back onto a document. A missing id is a
/// silent no-op: the analysis itself already succeeded.
pub async fn apply_analysis(
    pool: &PgPool,
    id: Uuid,
    report: &AnalysisReport,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE resumes SET
            ats_score = $2,
            suggestions = $3,
            missing_keywords = $4,
            last_analyzed = now(),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(report.ats_score)
    .bind(&report.suggestions)
    .bind(&report.missing_keywords)
    .execute(pool)
    .await?;
    Ok(())
}
