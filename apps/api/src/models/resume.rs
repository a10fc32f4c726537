use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// Owner id used when no authentication is present.
pub const GUEST_USER: &str = "guest";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

/// A stored resume document. Section lists live in JSONB columns; flat
/// string lists (skills, suggestions, keywords) in TEXT[] columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: String,
    pub personal_info: Json<PersonalInfo>,
    pub summary: String,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub skills: Vec<String>,
    pub projects: Json<Vec<ProjectEntry>>,
    pub certifications: Json<Vec<CertificationEntry>>,
    pub ats_score: f64,
    pub suggestions: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub last_analyzed: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for create/update, and the `resumeData` payload of an
/// analyze request. Everything defaults so partial form payloads parse;
/// `validate` enforces the two required fields before anything persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeInput {
    pub user_id: Option<String>,
    pub personal_info: Option<PersonalInfo>,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let info = self
            .personal_info
            .as_ref()
            .ok_or_else(|| AppError::Validation("personalInfo is required".to_string()))?;
        if info.full_name.trim().is_empty() {
            return Err(AppError::Validation(
                "personalInfo.fullName is required".to_string(),
            ));
        }
        if info.email.trim().is_empty() {
            return Err(AppError::Validation(
                "personalInfo.email is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn user_id_or_guest(&self) -> &str {
        self.user_id.as_deref().unwrap_or(GUEST_USER)
    }
}
