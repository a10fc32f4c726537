//! Prompt construction and defensive decoding of model output.
//!
//! The model is asked for bare JSON but routinely wraps it in markdown
//! fences anyway; `decode_report` strips those before parsing. Decode
//! failures surface as `MalformedModelOutput`, never as an upstream error.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::{ANALYZE_PROMPT_TEMPLATE, DEFAULT_JOB_DESCRIPTION};
use crate::errors::AppError;
use crate::models::resume::ResumeInput;

const NOT_PROVIDED: &str = "Not provided";

/// Structured review produced by the model. `atsScore` must be a JSON
/// number and `suggestions` a list; anything else is rejected as
/// malformed. `missingKeywords` defaults to empty, matching the
/// write-back behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ats_score: f64,
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

/// Flattens a resume into the fixed-format text block the analysis
/// prompt embeds. Absent sections fall back to a literal "Not provided".
pub fn resume_to_text(resume: &ResumeInput) -> String {
    let info = resume.personal_info.clone().unwrap_or_default();

    let skills = if resume.skills.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        resume.skills.join(", ")
    };

    let experience = if resume.experience.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        resume
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "{} at {} ({} - {})",
                    exp.position, exp.company, exp.start_date, exp.end_date
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    };

    let education = if resume.education.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        resume
            .education
            .iter()
            .map(|edu| {
                format!(
                    "{} in {} from {}",
                    edu.degree, edu.field, edu.institution
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    };

    let summary = if resume.summary.trim().is_empty() {
        NOT_PROVIDED
    } else {
        resume.summary.as_str()
    };

    format!(
        "Name: {}\nEmail: {}\nSummary: {}\nSkills: {}\nExperience: {}\nEducation: {}",
        info.full_name, info.email, summary, skills, experience, education
    )
}

/// Builds the full analysis prompt from a resume and an optional job
/// description. An absent or blank job description falls back to the
/// literal default.
pub fn build_analysis_prompt(resume: &ResumeInput, job_description: Option<&str>) -> String {
    let jd = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .unwrap_or(DEFAULT_JOB_DESCRIPTION);

    ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_text}", &resume_to_text(resume))
        .replace("{job_description}", jd)
}

/// Decodes the model's raw text reply into an `AnalysisReport`.
pub fn decode_report(text: &str) -> Result<AnalysisReport, AppError> {
    let cleaned = strip_json_fences(text);
    serde_json::from_str(cleaned).map_err(|e| AppError::MalformedModelOutput(e.to_string()))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    const VALID_REPLY: &str = r#"{
        "atsScore": 72,
        "suggestions": ["a", "b", "c", "d", "e"],
        "missingKeywords": ["Docker"],
        "strengths": ["clear summary", "solid skills", "good projects"],
        "weaknesses": ["no metrics", "short experience", "no certs"]
    }"#;

    fn sample_resume() -> ResumeInput {
        ResumeInput {
            personal_info: Some(PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            }),
            summary: "Engineer and mathematician".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                company: "Analytical Engines".to_string(),
                position: "Programmer".to_string(),
                start_date: "1842".to_string(),
                end_date: "1843".to_string(),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                institution: "Home".to_string(),
                degree: "None".to_string(),
                field: "Mathematics".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_resume_to_text_fixed_format() {
        let text = resume_to_text(&sample_resume());
        assert!(text.contains("Name: Ada Lovelace"));
        assert!(text.contains("Email: ada@example.com"));
        assert!(text.contains("Skills: Rust, SQL"));
        assert!(text.contains("Experience: Programmer at Analytical Engines (1842 - 1843)"));
        assert!(text.contains("Education: None in Mathematics from Home"));
    }

    #[test]
    fn test_resume_to_text_falls_back_to_not_provided() {
        let resume = ResumeInput {
            personal_info: Some(PersonalInfo {
                full_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let text = resume_to_text(&resume);
        assert!(text.contains("Summary: Not provided"));
        assert!(text.contains("Skills: Not provided"));
        assert!(text.contains("Experience: Not provided"));
        assert!(text.contains("Education: Not provided"));
    }

    #[test]
    fn test_multiple_experience_entries_joined_with_semicolons() {
        let mut resume = sample_resume();
        resume.experience.push(ExperienceEntry {
            company: "Babbage & Co".to_string(),
            position: "Analyst".to_string(),
            start_date: "1843".to_string(),
            end_date: "1845".to_string(),
            ..Default::default()
        });
        let text = resume_to_text(&resume);
        assert!(text.contains(
            "Programmer at Analytical Engines (1842 - 1843); Analyst at Babbage & Co (1843 - 1845)"
        ));
    }

    #[test]
    fn test_prompt_uses_default_job_description() {
        let prompt = build_analysis_prompt(&sample_resume(), None);
        assert!(prompt.contains("General software engineering position"));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_blank_job_description_uses_default() {
        let prompt = build_analysis_prompt(&sample_resume(), Some("   "));
        assert!(prompt.contains("General software engineering position"));
    }

    #[test]
    fn test_prompt_embeds_supplied_job_description() {
        let prompt = build_analysis_prompt(&sample_resume(), Some("Senior Rust Engineer"));
        assert!(prompt.contains("Job Description (if provided): Senior Rust Engineer"));
    }

    #[test]
    fn test_decode_valid_report() {
        let report = decode_report(VALID_REPLY).unwrap();
        assert!((report.ats_score - 72.0).abs() < f64::EPSILON);
        assert_eq!(report.suggestions.len(), 5);
        assert_eq!(report.missing_keywords, vec!["Docker"]);
    }

    #[test]
    fn test_decode_fenced_reply_matches_unfenced() {
        let fenced = format!("```json\n{VALID_REPLY}\n```");
        let plain = decode_report(VALID_REPLY).unwrap();
        let stripped = decode_report(&fenced).unwrap();
        assert_eq!(stripped.suggestions, plain.suggestions);
        assert!((stripped.ats_score - plain.ats_score).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_bare_fence_variant() {
        let fenced = format!("```\n{VALID_REPLY}\n```");
        assert!(decode_report(&fenced).is_ok());
    }

    #[test]
    fn test_decode_rejects_string_ats_score() {
        let reply = r#"{"atsScore": "85", "suggestions": ["a", "b", "c", "d", "e"]}"#;
        let err = decode_report(reply).unwrap_err();
        assert!(matches!(err, AppError::MalformedModelOutput(_)));
    }

    #[test]
    fn test_decode_rejects_non_list_suggestions() {
        let reply = r#"{"atsScore": 85, "suggestions": "add keywords"}"#;
        assert!(decode_report(reply).is_err());
    }

    #[test]
    fn test_decode_rejects_prose_reply() {
        let err = decode_report("I'd be happy to analyze this resume!").unwrap_err();
        assert!(matches!(err, AppError::MalformedModelOutput(_)));
    }

    #[test]
    fn test_missing_keywords_defaults_to_empty() {
        let reply = r#"{"atsScore": 60, "suggestions": ["a", "b", "c", "d", "e"]}"#;
        let report = decode_report(reply).unwrap();
        assert!(report.missing_keywords.is_empty());
        assert!(report.strengths.is_empty());
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }
}
