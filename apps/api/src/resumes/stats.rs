//! Per-owner aggregate statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::resume::ResumeRow;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeStats {
    pub total_resumes: usize,
    pub average_ats_score: f64,
    pub last_updated: Option<DateTime<Utc>>,
    pub analyzed_resumes: usize,
}

/// Computes stats over an owner's documents. Unanalyzed documents carry
/// a score of 0 and are counted in the average's denominator; rounding
/// is left to the caller's display layer.
pub fn compute_stats(rows: &[ResumeRow]) -> ResumeStats {
    let total_resumes = rows.len();

    let average_ats_score = if total_resumes > 0 {
        rows.iter().map(|r| r.ats_score).sum::<f64>() / total_resumes as f64
    } else {
        0.0
    };

    ResumeStats {
        total_resumes,
        average_ats_score,
        last_updated: rows.iter().map(|r| r.updated_at).max(),
        analyzed_resumes: rows.iter().filter(|r| r.ats_score > 0.0).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PersonalInfo, ResumeRow};
    use chrono::Duration;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn row_with_score(ats_score: f64, updated_offset_hours: i64) -> ResumeRow {
        let now = Utc::now();
        ResumeRow {
            id: Uuid::new_v4(),
            user_id: "guest".to_string(),
            personal_info: Json(PersonalInfo::default()),
            summary: String::new(),
            experience: Json(Vec::new()),
            education: Json(Vec::new()),
            skills: Vec::new(),
            projects: Json(Vec::new()),
            certifications: Json(Vec::new()),
            ats_score,
            suggestions: Vec::new(),
            missing_keywords: Vec::new(),
            last_analyzed: None,
            created_at: now,
            updated_at: now + Duration::hours(updated_offset_hours),
        }
    }

    #[test]
    fn test_stats_over_zero_documents() {
        let stats = compute_stats(&[]);
        assert_eq!(
            stats,
            ResumeStats {
                total_resumes: 0,
                average_ats_score: 0.0,
                last_updated: None,
                analyzed_resumes: 0,
            }
        );
    }

    #[test]
    fn test_stats_average_includes_unanalyzed_documents() {
        let rows = vec![
            row_with_score(80.0, 0),
            row_with_score(60.0, 1),
            row_with_score(0.0, 2),
        ];
        let stats = compute_stats(&rows);
        assert_eq!(stats.total_resumes, 3);
        // 140 / 3 — displays as 46.67
        assert!((stats.average_ats_score - 140.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.analyzed_resumes, 2);
    }

    #[test]
    fn test_stats_last_updated_is_most_recent() {
        let rows = vec![row_with_score(10.0, 5), row_with_score(20.0, 1)];
        let stats = compute_stats(&rows);
        assert_eq!(stats.last_updated, Some(rows[0].updated_at));
    }

    #[test]
    fn test_stats_serializes_camel_case() {
        let json = serde_json::to_value(compute_stats(&[])).unwrap();
        assert_eq!(json["totalResumes"], 0);
        assert_eq!(json["averageAtsScore"], 0.0);
        assert!(json["lastUpdated"].is_null());
        assert_eq!(json["analyzedResumes"], 0);
    }
}
