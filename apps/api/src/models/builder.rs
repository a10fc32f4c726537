//! Translation between the builder form shape and the stored document
//! shape. The form UI edits `{role, duration}` style entries; the store
//! keeps `{position, startDate, endDate, current}`. One explicit mapping
//! in each direction, nothing inline in handlers.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeInput, ResumeRow,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderExperience {
    pub role: String,
    pub company: String,
    /// Free-text range, e.g. "Jan 2020 - Present".
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderProject {
    pub title: String,
    /// Comma-separated technology list.
    pub tech: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderEducation {
    pub school: String,
    pub degree: String,
    pub year: String,
}

/// The nested object the form UI edits. Mirrors the stored document but
/// with the form's own field names for experience/projects/education.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderForm {
    pub personal_info: Option<PersonalInfo>,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<BuilderExperience>,
    pub projects: Vec<BuilderProject>,
    pub education: Vec<BuilderEducation>,
}

impl BuilderForm {
    /// Stored → builder, used when loading an existing document for editing.
    pub fn from_row(row: &ResumeRow) -> Self {
        BuilderForm {
            personal_info: Some(row.personal_info.0.clone()),
            summary: row.summary.clone(),
            skills: row.skills.clone(),
            experience: row
                .experience
                .0
                .iter()
                .map(|exp| BuilderExperience {
                    role: exp.position.clone(),
                    company: exp.company.clone(),
                    duration: join_duration(exp),
                    description: exp.description.clone(),
                })
                .collect(),
            projects: row
                .projects
                .0
                .iter()
                .map(|p| BuilderProject {
                    title: p.name.clone(),
                    tech: p.technologies.join(", "),
                    description: p.description.clone(),
                    link: p.link.clone(),
                })
                .collect(),
            education: row
                .education
                .0
                .iter()
                .map(|e| BuilderEducation {
                    school: e.institution.clone(),
                    degree: e.degree.clone(),
                    year: e.graduation_year.clone(),
                })
                .collect(),
        }
    }

    /// Builder → stored. Fields the form does not carry (achievements,
    /// education field/gpa, project github) come out as defaults.
    pub fn into_input(self) -> ResumeInput {
        ResumeInput {
            user_id: None,
            personal_info: self.personal_info,
            summary: self.summary,
            skills: self.skills,
            experience: self
                .experience
                .into_iter()
                .map(|exp| {
                    let (start_date, end_date, current) = split_duration(&exp.duration);
                    ExperienceEntry {
                        company: exp.company,
                        position: exp.role,
                        start_date,
                        end_date,
                        current,
                        description: exp.description,
                        achievements: Vec::new(),
                    }
                })
                .collect(),
            education: self
                .education
                .into_iter()
                .map(|e| EducationEntry {
                    institution: e.school,
                    degree: e.degree,
                    graduation_year: e.year,
                    ..Default::default()
                })
                .collect(),
            projects: self
                .projects
                .into_iter()
                .map(|p| ProjectEntry {
                    name: p.title,
                    technologies: split_tech(&p.tech),
                    description: p.description,
                    link: p.link,
                    ..Default::default()
                })
                .collect(),
            certifications: Vec::new(),
        }
    }
}

fn join_duration(exp: &ExperienceEntry) -> String {
    let start = exp.start_date.trim();
    let end = if exp.current {
        "Present"
    } else {
        exp.end_date.trim()
    };
    if end.is_empty() {
        start.to_string()
    } else {
        format!("{start} - {end}")
    }
}

fn split_duration(duration: &str) -> (String, String, bool) {
    match duration.split_once(" - ") {
        Some((start, end)) if end.trim().eq_ignore_ascii_case("present") => {
            (start.trim().to_string(), String::new(), true)
        }
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string(), false),
        None => (duration.trim().to_string(), String::new(), false),
    }
}

fn split_tech(tech: &str) -> Vec<String> {
    tech.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
