// All LLM prompt constants for the AI analysis module.

/// Job description used when the caller does not supply one.
pub const DEFAULT_JOB_DESCRIPTION: &str = "General software engineering position";

pub const ANALYZE_MAX_TOKENS: u32 = 2000;
pub const IMPROVE_MAX_TOKENS: u32 = 500;

/// Full analysis prompt. Replace `{resume_text}` and `{job_description}`
/// before sending. The rubric weights sum to 100.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"You are an expert ATS (Applicant Tracking System) analyzer and resume consultant. Analyze this resume and provide detailed feedback.

Resume:
{resume_text}

Job Description (if provided): {job_description}

Please analyze and respond with ONLY a valid JSON object (no markdown, no backticks) in this exact format:
{
  "atsScore": <number between 0-100>,
  "suggestions": [<array of exactly 5 specific, actionable improvement suggestions>],
  "missingKeywords": [<array of important keywords missing from the resume>],
  "strengths": [<array of 3 strengths>],
  "weaknesses": [<array of 3 weaknesses>]
}

Scoring criteria:
- Contact info completeness (10 points)
- Skills relevance (20 points)
- Experience descriptions (25 points)
- Education details (15 points)
- Keywords match (20 points)
- Format & clarity (10 points)"#;

/// Field-improvement prompts, one per improvable field type.
/// Replace `{text}` before sending.
pub const IMPROVE_SUMMARY_PROMPT: &str = "Improve this professional summary to be more impactful and ATS-friendly:\n\n{text}\n\nProvide only the improved version, no explanations.";

pub const IMPROVE_EXPERIENCE_PROMPT: &str = "Rewrite this job experience bullet point to be more achievement-focused with metrics:\n\n{text}\n\nProvide only the improved version.";

pub const IMPROVE_SKILL_PROMPT: &str = "Suggest related skills that should be added based on this skill:\n\n{text}\n\nProvide a comma-separated list only.";
