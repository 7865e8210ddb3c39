//! Prompt text for cover letter generation.

/// System instruction for the cover letter chat call.
pub const COVER_LETTER_SYSTEM: &str = "\
You are an expert career assistant who writes professional, concise, and engaging cover letters.
Generate a tailored cover letter based on the candidate's CV and the job description.
Return only the cover letter text, formatted in proper paragraphs.";

/// Builds the user message. `cv_text` must already be truncated by the caller.
pub fn cover_letter_user_prompt(cv_text: &str, job_description: &str) -> String {
    format!("CV:\n{cv_text}\n\nJob Description:\n{job_description}\n")
}
