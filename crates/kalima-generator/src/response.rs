//! Parsing of backend output into a lesson

use kalima_types::Lesson;

use crate::GenerateError;

/// Remove a surrounding Markdown code fence, if any
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (```json)
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate a lesson from model output
pub fn parse_lesson(raw: &str) -> Result<Lesson, GenerateError> {
    let json = strip_code_fence(raw);
    if json.is_empty() {
        return Err(GenerateError::InvalidResponse("empty response".to_string()));
    }

    let lesson: Lesson = serde_json::from_str(json)
        .map_err(|e| GenerateError::InvalidResponse(format!("Failed to parse lesson: {}", e)))?;

    lesson.validate()?;

    tracing::debug!(
        "Parsed lesson '{}': {} vocabulary, {} phrases, {} questions",
        lesson.title,
        lesson.vocabulary.len(),
        lesson.phrases.len(),
        lesson.quiz.len()
    );

    Ok(lesson)
}
