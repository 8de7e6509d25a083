//! Prompt construction for lesson generation

use kalima_core::preprocess::{DocumentPreprocessor, Preprocessor};
use kalima_types::{LessonRequest, LessonSource};

const SCHEMA: &str = r#"{
  "title": "string",
  "vocabulary": [
    { "arabic": "string", "transliteration": "string", "english": "string", "example": "string" }
  ],
  "phrases": [
    { "arabic": "string", "transliteration": "string", "english": "string", "context": "string" }
  ],
  "quiz": [
    { "question": "string", "options": ["string"], "correctIndex": 0, "explanation": "string" }
  ]
}"#;

/// Build the prompt sent to the generative backend
pub fn build_prompt(request: &LessonRequest) -> String {
    let source = match &request.source {
        LessonSource::Topics(topics) => {
            let topics: Vec<&str> = topics
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect();
            format!("Base the lesson on these topics: {}.", topics.join(", "))
        }
        LessonSource::Document { name, text } => {
            let text = DocumentPreprocessor.process(text);
            format!(
                "Base the lesson on the vocabulary found in the document \"{name}\":\n\"\"\"\n{text}\n\"\"\""
            )
        }
    };

    format!(
        "You are an Arabic teacher preparing a lesson at the {level} level for an English speaker.\n\
         {source}\n\n\
         Produce exactly {vocabulary} vocabulary items, {phrases} useful phrases and \
         {quiz} multiple-choice quiz questions with four options each.\n\
         Write Arabic in Arabic script with full diacritics, give a Latin transliteration \
         and an English meaning for every item.\n\
         `correctIndex` is the zero-based index of the right option.\n\
         Respond with JSON only, no commentary, matching this shape:\n{SCHEMA}",
        level = request.level.as_str(),
        vocabulary = request.vocabulary_count,
        phrases = request.phrase_count,
        quiz = request.quiz_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalima_types::Difficulty;

    fn request(source: LessonSource) -> LessonRequest {
        LessonRequest {
            source,
            level: Difficulty::Intermediate,
            vocabulary_count: 8,
            phrase_count: 4,
            quiz_count: 3,
        }
    }

    #[test]
    fn test_topics_prompt() {
        let prompt = build_prompt(&request(LessonSource::Topics(vec![
            "food".to_string(),
            "  ".to_string(),
            " travel ".to_string(),
        ])));

        assert!(prompt.contains("topics: food, travel."));
        assert!(prompt.contains("at the intermediate level"));
        assert!(prompt.contains("exactly 8 vocabulary items, 4 useful phrases and 3 multiple-choice"));
        assert!(prompt.contains("\"correctIndex\""));
    }

    #[test]
    fn test_document_prompt_is_preprocessed() {
        let prompt = build_prompt(&request(LessonSource::Document {
            name: "menu.txt".to_string(),
            text: "  قهوة\r\n\r\n\r\nشاي  ".to_string(),
        }));

        assert!(prompt.contains("document \"menu.txt\""));
        assert!(prompt.contains("قهوة\n\nشاي"));
    }
}
