use serde::{Deserialize, Serialize};

/// A single vocabulary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    /// Arabic script, diacritics optional
    pub arabic: String,
    pub transliteration: String,
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A short phrase used for speech practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub arabic: String,
    pub transliteration: String,
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// Generated lesson
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyItem>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Lesson {
    /// Check the lesson can be studied
    pub fn validate(&self) -> Result<(), LessonError> {
        if self.vocabulary.is_empty() && self.phrases.is_empty() {
            return Err(LessonError::NoContent);
        }

        for (index, question) in self.quiz.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(LessonError::TooFewOptions {
                    index,
                    count: question.options.len(),
                });
            }
            if question.correct_index >= question.options.len() {
                return Err(LessonError::AnswerOutOfRange {
                    index,
                    answer: question.correct_index,
                    count: question.options.len(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Where the lesson content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonSource {
    Topics(Vec<String>),
    Document { name: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRequest {
    pub source: LessonSource,
    pub level: Difficulty,
    pub vocabulary_count: usize,
    pub phrase_count: usize,
    pub quiz_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LessonError {
    #[error("Lesson has no vocabulary and no phrases")]
    NoContent,

    #[error("Quiz question {index} has {count} options, need at least 2")]
    TooFewOptions { index: usize, count: usize },

    #[error("Quiz question {index} answer {answer} is out of range for {count} options")]
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase() -> Phrase {
        Phrase {
            arabic: "شُكْرًا".to_string(),
            transliteration: "shukran".to_string(),
            english: "thank you".to_string(),
            context: None,
        }
    }

    fn question(options: &[&str], correct_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "What does شكرا mean?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            explanation: None,
        }
    }

    #[test]
    fn test_empty_lesson_invalid() {
        assert_eq!(Lesson::default().validate(), Err(LessonError::NoContent));
    }

    #[test]
    fn test_quiz_checks() {
        let mut lesson = Lesson {
            phrases: vec![phrase()],
            quiz: vec![question(&["thank you"], 0)],
            ..Default::default()
        };
        assert_eq!(
            lesson.validate(),
            Err(LessonError::TooFewOptions { index: 0, count: 1 })
        );

        lesson.quiz = vec![question(&["thank you", "hello"], 2)];
        assert!(matches!(
            lesson.validate(),
            Err(LessonError::AnswerOutOfRange { answer: 2, .. })
        ));

        lesson.quiz = vec![question(&["thank you", "hello"], 0)];
        assert_eq!(lesson.validate(), Ok(()));
        assert_eq!(lesson.quiz[0].correct_option(), Some("thank you"));
    }

    #[test]
    fn test_lesson_json_uses_camel_case() {
        let json = r#"{
            "title": "Greetings",
            "vocabulary": [],
            "phrases": [{"arabic": "مرحبا", "transliteration": "marhaban", "english": "hello"}],
            "quiz": [{"question": "q", "options": ["a", "b"], "correctIndex": 1}]
        }"#;

        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.title, "Greetings");
        assert_eq!(lesson.quiz[0].correct_index, 1);
        assert!(lesson.phrases[0].context.is_none());

        let back = serde_json::to_string(&lesson).unwrap();
        assert!(back.contains("correctIndex"));
        assert!(!back.contains("context"));
    }
}
