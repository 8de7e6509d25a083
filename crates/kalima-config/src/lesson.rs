use kalima_types::Difficulty;
use serde::{Deserialize, Serialize};

fn default_vocabulary_count() -> usize {
    10
}

fn default_phrase_count() -> usize {
    5
}

fn default_quiz_count() -> usize {
    5
}

/// How much content to ask the backend for
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LessonConfig {
    #[serde(default = "default_vocabulary_count")]
    pub vocabulary_count: usize,
    #[serde(default = "default_phrase_count")]
    pub phrase_count: usize,
    #[serde(default = "default_quiz_count")]
    pub quiz_count: usize,
    #[serde(default)]
    pub level: Difficulty,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            vocabulary_count: default_vocabulary_count(),
            phrase_count: default_phrase_count(),
            quiz_count: default_quiz_count(),
            level: Difficulty::default(),
        }
    }
}
