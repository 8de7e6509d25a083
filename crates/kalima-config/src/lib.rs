use std::env;

use serde::{Deserialize, Serialize};

use self::feedback::FeedbackConfig;
use self::generator::GeneratorConfig;
use self::lesson::LessonConfig;

pub mod feedback;
pub mod generator;
pub mod lesson;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub feedback: FeedbackConfig,
    pub lesson: LessonConfig,

    /// Capacity of the channels between input and session loops
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&v: &usize| v > 0)
            .unwrap_or(64);

        Config {
            generator: GeneratorConfig::new(),
            feedback: FeedbackConfig::new(),
            lesson: LessonConfig::default(),

            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            feedback: FeedbackConfig::default(),
            lesson: LessonConfig::default(),

            channel_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalima_types::Difficulty;

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "feedback": { "favorable": 80 }, "lesson": { "level": "advanced" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.feedback.favorable, 80);
        assert_eq!(config.feedback.intermediate, 50);
        assert_eq!(config.lesson.level, Difficulty::Advanced);
        assert_eq!(config.lesson.vocabulary_count, 10);
        assert_eq!(config.generator.model, "gemini-1.5-flash");
        assert!(!config.generator.is_configured());
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn test_feedback_thresholds_sanitized() {
        let feedback = FeedbackConfig {
            favorable: 150,
            intermediate: 120,
        }
        .sanitized();

        assert_eq!(feedback.favorable, 100);
        assert_eq!(feedback.intermediate, 100);

        let inverted = FeedbackConfig {
            favorable: 40,
            intermediate: 60,
        }
        .sanitized();
        assert_eq!(inverted.intermediate, 40);
    }

    #[test]
    fn test_generator_endpoint() {
        let generator = GeneratorConfig {
            api_url: "https://example.test/models/".to_string(),
            model: "m1".to_string(),
            ..Default::default()
        };

        assert_eq!(generator.endpoint(), "https://example.test/models/m1:generateContent");
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let generator = GeneratorConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(!generator.is_configured());
    }
}
