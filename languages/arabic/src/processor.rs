use kalima_core::language::LanguageProcessor;

use crate::normalizer::{is_arabic, normalize};
use crate::similarity::arabic_similarity;

/// Arabic language processor
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicProcessor;

impl ArabicProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for ArabicProcessor {
    fn language_code(&self) -> &str {
        "ar"
    }

    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    fn similarity(&self, reference: &str, attempt: &str) -> u8 {
        let score = arabic_similarity(reference, attempt);
        if !attempt.is_empty() && !self.is_native_script(attempt) {
            tracing::debug!("Attempt '{}' contains no Arabic script", attempt);
        }
        score
    }

    fn is_native_script(&self, text: &str) -> bool {
        text.chars().any(is_arabic)
    }
}
