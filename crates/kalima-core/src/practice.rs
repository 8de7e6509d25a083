use kalima_config::feedback::FeedbackConfig;
use kalima_types::{Lesson, Transcript};

use crate::feedback::FeedbackTier;
use crate::language::LanguageProcessor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeItem {
    pub reference: String,
    pub transliteration: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeFeedback {
    pub score: u8,
    /// Best score so far for the current item, including this attempt
    pub best: u8,
    pub tier: FeedbackTier,
}

/// Speech practice over a lesson's phrases
///
/// Falls back to vocabulary when the lesson has no phrases.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    items: Vec<PracticeItem>,
    best_scores: Vec<Option<u8>>,
    index: usize,
    thresholds: FeedbackConfig,
}

impl PracticeSession {
    pub fn from_lesson(lesson: &Lesson, thresholds: FeedbackConfig) -> Self {
        let items: Vec<PracticeItem> = if lesson.phrases.is_empty() {
            lesson
                .vocabulary
                .iter()
                .map(|v| PracticeItem {
                    reference: v.arabic.clone(),
                    transliteration: v.transliteration.clone(),
                    english: v.english.clone(),
                })
                .collect()
        } else {
            lesson
                .phrases
                .iter()
                .map(|p| PracticeItem {
                    reference: p.arabic.clone(),
                    transliteration: p.transliteration.clone(),
                    english: p.english.clone(),
                })
                .collect()
        };

        Self {
            best_scores: vec![None; items.len()],
            items,
            index: 0,
            thresholds,
        }
    }

    pub fn current(&self) -> Option<&PracticeItem> {
        self.items.get(self.index)
    }

    /// Score a transcript against the current item
    ///
    /// Interim transcripts are ignored and yield `None`.
    pub fn submit(
        &mut self,
        processor: &dyn LanguageProcessor,
        transcript: &Transcript,
    ) -> Option<PracticeFeedback> {
        let Transcript::Final(attempt) = transcript else {
            tracing::trace!("Ignoring interim transcript");
            return None;
        };

        let item = self.items.get(self.index)?;
        let score = processor.similarity(&item.reference, attempt);
        tracing::debug!(
            "Practice item {}: '{}' vs '{}' -> {}",
            self.index,
            item.reference,
            attempt,
            score
        );

        let best = self.best_scores[self.index].map_or(score, |b| b.max(score));
        self.best_scores[self.index] = Some(best);

        Some(PracticeFeedback {
            score,
            best,
            tier: FeedbackTier::from_score(score, &self.thresholds),
        })
    }

    /// Advance to the next item, returns false when the session is over
    pub fn next(&mut self) -> bool {
        if self.index < self.items.len() {
            self.index += 1;
        }
        self.index < self.items.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.items.len()
    }

    pub fn best_score(&self, index: usize) -> Option<u8> {
        self.best_scores.get(index).copied().flatten()
    }

    /// 1-based position of the current item
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.items.len())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
