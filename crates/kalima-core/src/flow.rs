//! Study flow state machine
//!
//! ```text
//! Setup -> Loading -> Lesson -> Quiz -> Results
//!   any phase -> Error
//!   Results | Error -> Setup
//! ```

use kalima_config::feedback::FeedbackConfig;
use kalima_types::Lesson;

use crate::error::FlowError;
use crate::flashcards::FlashcardDeck;
use crate::practice::PracticeSession;
use crate::quiz::{QuizResults, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonMode {
    Flashcards,
    Practice,
}

#[derive(Debug, Clone)]
pub struct LessonStage {
    pub deck: FlashcardDeck,
    pub practice: PracticeSession,
    pub mode: LessonMode,
}

#[derive(Debug, Clone)]
pub enum StudyPhase {
    Setup,
    Loading,
    Lesson(LessonStage),
    Quiz(QuizSession),
    Results(QuizResults),
    Error(String),
}

impl StudyPhase {
    pub fn name(&self) -> &'static str {
        match self {
            StudyPhase::Setup => "setup",
            StudyPhase::Loading => "loading",
            StudyPhase::Lesson(_) => "lesson",
            StudyPhase::Quiz(_) => "quiz",
            StudyPhase::Results(_) => "results",
            StudyPhase::Error(_) => "error",
        }
    }
}

pub struct StudyFlow {
    phase: StudyPhase,
    lesson: Option<Lesson>,
    thresholds: FeedbackConfig,
}

impl StudyFlow {
    pub fn new(thresholds: FeedbackConfig) -> Self {
        Self {
            phase: StudyPhase::Setup,
            lesson: None,
            thresholds,
        }
    }

    pub fn phase(&self) -> &StudyPhase {
        &self.phase
    }

    pub fn phase_mut(&mut self) -> &mut StudyPhase {
        &mut self.phase
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            from: self.phase.name(),
            action,
        }
    }

    fn transition(&mut self, next: StudyPhase) {
        tracing::debug!("Study flow: {} -> {}", self.phase.name(), next.name());
        self.phase = next;
    }

    pub fn begin_loading(&mut self) -> Result<(), FlowError> {
        match self.phase {
            StudyPhase::Setup => {
                self.transition(StudyPhase::Loading);
                Ok(())
            }
            _ => Err(self.invalid("begin loading")),
        }
    }

    /// Accept a generated lesson; an invalid lesson leaves the phase unchanged
    pub fn lesson_ready(&mut self, lesson: Lesson) -> Result<(), FlowError> {
        if !matches!(self.phase, StudyPhase::Loading) {
            return Err(self.invalid("accept a lesson"));
        }

        lesson.validate()?;

        let stage = LessonStage {
            deck: FlashcardDeck::from_lesson(&lesson),
            practice: PracticeSession::from_lesson(&lesson, self.thresholds),
            mode: LessonMode::Flashcards,
        };
        self.lesson = Some(lesson);
        self.transition(StudyPhase::Lesson(stage));

        Ok(())
    }

    /// Switch between flashcards and speech practice
    pub fn set_mode(&mut self, mode: LessonMode) -> Result<(), FlowError> {
        if let StudyPhase::Lesson(stage) = &mut self.phase {
            stage.mode = mode;
            return Ok(());
        }

        Err(self.invalid("switch lesson mode"))
    }

    pub fn start_quiz(&mut self) -> Result<(), FlowError> {
        if !matches!(self.phase, StudyPhase::Lesson(_)) {
            return Err(self.invalid("start the quiz"));
        }

        let questions = self
            .lesson
            .as_ref()
            .map(|l| l.quiz.clone())
            .unwrap_or_default();
        let quiz = QuizSession::new(questions)?;
        self.transition(StudyPhase::Quiz(quiz));

        Ok(())
    }

    pub fn finish_quiz(&mut self) -> Result<QuizResults, FlowError> {
        let results = match &self.phase {
            StudyPhase::Quiz(quiz) => quiz.results(),
            _ => return Err(self.invalid("finish the quiz")),
        };
        self.transition(StudyPhase::Results(results));

        Ok(results)
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("Study flow failed in {} phase: {}", self.phase.name(), message);
        self.transition(StudyPhase::Error(message));
    }

    pub fn restart(&mut self) -> Result<(), FlowError> {
        match self.phase {
            StudyPhase::Results(_) | StudyPhase::Error(_) => {
                self.lesson = None;
                self.transition(StudyPhase::Setup);
                Ok(())
            }
            _ => Err(self.invalid("restart")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalima_types::{LessonError, Phrase, QuizQuestion};

    fn lesson(with_quiz: bool) -> Lesson {
        Lesson {
            title: "Greetings".to_string(),
            vocabulary: vec![],
            phrases: vec![Phrase {
                arabic: "مَرْحَبًا".to_string(),
                transliteration: "marhaban".to_string(),
                english: "hello".to_string(),
                context: None,
            }],
            quiz: if with_quiz {
                vec![QuizQuestion {
                    question: "What does مرحبا mean?".to_string(),
                    options: vec!["hello".to_string(), "goodbye".to_string()],
                    correct_index: 0,
                    explanation: None,
                }]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn test_happy_path() {
        let mut flow = StudyFlow::new(FeedbackConfig::default());
        assert_eq!(flow.phase().name(), "setup");

        flow.begin_loading().unwrap();
        flow.lesson_ready(lesson(true)).unwrap();
        assert!(matches!(
            flow.phase(),
            StudyPhase::Lesson(LessonStage {
                mode: LessonMode::Flashcards,
                ..
            })
        ));

        flow.set_mode(LessonMode::Practice).unwrap();
        flow.start_quiz().unwrap();

        if let StudyPhase::Quiz(quiz) = flow.phase_mut() {
            quiz.answer(0).unwrap();
        } else {
            panic!("expected quiz phase");
        }

        let results = flow.finish_quiz().unwrap();
        assert_eq!(results.percentage, 100);
        assert_eq!(flow.phase().name(), "results");

        flow.restart().unwrap();
        assert_eq!(flow.phase().name(), "setup");
        assert!(flow.lesson().is_none());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut flow = StudyFlow::new(FeedbackConfig::default());

        assert_eq!(
            flow.start_quiz(),
            Err(FlowError::InvalidTransition {
                from: "setup",
                action: "start the quiz"
            })
        );
        assert!(flow.lesson_ready(lesson(true)).is_err());
        assert!(flow.restart().is_err());
        assert!(flow.finish_quiz().is_err());

        flow.begin_loading().unwrap();
        assert!(flow.begin_loading().is_err());
    }

    #[test]
    fn test_invalid_lesson_keeps_loading() {
        let mut flow = StudyFlow::new(FeedbackConfig::default());
        flow.begin_loading().unwrap();

        assert_eq!(
            flow.lesson_ready(Lesson::default()),
            Err(FlowError::InvalidLesson(LessonError::NoContent))
        );
        assert_eq!(flow.phase().name(), "loading");
    }

    #[test]
    fn test_lesson_without_quiz() {
        let mut flow = StudyFlow::new(FeedbackConfig::default());
        flow.begin_loading().unwrap();
        flow.lesson_ready(lesson(false)).unwrap();

        assert_eq!(flow.start_quiz(), Err(FlowError::EmptyQuiz));
        assert_eq!(flow.phase().name(), "lesson");
    }

    #[test]
    fn test_error_from_any_phase_then_restart() {
        let mut flow = StudyFlow::new(FeedbackConfig::default());
        flow.begin_loading().unwrap();
        flow.fail("backend not configured");

        match flow.phase() {
            StudyPhase::Error(message) => assert_eq!(message, "backend not configured"),
            other => panic!("unexpected phase {}", other.name()),
        }

        flow.restart().unwrap();
        assert_eq!(flow.phase().name(), "setup");
    }
}
