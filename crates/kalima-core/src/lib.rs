pub mod error;
pub mod feedback;
pub mod flashcards;
pub mod flow;
pub mod language;
pub mod practice;
pub mod preprocess;
pub mod quiz;

pub use error::FlowError;
pub use feedback::FeedbackTier;
pub use flashcards::{Flashcard, FlashcardDeck};
pub use flow::{LessonMode, LessonStage, StudyFlow, StudyPhase};
pub use language::LanguageProcessor;
pub use practice::{PracticeFeedback, PracticeItem, PracticeSession};
pub use quiz::{AnswerOutcome, QuizResults, QuizSession};
