pub mod lesson;
pub mod types;

pub use lesson::{
    Difficulty, Lesson, LessonError, LessonRequest, LessonSource, Phrase, QuizQuestion,
    VocabularyItem,
};
pub use types::{
    AnswerView, AppEvent, CardView, FeedbackView, QuestionView, ResultsView, Transcript,
};
