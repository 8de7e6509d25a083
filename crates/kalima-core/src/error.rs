use kalima_types::LessonError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Cannot {action} while in {from} phase")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("No active quiz question")]
    NoActiveQuestion,

    #[error("Question already answered")]
    AlreadyAnswered,

    #[error("Option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("Lesson has no quiz questions")]
    EmptyQuiz,

    #[error("Invalid lesson: {0}")]
    InvalidLesson(#[from] LessonError),
}
