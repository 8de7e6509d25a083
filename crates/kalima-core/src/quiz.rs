use kalima_types::QuizQuestion;

use crate::error::FlowError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub correct: usize,
    pub total: usize,
    /// Rounded share of correct answers, 0 for an empty quiz
    pub percentage: u8,
}

/// Multiple-choice quiz, one question at a time
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    index: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, FlowError> {
        if questions.is_empty() {
            return Err(FlowError::EmptyQuiz);
        }

        Ok(Self {
            answers: vec![None; questions.len()],
            questions,
            index: 0,
        })
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Record an answer for the current question
    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome, FlowError> {
        let question = self
            .questions
            .get(self.index)
            .ok_or(FlowError::NoActiveQuestion)?;

        if option >= question.options.len() {
            return Err(FlowError::OptionOutOfRange {
                index: option,
                len: question.options.len(),
            });
        }

        if self.answers[self.index].is_some() {
            return Err(FlowError::AlreadyAnswered);
        }

        self.answers[self.index] = Some(option);

        Ok(AnswerOutcome {
            correct: option == question.correct_index,
            correct_index: question.correct_index,
            explanation: question.explanation.clone(),
        })
    }

    pub fn is_answered(&self) -> bool {
        self.answers.get(self.index).is_some_and(Option::is_some)
    }

    /// Move to the next question, returns false once past the last one
    pub fn advance(&mut self) -> bool {
        if self.index < self.questions.len() {
            self.index += 1;
        }
        self.index < self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// 1-based position of the current question
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.questions.len())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Unanswered questions count as wrong
    pub fn results(&self) -> QuizResults {
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.correct_index))
            .count();
        let total = self.questions.len();

        let percentage = if self.is_empty() {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u8
        };

        QuizResults {
            correct,
            total,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "Which word means book?".to_string(),
            options: vec!["كتاب".to_string(), "قلم".to_string(), "باب".to_string()],
            correct_index,
            explanation: Some("كتاب is book".to_string()),
        }
    }

    #[test]
    fn test_empty_quiz_rejected() {
        assert_eq!(QuizSession::new(vec![]).unwrap_err(), FlowError::EmptyQuiz);
    }

    #[test]
    fn test_answer_and_results() {
        let mut quiz = QuizSession::new(vec![question(0), question(1), question(2)]).unwrap();
        assert!(!quiz.is_empty());
        assert_eq!(quiz.len(), 3);

        let outcome = quiz.answer(0).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.explanation.as_deref(), Some("كتاب is book"));
        assert!(quiz.advance());

        let outcome = quiz.answer(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, 1);
        assert!(quiz.advance());

        quiz.answer(2).unwrap();
        assert!(!quiz.advance());
        assert!(quiz.is_finished());

        let results = quiz.results();
        assert_eq!(results.correct, 2);
        assert_eq!(results.total, 3);
        assert_eq!(results.percentage, 67);
    }

    #[test]
    fn test_double_answer_rejected() {
        let mut quiz = QuizSession::new(vec![question(0)]).unwrap();
        quiz.answer(1).unwrap();
        assert!(quiz.is_answered());
        assert_eq!(quiz.answer(0), Err(FlowError::AlreadyAnswered));
    }

    #[test]
    fn test_option_out_of_range() {
        let mut quiz = QuizSession::new(vec![question(0)]).unwrap();
        assert_eq!(
            quiz.answer(3),
            Err(FlowError::OptionOutOfRange { index: 3, len: 3 })
        );
        assert!(!quiz.is_answered());
    }

    #[test]
    fn test_no_active_question_after_end() {
        let mut quiz = QuizSession::new(vec![question(0)]).unwrap();
        assert!(!quiz.advance());
        assert_eq!(quiz.answer(0), Err(FlowError::NoActiveQuestion));
        assert_eq!(quiz.results().percentage, 0);
    }
}
