/// Speech recognition output
///
/// Recognizers emit interim hypotheses while the learner is still speaking;
/// only the final transcript is meant to be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Interim(String),
    Final(String),
}

impl Transcript {
    pub fn text(&self) -> &str {
        match self {
            Transcript::Interim(text) | Transcript::Final(text) => text,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Transcript::Final(_))
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Line typed by the learner
    TextInput(String),
    Transcript(Transcript),
    StatusUpdate(String),
    ShowCard(CardView),
    ShowFeedback(FeedbackView),
    ShowQuestion(QuestionView),
    ShowAnswer(AnswerView),
    ShowResults(ResultsView),
    SessionEnded,
}

#[derive(Debug, Clone)]
pub struct CardView {
    pub position: usize,
    pub total: usize,
    pub arabic: String,
    pub transliteration: String,
    /// Present once the card is flipped
    pub english: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FeedbackView {
    pub reference: String,
    pub attempt: String,
    pub score: u8,
    pub best: u8,
    pub tier: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct QuestionView {
    pub position: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AnswerView {
    pub correct: bool,
    pub correct_option: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResultsView {
    pub correct: usize,
    pub total: usize,
    pub percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_text() {
        let interim = Transcript::Interim("مر".to_string());
        let done = Transcript::Final("مرحبا".to_string());

        assert!(!interim.is_final());
        assert!(done.is_final());
        assert_eq!(done.text(), "مرحبا");
    }
}
