use kalima_types::Lesson;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub arabic: String,
    pub transliteration: String,
    pub english: String,
}

/// Flip-through deck of a lesson's vocabulary followed by its phrases
#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        let vocabulary = lesson.vocabulary.iter().map(|v| Flashcard {
            arabic: v.arabic.clone(),
            transliteration: v.transliteration.clone(),
            english: v.english.clone(),
        });
        let phrases = lesson.phrases.iter().map(|p| Flashcard {
            arabic: p.arabic.clone(),
            transliteration: p.transliteration.clone(),
            english: p.english.clone(),
        });

        Self {
            cards: vocabulary.chain(phrases).collect(),
            index: 0,
            flipped: false,
        }
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move forward, wrapping to the first card
    pub fn next(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + 1) % self.cards.len();
            self.flipped = false;
        }
    }

    /// Move back, wrapping to the last card
    pub fn previous(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + self.cards.len() - 1) % self.cards.len();
            self.flipped = false;
        }
    }

    /// 1-based position of the current card
    pub fn position(&self) -> usize {
        if self.cards.is_empty() { 0 } else { self.index + 1 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
