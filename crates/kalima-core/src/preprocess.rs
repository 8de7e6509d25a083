use unicode_normalization::UnicodeNormalization;

/// Cleans uploaded document text before it is embedded in a prompt
pub trait Preprocessor {
    /// Upper bound on characters kept, `None` for no limit
    fn max_chars(&self) -> Option<usize> {
        None
    }

    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Unify line endings and drop runs of blank lines
        let mut result = String::with_capacity(text.len());
        let mut blank_run = 0;
        for line in text.replace("\r\n", "\n").replace('\r', "\n").lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            result.push_str(line);
            result.push('\n');
        }

        let result = result.trim_end();

        match self.max_chars() {
            Some(limit) => match result.char_indices().nth(limit) {
                Some((cut, _)) => result[..cut].to_string(),
                None => result.to_string(),
            },
            None => result.to_string(),
        }
    }
}

/// Characters of document text sent to the backend
pub const MAX_DOCUMENT_CHARS: usize = 12_000;

pub struct DocumentPreprocessor;

impl Preprocessor for DocumentPreprocessor {
    fn max_chars(&self) -> Option<usize> {
        Some(MAX_DOCUMENT_CHARS)
    }
}
