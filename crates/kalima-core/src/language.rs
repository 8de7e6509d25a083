/// Text comparison interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ar", ...)
    fn language_code(&self) -> &str;

    /// Canonical form used for comparison
    fn normalize(&self, text: &str) -> String;

    /// Score a spoken attempt against a reference phrase, 0..=100
    fn similarity(&self, reference: &str, attempt: &str) -> u8;

    /// Whether the text contains any character of the language's script
    fn is_native_script(&self, text: &str) -> bool;
}
