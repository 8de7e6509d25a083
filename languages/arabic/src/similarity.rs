//! Edit-distance based similarity scoring
//!
//! Scores are integer percentages in `0..=100`, meant for learner feedback
//! rather than exact matching.

use crate::normalizer::normalize;

/// Compute Levenshtein edit distance between two character sequences
///
/// Unit cost for insertion, deletion and substitution. Runs over the full
/// `(|a| + 1) x (|b| + 1)` table, so time and memory are O(|a|·|b|). Callers
/// pass single words or short phrases; paragraph-length input is not expected.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Compute similarity score between two strings
///
/// # Returns
/// - 100 when both are empty
/// - 0 when exactly one is empty
/// - 100 when they match after trimming and lowercasing
/// - otherwise `round((max_len - distance) / max_len * 100)`, never below 0
pub fn similarity(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a == b {
        return 100;
    }

    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();

    let max_len = chars_a.len().max(chars_b.len());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein(&chars_a, &chars_b);
    let ratio = max_len.saturating_sub(distance) as f64 / max_len as f64;

    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Compute similarity between a reference phrase and a spoken attempt
///
/// Both sides go through [`normalize`] first, so diacritics, alef variants
/// and tatweel never cost points.
pub fn arabic_similarity(reference: &str, attempt: &str) -> u8 {
    if reference.is_empty() && attempt.is_empty() {
        return 100;
    }
    if reference.is_empty() || attempt.is_empty() {
        return 0;
    }

    similarity(&normalize(reference), &normalize(attempt))
}
