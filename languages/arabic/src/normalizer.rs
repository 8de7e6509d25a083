//! Arabic text normalization for pronunciation comparison
//!
//! Orthographic variation that a speech recognizer cannot be expected to
//! reproduce is folded away:
//! - diacritics (tashkeel) are removed
//! - alef variants become plain alef
//! - a final yaa becomes alef maqsura
//! - ta marbuta becomes ha
//! - tatweel is removed
//! - whitespace is collapsed and trimmed
//! - presentation forms (ligatures, contextual glyphs) are unfolded

use unicode_normalization::UnicodeNormalization;

/// Combining marks stripped before comparison (U+064B..=U+065F, U+0670)
const DIACRITICS: &[char] = &[
    '\u{064B}', // Fathatan
    '\u{064C}', // Dammatan
    '\u{064D}', // Kasratan
    '\u{064E}', // Fatha
    '\u{064F}', // Damma
    '\u{0650}', // Kasra
    '\u{0651}', // Shadda
    '\u{0652}', // Sukun
    '\u{0653}', // Maddah above
    '\u{0654}', // Hamza above
    '\u{0655}', // Hamza below
    '\u{0656}', // Subscript alef
    '\u{0657}', // Inverted damma
    '\u{0658}', // Mark noon ghunna
    '\u{0659}', // Zwarakay
    '\u{065A}', // Vowel sign small v above
    '\u{065B}', // Vowel sign inverted small v above
    '\u{065C}', // Vowel sign dot below
    '\u{065D}', // Reversed damma
    '\u{065E}', // Fatha with two dots
    '\u{065F}', // Wavy hamza below
    '\u{0670}', // Superscript alef
];

/// Alef variants folded into plain alef (ا)
const ALEF_VARIANTS: &[char] = &[
    '\u{0623}', // Alef with hamza above (أ)
    '\u{0625}', // Alef with hamza below (إ)
    '\u{0622}', // Alef with madda (آ)
    '\u{0671}', // Alef wasla (ٱ)
];

const ALEF: char = '\u{0627}';
const YAA: char = '\u{064A}';
const ALEF_MAQSURA: char = '\u{0649}';
const TAA_MARBUTA: char = '\u{0629}';
const HAA: char = '\u{0647}';
const TATWEEL: char = '\u{0640}';

/// Normalize Arabic text for comparison
///
/// Never fails; text in other scripts passes through untouched apart from
/// canonical composition (NFC) and whitespace collapsing. The result is
/// stable under a second call: `normalize(&normalize(s)) == normalize(s)`.
///
/// The final yaa rule only looks at the last character of the whole string,
/// not at the end of every word.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Compatibility folding is limited to Arabic presentation forms (ﻻ -> لا)
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if is_presentation_form(c) {
            folded.extend(std::iter::once(c).nfkc());
        } else {
            folded.push(c);
        }
    }

    let mut result = String::with_capacity(folded.len());
    let mut last_was_space = true; // Start true to skip leading spaces

    // NFC composes alef + combining hamza into the precomposed variant
    for c in folded.nfc() {
        if DIACRITICS.contains(&c) || c == TATWEEL {
            continue;
        }

        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
            continue;
        }

        let c = if ALEF_VARIANTS.contains(&c) {
            ALEF
        } else if c == TAA_MARBUTA {
            HAA
        } else {
            c
        };

        result.push(c);
        last_was_space = false;
    }

    if result.ends_with(' ') {
        result.pop();
    }

    // Deleting tatweel can leave surviving marks out of canonical order
    let mut result: String = result.nfc().collect();

    if result.ends_with(YAA) {
        result.pop();
        result.push(ALEF_MAQSURA);
    }

    result
}

#[inline]
fn is_presentation_form(c: char) -> bool {
    matches!(c as u32, 0xFB50..=0xFDFF | 0xFE70..=0xFEFF)
}

/// Check if a character belongs to one of the Arabic blocks
#[inline]
pub fn is_arabic(c: char) -> bool {
    let code = c as u32;
    (0x0600..=0x06FF).contains(&code)
        || (0x0750..=0x077F).contains(&code)
        || (0x08A0..=0x08FF).contains(&code)
        || (0xFB50..=0xFDFF).contains(&code)
        || (0xFE70..=0xFEFF).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(normalize("مَرْحَبًا"), "مرحبا");
        assert_eq!(normalize("بِسْمِ اللَّهِ الرَّحْمَٰنِ"), "بسم الله الرحمن");
    }

    #[test]
    fn test_alef_variants() {
        let plain = normalize("احمد");
        assert_eq!(normalize("أحمد"), plain);
        assert_eq!(normalize("إحمد"), plain);
        assert_eq!(normalize("آحمد"), plain);
        assert_eq!(plain, "احمد");
    }

    #[test]
    fn test_decomposed_hamza_folds_to_alef() {
        assert_eq!(normalize("\u{0627}\u{0654}حمد"), "احمد");
    }

    #[test]
    fn test_taa_marbuta() {
        let normalized = normalize("مدرسة");
        assert!(normalized.ends_with('ه'));
        assert!(!normalized.contains('ة'));
    }

    #[test]
    fn test_final_yaa_only_at_end_of_string() {
        assert_eq!(normalize("علي"), "على");
        // Only the last character of the whole input is inspected
        assert_eq!(normalize("في البيت"), "في البيت");
        assert_eq!(normalize("البيت في"), "البيت فى");
    }

    #[test]
    fn test_final_yaa_behind_tatweel_and_space() {
        assert_eq!(normalize("علي\u{0640} "), "على");
    }

    #[test]
    fn test_tatweel_removed() {
        assert_eq!(normalize("مـــرحبا"), "مرحبا");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("  صباح \t\n  الخير  "), "صباح الخير");
    }

    #[test]
    fn test_presentation_forms_folded() {
        // Lam-alef ligature
        assert_eq!(normalize("\u{FEFB}"), "لا");
    }

    #[test]
    fn test_non_arabic_passthrough() {
        assert_eq!(normalize("Hello   World"), "Hello World");
    }

    #[test]
    fn test_non_arabic_compatibility_chars_untouched() {
        assert_eq!(normalize("ﬁle"), "ﬁle");
        assert_eq!(normalize("x²"), "x²");
        assert_eq!(normalize("Ⅻ ＡＢＣ ①"), "Ⅻ ＡＢＣ ①");
        // Only the Arabic half of mixed input is folded
        assert_eq!(normalize("ﬁle \u{FEFB}"), "ﬁle لا");
    }

    #[test]
    fn test_alef_wasla_folds_to_alef() {
        assert_eq!(normalize("ٱلْكِتَاب"), "الكتاب");
        assert_eq!(normalize("\u{0671}"), "\u{0627}");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "مَرْحَبًا",
            "أَهْلًا وَسَهْلًا",
            "شُكْرًا جَزِيلًا",
            "صَبَاحُ الْخَيْرِ",
            "مدرسة",
            "علي\u{0640}",
            "ا\u{0640}\u{0654}",
            "و\u{0640}\u{0654}",
            "ب\u{0656}\u{0640}\u{06E1}",
            "  إِلَى   اللِّقَاءِ  ",
            "\u{FEFB} \u{FDF2}",
            "Hello World",
            "ﬁle x² ①",
            "Hello مَرْحَبًا World",
            "كتاب book في",
            "في\u{0640}\u{0640}",
            "علي \u{0640}  ",
            "ي",
            "\u{0640}ي\u{0640}",
            "ٱلْكِتَاب",
            "\u{0627}\u{0653}",
            "\u{0648}\u{0654}\u{064E}",
            "\u{064A}\u{0654}",
            "e\u{0301}\u{0651}",
            "\u{FE70}ب\u{FE8F}",
            "\u{FDFA}",
            "\u{064E}\u{064F}",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_is_arabic() {
        assert!(is_arabic('م'));
        assert!(is_arabic('\u{FEFB}'));
        assert!(!is_arabic('a'));
    }
}
