//! Accent and case folding for station name matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `text` for comparison: strip diacritics and case.
///
/// The input is decomposed (NFKD), combining marks are dropped and the
/// remainder is lowercased. Lowercasing can itself produce decomposable
/// characters, so the decompose/strip step runs once more afterwards; this
/// keeps the function idempotent. Non-letters pass through unchanged.
///
/// # Examples
///
/// ```
/// use irail_mcp::stations::normalize;
///
/// assert_eq!(normalize("Liège"), "liege");
/// assert_eq!(normalize("Gent-Sint-Pieters"), "gent-sint-pieters");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped = strip_marks(text);
    let mut folded = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            // Full case folding for the characters lowercase leaves alone
            'ß' | 'ẞ' => folded.push_str("ss"),
            'ς' => folded.push('σ'),
            _ => folded.extend(c.to_lowercase()),
        }
    }
    strip_marks(&folded)
}

/// Decompose and drop combining marks.
fn strip_marks(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Liège"), "liege");
        assert_eq!(normalize("Bruxelles-Schérbéek"), "bruxelles-scherbeek");
        assert_eq!(normalize("Brüssel-Süd"), "brussel-sud");
    }

    #[test]
    fn plain_ascii_is_only_lowercased() {
        assert_eq!(normalize("Brussels"), "brussels");
        assert_eq!(normalize("brussels"), "brussels");
    }

    #[test]
    fn preserves_non_letters() {
        assert_eq!(normalize("Gent-Sint-Pieters"), "gent-sint-pieters");
        assert_eq!(normalize("Braine-l'Alleud 2"), "braine-l'alleud 2");
        assert_eq!(normalize("  x  "), "  x  ");
    }

    #[test]
    fn empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn compatibility_forms_fold() {
        // Ligature and modifier capital decompose to plain letters
        assert_eq!(normalize("ﬁ"), "fi");
        assert_eq!(normalize("ᴬ"), "a");
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn mixed_script_does_not_panic() {
        assert_eq!(normalize("Κολωνία"), "κολωνια");
        assert_eq!(normalize("Кёльн"), "кельн");
        assert_eq!(normalize("ケルン"), "ケルン");
    }
}
