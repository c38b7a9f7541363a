//! OCR output normalization.
//!
//! Tesseract routinely mangles Vietnamese diacritics: `ă` comes back as `&`,
//! `ố` as `6`, `ề` as `€`, and so on. The repair table below is a flat,
//! ordered list of literal substitutions accumulated from real misreads. It
//! is not a model and makes no attempt at context sensitivity; new entries
//! come from misreads observed in scanned documents.

/// Ordered repair table applied to OCR output.
///
/// Order is load-bearing: pairs are applied sequentially and later pairs see
/// the output of earlier ones. Longer patterns sit before shorter overlapping
/// ones (`"thanh ph6"` must run before `"ph6"` or the compound form is lost).
/// Upper and lower case variants are separate entries; there is no implicit
/// case folding. Keep this a slice of pairs, not a map.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Thanh ph6", "Thành phố"),
    ("thanh ph6", "thành phố"),
    ("Ph6", "Phố"),
    ("ph6", "phố"),
    ("C&n", "Căn"),
    ("c&n", "căn"),
    ("Qu&n", "Quận"),
    ("qu&n", "quận"),
    ("Ph&i", "Phải"),
    ("ph&i", "phải"),
    ("L&m", "Làm"),
    ("l&m", "làm"),
    ("Nh&", "Nhà"),
    ("nh&", "nhà"),
    ("Kh6ng", "Không"),
    ("kh6ng", "không"),
    ("Ngu0i", "Người"),
    ("ngu0i", "người"),
    ("Du0c", "Được"),
    ("du0c", "được"),
    ("Tru0ng", "Trường"),
    ("tru0ng", "trường"),
    ("Thu0ng", "Thường"),
    ("thu0ng", "thường"),
    ("Nu6c", "Nước"),
    ("nu6c", "nước"),
    ("M6t", "Một"),
    ("m6t", "một"),
    ("S6", "Số"),
    ("s6", "số"),
    ("Ti€n", "Tiền"),
    ("ti€n", "tiền"),
    ("Vi€c", "Việc"),
    ("vi€c", "việc"),
    ("Viét", "Việt"),
    ("viét", "việt"),
    ("HQc", "Học"),
    ("hQc", "học"),
];

/// Normalize OCR output.
///
/// Collapses every run of whitespace (including newlines) to a single space,
/// applies [`SUBSTITUTIONS`] in table order with whole-string replacement,
/// then trims. Not guaranteed idempotent: a later rule's replacement text may
/// match an earlier rule's pattern on a second pass. Callers run it once.
pub fn normalize(text: &str) -> String {
    let mut text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    for (wrong, correct) in SUBSTITUTIONS {
        if text.contains(wrong) {
            text = text.replace(wrong, correct);
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapsed_and_all_occurrences_replaced() {
        assert_eq!(normalize("c&n   c&n"), "căn căn");
    }

    #[test]
    fn test_newlines_collapse_to_spaces() {
        assert_eq!(normalize("kh6ng\n\nph&i\tngu0i"), "không phải người");
    }

    #[test]
    fn test_longer_pattern_wins_over_shorter() {
        // "thanh ph6" precedes "ph6" in the table; reversing the order would
        // leave "thanh phố" without its diacritics.
        assert_eq!(normalize("thanh ph6 H6 Chi Minh"), "thành phố H6 Chi Minh");
        assert_eq!(normalize("khu ph6 c6"), "khu phố c6");
    }

    #[test]
    fn test_case_variants_are_distinct_rules() {
        assert_eq!(normalize("C&n"), "Căn");
        assert_eq!(normalize("c&n"), "căn");
    }

    #[test]
    fn test_untouched_text_passes_through() {
        assert_eq!(normalize("  hello   world  "), "hello world");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_double_application_does_not_crash() {
        // Idempotence is explicitly not part of the contract; we only require
        // that a second pass runs without error.
        let once = normalize("c&n nhà s6 5, qu&n 1");
        let twice = normalize(&once);
        assert!(!twice.is_empty());
    }
}
