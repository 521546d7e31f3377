//! Token and pattern tables used to read cells and headers.
//!
//! All entries are lowercase; lookups lowercase the input first. Adding a
//! locale means adding entries here, not touching the classifiers.

use std::sync::LazyLock;

use regex::Regex;

/// Text that explicitly marks a cell as not answered.
pub const NA_TOKENS: &[&str] = &["na", "n/a", "null", "none", "nan", "bo'sh", "bosh"];

/// Text read as a correct answer.
pub const TRUE_TOKENS: &[&str] = &["1", "true", "t", "yes", "y", "x", "✓", "✔", "+"];

/// Text read as an incorrect answer.
pub const FALSE_TOKENS: &[&str] = &["0", "false", "f", "no", "n", "-"];

/// Header words that identify respondent (not item) columns.
///
/// Uzbek, Russian and English forms. Matched per word after non-word
/// characters are collapsed, so entries must not contain punctuation.
pub const LABEL_TOKENS: &[&str] = &[
    // uz
    "ism", "fam", "familya", "familiya", "talabgor", "oquvchi", "fio",
    // ru
    "имя", "фамилия", "фио", "студент", "ученик",
    // en
    "name", "first", "last", "surname", "student", "id", "passport",
];

/// Header forms meaning "item number N", tried in order.
pub const QUESTION_PATTERNS: &[&str] = &[
    r"q\s*\d+",
    r"savol\s*\d+",
    r"s\s*\d+",
    r"item\s*\d+",
    r"(?:q_|s_|savol_|item_)?\d+",
];

pub(crate) static QUESTION_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    QUESTION_PATTERNS
        .iter()
        .map(|pattern| {
            Regex::new(&format!("(?i)^(?:{pattern})$")).expect("Invalid question header regex")
        })
        .collect()
});

pub(crate) static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Invalid non-word regex"));

pub fn is_na_token(lowered: &str) -> bool {
    NA_TOKENS.contains(&lowered)
}

pub fn is_true_token(lowered: &str) -> bool {
    TRUE_TOKENS.contains(&lowered)
}

pub fn is_false_token(lowered: &str) -> bool {
    FALSE_TOKENS.contains(&lowered)
}

pub fn is_label_token(word: &str) -> bool {
    LABEL_TOKENS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_sets_are_disjoint() {
        for token in TRUE_TOKENS {
            assert!(!FALSE_TOKENS.contains(token), "{token} is both true and false");
            assert!(!NA_TOKENS.contains(token), "{token} is both true and NA");
        }
        for token in FALSE_TOKENS {
            assert!(!NA_TOKENS.contains(token), "{token} is both false and NA");
        }
    }

    #[test]
    fn tables_are_lowercase() {
        for token in NA_TOKENS
            .iter()
            .chain(TRUE_TOKENS)
            .chain(FALSE_TOKENS)
            .chain(LABEL_TOKENS)
        {
            assert_eq!(*token, token.to_lowercase());
        }
    }

    #[test]
    fn label_tokens_are_single_words() {
        for token in LABEL_TOKENS {
            assert!(!NON_WORD.is_match(token), "{token} would never match");
        }
    }

    #[test]
    fn question_patterns_compile() {
        assert_eq!(QUESTION_REGEXES.len(), QUESTION_PATTERNS.len());
    }
}
