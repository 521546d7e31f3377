//! Header-row classification.
//!
//! Only text cells of the first row are inspected; a header can look like
//! both a label and a question, and candidate selection lets the label win.

use rasch_model::RawCell;

use crate::tokens::{NON_WORD, QUESTION_REGEXES, is_label_token};

/// Role suggested by a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderClass {
    pub is_label: bool,
    pub is_question: bool,
}

/// Classifies a header cell. Non-text cells are neither label nor question.
pub fn classify_header(cell: &RawCell) -> HeaderClass {
    match cell.as_text() {
        Some(text) => HeaderClass {
            is_label: looks_like_label(text),
            is_question: looks_like_question(text),
        },
        None => HeaderClass::default(),
    }
}

/// True when any word of the header is a respondent label token.
pub fn looks_like_label(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    let collapsed = NON_WORD.replace_all(&lowered, " ");
    collapsed.split_whitespace().any(is_label_token)
}

/// True when the whole header reads as an item index.
pub fn looks_like_question(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    QUESTION_REGEXES.iter().any(|regex| regex.is_match(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_headers() {
        assert!(looks_like_label("Ism"));
        assert!(looks_like_label("Fam"));
        assert!(looks_like_label("Student ID"));
        assert!(looks_like_label("First name"));
        assert!(looks_like_label("passport-no"));
        assert!(looks_like_label("Фамилия"));
        assert!(!looks_like_label("Q1"));
        assert!(!looks_like_label("Identity"));
        assert!(!looks_like_label(""));
    }

    #[test]
    fn question_headers() {
        for header in ["Q1", "q 12", "S3", "Savol 7", "Item10", "item_4", "q_9", "15", " 40 "] {
            assert!(looks_like_question(header), "{header}");
        }
        for header in ["Question", "Q", "Q1a", "Ism", "", "1.5"] {
            assert!(!looks_like_question(header), "{header}");
        }
    }

    #[test]
    fn non_text_headers_are_neither() {
        assert_eq!(classify_header(&RawCell::Int(1)), HeaderClass::default());
        assert_eq!(classify_header(&RawCell::Empty), HeaderClass::default());
    }

    #[test]
    fn label_and_question_flags() {
        let class = classify_header(&RawCell::from("ID 1"));
        assert!(class.is_label);
        assert!(!class.is_question);

        let class = classify_header(&RawCell::from("Q1"));
        assert_eq!(
            class,
            HeaderClass {
                is_label: false,
                is_question: true
            }
        );
    }
}
