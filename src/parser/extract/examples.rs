use scraper::Html;

use crate::parser::dom;
use crate::parser::sections::Section;

/// One example sentence. `explanation` is empty unless the source line
/// carried an `=` separator with a gloss behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub text: String,
    pub explanation: String,
}

/// Example sentences from the Beispiele section, in line order. Blank lines
/// are dropped; a missing section yields the empty list.
pub fn extract(doc: &Html) -> Vec<Example> {
    match Section::Examples.locate(doc) {
        Some(cell) => dom::text_lines(cell)
            .iter()
            .map(|line| split_line(line))
            .collect(),
        None => Vec::new(),
    }
}

/// Split a line at its first `=` into sentence and gloss. The gloss is
/// trimmed of the parenthesis and space markers the site wraps it in.
pub(crate) fn split_line(line: &str) -> Example {
    match line.split_once('=') {
        Some((text, explanation)) => Example {
            text: text.trim().to_string(),
            explanation: explanation
                .trim_matches(|c: char| c == '(' || c == ')' || c == ' ')
                .to_string(),
        },
        None => Example {
            text: line.trim().to_string(),
            explanation: String::new(),
        },
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_with_separator_splits() {
        assert_eq!(
            split_line("Er geht. = (he goes)"),
            Example {
                text: "Er geht.".into(),
                explanation: "he goes".into(),
            }
        );
    }

    #[test]
    fn line_without_separator_has_empty_explanation() {
        assert_eq!(
            split_line("Er geht."),
            Example {
                text: "Er geht.".into(),
                explanation: String::new(),
            }
        );
    }

    #[test]
    fn only_first_separator_counts() {
        let ex = split_line("a = b = c");
        assert_eq!(ex.text, "a");
        assert_eq!(ex.explanation, "b = c");
    }

    #[test]
    fn fixture_page_examples() {
        let markup = std::fs::read_to_string("tests/fixtures/gehen.html").unwrap();
        let examples = extract(&Html::parse_document(&markup));
        assert_eq!(
            examples,
            vec![
                Example {
                    text: "Er geht zur Arbeit.".into(),
                    explanation: "he goes to work".into(),
                },
                Example {
                    text: "Wir gehen ins Kino.".into(),
                    explanation: String::new(),
                },
            ]
        );
    }

    #[test]
    fn missing_section_is_empty() {
        assert!(extract(&Html::parse_document("<p>nichts</p>")).is_empty());
    }
}
