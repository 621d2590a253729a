use scraper::Html;

use crate::parser::dom;
use crate::parser::sections::Section;

/// Lines in the Strukturen cell that start with this word are example
/// sentences of the structure above them; everything else opens a new one.
const CONTINUATION_PREFIX: &str = "Ich";

/// One documented sentence pattern with its example sentences, source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub pattern: String,
    pub examples: Vec<String>,
}

/// Sentence patterns from the Strukturen section. Missing section: empty.
pub fn extract(doc: &Html) -> Vec<Structure> {
    match Section::Structures.locate(doc) {
        Some(cell) => group_lines(dom::text_lines(cell)),
        None => Vec::new(),
    }
}

/// Group cell lines into structures: a non-continuation line is a pattern
/// header, continuation lines collect under the most recent header. Example
/// lines before any header have nothing to attach to and are dropped.
pub(crate) fn group_lines(lines: Vec<String>) -> Vec<Structure> {
    let mut structures = Vec::new();
    let mut current: Option<Structure> = None;

    for line in lines {
        if !line.starts_with(CONTINUATION_PREFIX) {
            if let Some(done) = current.take() {
                structures.push(done);
            }
            current = Some(Structure {
                pattern: line,
                examples: Vec::new(),
            });
        } else if let Some(open) = current.as_mut() {
            open.examples.push(line);
        }
    }
    if let Some(done) = current {
        structures.push(done);
    }

    structures
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn groups_headers_and_examples() {
        let grouped = group_lines(lines(&[
            "Satzbau A",
            "Ich gehe.",
            "Ich komme.",
            "Satzbau B",
            "Ich bleibe.",
        ]));
        assert_eq!(
            grouped,
            vec![
                Structure {
                    pattern: "Satzbau A".into(),
                    examples: vec!["Ich gehe.".into(), "Ich komme.".into()],
                },
                Structure {
                    pattern: "Satzbau B".into(),
                    examples: vec!["Ich bleibe.".into()],
                },
            ]
        );
    }

    #[test]
    fn header_without_examples_kept() {
        let grouped = group_lines(lines(&["Satzbau A", "Satzbau B", "Ich bleibe."]));
        assert_eq!(grouped.len(), 2);
        assert!(grouped[0].examples.is_empty());
    }

    #[test]
    fn orphan_examples_dropped() {
        let grouped = group_lines(lines(&["Ich verliere mich.", "Satzbau A"]));
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].pattern, "Satzbau A");
        assert!(grouped[0].examples.is_empty());
    }

    #[test]
    fn fixture_page_structures() {
        let markup = std::fs::read_to_string("tests/fixtures/gehen.html").unwrap();
        let structures = extract(&Html::parse_document(&markup));
        assert_eq!(structures.len(), 2);
        assert_eq!(structures[0].pattern, "jemand geht irgendwohin");
        assert_eq!(
            structures[0].examples,
            vec!["Ich gehe nach Hause.", "Ich gehe in die Stadt."]
        );
        assert_eq!(structures[1].pattern, "etwas geht irgendwie");
        assert_eq!(structures[1].examples, vec!["Ich glaube, es geht gut."]);
    }

    #[test]
    fn missing_section_is_empty() {
        let structures = extract(&Html::parse_document("<html><body></body></html>"));
        assert!(structures.is_empty());
    }
}
