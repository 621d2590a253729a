pub mod dom;
pub mod extract;
pub mod sections;

use scraper::Html;

use crate::config::ConjugationLayout;
use crate::error::ScrapeError;
use extract::ParsedVerb;

/// Run all five extractors over one verb detail page. The section extractors
/// return their empty values when their markup is absent; only a broken
/// conjugation table fails the page, and the harvest loop decides what that
/// means for the run.
pub fn parse_verb_page(
    name: &str,
    markup: &str,
    layout: &ConjugationLayout,
) -> Result<ParsedVerb, ScrapeError> {
    let doc = Html::parse_document(markup);
    Ok(ParsedVerb {
        name: name.to_string(),
        conjugations: extract::conjugations::extract(&doc, layout)?,
        structures: extract::structures::extract(&doc),
        examples: extract::examples::extract(&doc),
        annotations: extract::annotations::extract(&doc),
        word_family: extract::word_family::extract(&doc),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::assemble;

    #[test]
    fn full_fixture_page_parses() {
        let markup = std::fs::read_to_string("tests/fixtures/gehen.html").unwrap();
        let parsed = parse_verb_page("gehen", &markup, &ConjugationLayout::default()).unwrap();
        assert_eq!(parsed.name, "gehen");
        assert_eq!(parsed.conjugations.present, vec!["geht"]);
        assert_eq!(parsed.structures.len(), 2);
        assert_eq!(parsed.examples.len(), 2);
        assert_eq!(parsed.annotations.len(), 2);
        assert_eq!(parsed.word_family.len(), 3);
    }

    #[test]
    fn reparsing_is_byte_identical() {
        let markup = std::fs::read_to_string("tests/fixtures/gehen.html").unwrap();
        let layout = ConjugationLayout::default();
        let first = assemble(&parse_verb_page("gehen", &markup, &layout).unwrap());
        let second = assemble(&parse_verb_page("gehen", &markup, &layout).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn bare_page_fails_on_conjugation_table_only() {
        let err = parse_verb_page("leer", "<html><body></body></html>", &ConjugationLayout::default())
            .unwrap_err();
        assert!(matches!(err, ScrapeError::StructureMismatch(_)));
    }
}
