use scraper::Html;

use crate::parser::dom;
use crate::parser::sections::Section;

/// Word-family members from the Wortfamilie section. The cell text is split
/// on the two article boundaries the site uses; fragments that lost their
/// article in the split get the feminine one back as a normalization default,
/// not a grammatical inference.
pub fn extract(doc: &Html) -> Vec<String> {
    match Section::WordFamily.locate(doc) {
        Some(cell) => split_members(&dom::element_text(cell)),
        None => Vec::new(),
    }
}

pub(crate) fn split_members(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text
        .split("die ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    parts
        .join(" ")
        .split("der ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with("die") || p.starts_with("der") {
                p.to_string()
            } else {
                format!("die {}", p)
            }
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_articles_and_reprefixes() {
        assert_eq!(
            split_members("die Arbeit der Arbeiter"),
            vec!["die Arbeit", "die Arbeiter"]
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(split_members("").is_empty());
        assert!(split_members("   ").is_empty());
    }

    #[test]
    fn fixture_page_word_family() {
        let markup = std::fs::read_to_string("tests/fixtures/gehen.html").unwrap();
        let members = extract(&Html::parse_document(&markup));
        assert_eq!(members, vec!["die Gehweise", "die Gang", "die Gehweg"]);
    }

    #[test]
    fn missing_section_is_empty() {
        assert!(extract(&Html::parse_document("<p>nichts</p>")).is_empty());
    }
}
