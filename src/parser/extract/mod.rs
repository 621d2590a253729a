pub mod annotations;
pub mod conjugations;
pub mod examples;
pub mod structures;
pub mod word_family;

use crate::sink::VerbRecord;

pub use annotations::Annotation;
pub use conjugations::ConjugationSet;
pub use examples::Example;
pub use structures::Structure;

/// Everything the extractors pulled from one verb page. Built fresh per page,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVerb {
    pub name: String,
    pub conjugations: ConjugationSet,
    pub structures: Vec<Structure>,
    pub examples: Vec<Example>,
    pub annotations: Vec<Annotation>,
    pub word_family: Vec<String>,
}

/// Flatten a parsed verb into the row shape the dataset carries: conjugation
/// alternates joined with ", ", entries separated with "|", an entry's label
/// and example list joined with ": " and "; ". The standalone example
/// sentences stay off the row; they are display-only. Any input, including
/// all-empty, forms a valid record.
pub fn assemble(verb: &ParsedVerb) -> VerbRecord {
    VerbRecord {
        verb: verb.name.clone(),
        conjugations_present: verb.conjugations.present.join(", "),
        conjugations_past: verb.conjugations.past.join(", "),
        conjugations_perfect: verb.conjugations.perfect.join(", "),
        conjugations_imperative: verb.conjugations.imperative.join(", "),
        structures: join_labeled(
            verb.structures
                .iter()
                .map(|s| (s.pattern.as_str(), s.examples.as_slice())),
        ),
        wortfamilie: verb.word_family.join(" | "),
        prefix_verbs: join_labeled(
            verb.annotations
                .iter()
                .map(|a| (a.prefix.as_str(), a.examples.as_slice())),
        ),
    }
}

fn join_labeled<'a>(entries: impl Iterator<Item = (&'a str, &'a [String])>) -> String {
    entries
        .map(|(label, items)| format!("{}: {}", label, items.join("; ")))
        .collect::<Vec<_>>()
        .join("|")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedVerb {
        ParsedVerb {
            name: "gehen".into(),
            conjugations: ConjugationSet {
                present: vec!["geht".into()],
                past: vec!["ging".into()],
                perfect: vec!["ist gegangen".into()],
                imperative: vec!["geh!".into()],
            },
            structures: vec![
                Structure {
                    pattern: "Satzbau A".into(),
                    examples: vec!["Ich gehe.".into(), "Ich komme.".into()],
                },
                Structure {
                    pattern: "Satzbau B".into(),
                    examples: vec!["Ich bleibe.".into()],
                },
            ],
            examples: vec![Example {
                text: "Er geht.".into(),
                explanation: String::new(),
            }],
            annotations: vec![Annotation {
                prefix: "weggehen".into(),
                examples: vec!["Er geht weg.".into()],
            }],
            word_family: vec!["die Gehweise".into(), "die Gang".into()],
        }
    }

    #[test]
    fn joins_with_fixed_separators() {
        let record = assemble(&sample());
        assert_eq!(record.verb, "gehen");
        assert_eq!(record.conjugations_present, "geht");
        assert_eq!(record.conjugations_perfect, "ist gegangen");
        assert_eq!(
            record.structures,
            "Satzbau A: Ich gehe.; Ich komme.|Satzbau B: Ich bleibe."
        );
        assert_eq!(record.wortfamilie, "die Gehweise | die Gang");
        assert_eq!(record.prefix_verbs, "weggehen: Er geht weg.");
    }

    #[test]
    fn all_empty_inputs_form_valid_record() {
        let verb = ParsedVerb {
            name: "tun".into(),
            conjugations: ConjugationSet::default(),
            structures: Vec::new(),
            examples: Vec::new(),
            annotations: Vec::new(),
            word_family: Vec::new(),
        };
        let record = assemble(&verb);
        assert_eq!(record.verb, "tun");
        assert_eq!(record.conjugations_present, "");
        assert_eq!(record.structures, "");
        assert_eq!(record.wortfamilie, "");
        assert_eq!(record.prefix_verbs, "");
    }
}
