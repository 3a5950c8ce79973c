//! Invariants that must hold for every converted sentence.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::convert;
use helpers::tei_fixtures::{ANA_TECE, CORPUS};
use rstest::rstest;
use tei_conllu::tei::{Element, attr, parse_document, tag};
use tei_conllu::SyntaxMode;

/// Source sentences in document order.
fn source_sentences(root: &Element) -> Vec<&Element> {
    fn walk<'a>(node: &'a Element, out: &mut Vec<&'a Element>) {
        for child in &node.children {
            if child.is_tei(tag::SENTENCE) {
                out.push(child);
            } else {
                walk(child, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn source_forms(sentence: &Element) -> Vec<(String, bool)> {
    fn walk(node: &Element, out: &mut Vec<(String, bool)>) {
        for child in &node.children {
            if child.is_tei(tag::WORD) || child.is_tei(tag::PUNCTUATION) {
                out.push((
                    child.text.clone().unwrap_or_default(),
                    child.has_attr(attr::JOIN),
                ));
            } else if child.is_tei(tag::SEGMENT) {
                walk(child, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(sentence, &mut out);
    out
}

#[rstest]
#[case(ANA_TECE)]
#[case(CORPUS)]
fn test_token_count_and_order_preserved(#[case] xml: &str) {
    let root = parse_document(xml.as_bytes()).unwrap();
    let sources = source_sentences(&root);
    let conversion = convert(xml, SyntaxMode::Ud);

    assert_eq!(sources.len(), conversion.sentences.len());
    for (source, sentence) in sources.iter().zip(&conversion.sentences) {
        let expected: Vec<_> = source_forms(source).into_iter().map(|(f, _)| f).collect();
        let actual: Vec<_> = sentence.tokens.iter().map(|t| t.form.clone()).collect();
        assert_eq!(expected, actual);
    }
}

#[rstest]
#[case(ANA_TECE)]
#[case(CORPUS)]
fn test_text_spacing_follows_join_markers(#[case] xml: &str) {
    let root = parse_document(xml.as_bytes()).unwrap();
    let conversion = convert(xml, SyntaxMode::Ud);

    for (source, sentence) in source_sentences(&root).iter().zip(&conversion.sentences) {
        let mut expected = String::new();
        for (index, (form, joined)) in source_forms(source).into_iter().enumerate() {
            if index > 0 && !joined {
                expected.push(' ');
            }
            expected.push_str(&form);
        }
        assert_eq!(sentence.metadata.text.as_deref(), Some(expected.as_str()));
    }
}

#[rstest]
#[case(SyntaxMode::Ud, "root")]
#[case(SyntaxMode::Jos, "modra")]
fn test_root_labels_have_head_zero(#[case] mode: SyntaxMode, #[case] root_label: &str) {
    let conversion = convert(CORPUS, mode);
    let mut roots = 0;
    for token in conversion.sentences.iter().flat_map(|s| &s.tokens) {
        if token.deprel.as_deref() == Some(root_label) {
            assert_eq!(token.head, Some(0), "{} should attach to root", token.form);
            roots += 1;
        } else if let Some(head) = token.head {
            assert_ne!(head, 0, "{} is not a root", token.form);
        }
    }
    assert!(roots > 0);
}

#[test]
fn test_heads_stay_inside_sentence() {
    let conversion = convert(CORPUS, SyntaxMode::Ud);
    for sentence in &conversion.sentences {
        for token in &sentence.tokens {
            if let Some(head) = token.head {
                assert!(head <= sentence.len());
                assert_ne!(head, token.id);
            }
        }
    }
}

#[test]
fn test_newdoc_and_newpar_once_per_container() {
    let conversion = convert(CORPUS, SyntaxMode::Ud);
    let newdocs: Vec<_> = conversion
        .sentences
        .iter()
        .filter_map(|s| s.metadata.newdoc_id.as_deref())
        .collect();
    let newpars: Vec<_> = conversion
        .sentences
        .iter()
        .filter_map(|s| s.metadata.newpar_id.as_deref())
        .collect();
    assert_eq!(newdocs, ["ssj2", "ssj3"]);
    assert_eq!(newpars, ["ssj2.1", "ssj2.2", "ssj3.1"]);
}

#[test]
fn test_corpus_has_no_overlapping_links() {
    // Overlaps are resolved last-write-wins; a real corpus should not need that.
    for mode in [SyntaxMode::Ud, SyntaxMode::Jos, SyntaxMode::JosSrl] {
        let conversion = convert(CORPUS, mode);
        assert_eq!(
            conversion.links.overwritten, 0,
            "{mode} links overlap in the sample corpus"
        );
    }
}
