//! Tree Walker: finds document roots at any depth and assembles their
//! sentences in document order.

use super::links::LinkStats;
use super::sentence::{Placement, assemble_sentence};
use super::{Conversion, ConvertOptions, Layout};
use crate::conllu::Sentence;
use crate::error::{ConvertError, Result};
use crate::tei::{Element, tag};

/// A document root directly contains a `bibl` header immediately followed
/// by a `p` paragraph.
pub fn is_document_root(node: &Element) -> bool {
    node.children
        .windows(2)
        .any(|pair| pair[0].is_tei(tag::BIBL) && pair[1].is_tei(tag::PARAGRAPH))
}

/// The flat layout is stricter: `bibl` must be the first child and `p`
/// the second.
pub fn starts_with_document_header(node: &Element) -> bool {
    matches!(
        node.children.as_slice(),
        [first, second, ..] if first.is_tei(tag::BIBL) && second.is_tei(tag::PARAGRAPH)
    )
}

/// Paragraphs of a document in order, looking through wrapper elements
/// but never into the bibliographic header.
pub fn paragraphs(document: &Element) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_paragraphs(document, &mut found);
    found
}

fn collect_paragraphs<'a>(parent: &'a Element, found: &mut Vec<&'a Element>) {
    for child in &parent.children {
        if child.is_tei(tag::PARAGRAPH) {
            found.push(child);
        } else if !child.is_tei(tag::BIBL) {
            collect_paragraphs(child, found);
        }
    }
}

/// Walk the parsed tree and convert every sentence.
pub fn walk(root: &Element, options: &ConvertOptions) -> Result<Conversion> {
    let mut walker = Walker {
        options,
        conversion: Conversion::default(),
    };

    match options.layout {
        Layout::Flat => {
            if !starts_with_document_header(root) {
                return Err(ConvertError::structure(format!(
                    "root {} must start with <bibl> followed by <p>",
                    root.describe()
                )));
            }
            walker.visit_document(root)?;
        }
        Layout::Nested => walker.visit(root)?,
    }

    if walker.conversion.documents == 0 {
        return Err(ConvertError::structure(
            "no element contains <bibl> followed by <p>",
        ));
    }

    Ok(walker.conversion)
}

struct Walker<'o> {
    options: &'o ConvertOptions,
    conversion: Conversion,
}

impl Walker<'_> {
    fn visit(&mut self, node: &Element) -> Result<()> {
        if node.is_leaf() {
            return Ok(());
        }
        if is_document_root(node) {
            return self.visit_document(node);
        }
        for child in &node.children {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit_document(&mut self, document: &Element) -> Result<()> {
        let doc_id = document.require_id()?;
        tracing::debug!("converting document {doc_id}");

        let mut first_in_document = true;
        for paragraph in paragraphs(document) {
            let par_id = paragraph.require_id()?;
            self.conversion.paragraphs += 1;

            for (index, source) in paragraph.tei_children(tag::SENTENCE).enumerate() {
                let placement = Placement {
                    newdoc_id: first_in_document.then_some(doc_id),
                    newpar_id: (index == 0).then_some(par_id),
                };
                first_in_document = false;

                let (sentence, stats) = assemble_sentence(source, placement, self.options)?;
                self.record(sentence, stats);
            }
        }

        self.conversion.documents += 1;
        Ok(())
    }

    fn record(&mut self, sentence: Sentence, stats: LinkStats) {
        self.conversion.links.merge(stats);
        self.conversion.sentences.push(sentence);
    }
}
