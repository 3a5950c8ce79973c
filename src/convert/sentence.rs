//! Sentence Assembler: one TEI `s` element becomes one CoNLL-U sentence.

use super::ConvertOptions;
use super::links::{LinkStats, has_link_groups, resolve_links};
use super::text::reconstruct_text;
use super::token::{TokenKind, push_token};
use crate::conllu::Sentence;
use crate::error::Result;
use crate::tei::{Element, tag};

/// Where a sentence sits in its document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Document id, set only on the first sentence of the document.
    pub newdoc_id: Option<&'a str>,
    /// Paragraph id, set only on the first sentence of the paragraph.
    pub newpar_id: Option<&'a str>,
}

/// Flatten the tokens of a sentence in document order.
///
/// `seg` groups are transparent; anything that is neither a token nor a
/// segment (link groups, spacing elements) is skipped.
pub fn source_tokens(sentence: &Element) -> Vec<(&Element, TokenKind)> {
    let mut tokens = Vec::new();
    collect_tokens(sentence, &mut tokens);
    tokens
}

fn collect_tokens<'a>(parent: &'a Element, tokens: &mut Vec<(&'a Element, TokenKind)>) {
    for child in &parent.children {
        if let Some(kind) = TokenKind::of(child) {
            tokens.push((child, kind));
        } else if child.is_tei(tag::SEGMENT) {
            collect_tokens(child, tokens);
        }
    }
}

/// Assemble one sentence: metadata, tokens, then the configured link layers.
pub fn assemble_sentence(
    source: &Element,
    placement: Placement<'_>,
    options: &ConvertOptions,
) -> Result<(Sentence, LinkStats)> {
    let mut sentence = Sentence::new();
    sentence.metadata.sent_id = Some(source.require_id()?.to_string());

    let tokens = source_tokens(source);
    let elements: Vec<&Element> = tokens.iter().map(|(element, _)| *element).collect();
    sentence.metadata.text = Some(reconstruct_text(&elements, options.join)?);

    for (element, kind) in tokens {
        push_token(&mut sentence, element, kind, options.join)?;
    }

    sentence.metadata.newdoc_id = placement.newdoc_id.map(str::to_string);
    sentence.metadata.newpar_id = placement.newpar_id.map(str::to_string);

    let mut stats = LinkStats::default();
    if has_link_groups(source) {
        for layer in options.syntax.layers() {
            stats.merge(resolve_links(*layer, source, &mut sentence)?);
        }
    }

    tracing::trace!(
        "assembled sentence {:?} with {} tokens",
        sentence.metadata.sent_id,
        sentence.len()
    );

    Ok((sentence, stats))
}
