//! Token Builder: one TEI `w`/`pc` element becomes one CoNLL-U row.

use super::JoinDirection;
use super::msd::{self, Msd};
use crate::conllu::{Sentence, Token, misc};
use crate::error::Result;
use crate::tei::{Element, attr, tag};

/// Whether a source token is a word or a punctuation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

impl TokenKind {
    /// Token kind of a TEI element, `None` if it is not a token.
    pub fn of(element: &Element) -> Option<Self> {
        if element.is_tei(tag::WORD) {
            Some(Self::Word)
        } else if element.is_tei(tag::PUNCTUATION) {
            Some(Self::Punctuation)
        } else {
            None
        }
    }
}

/// Build the CoNLL-U row for a source token.
pub fn build_token(element: &Element, kind: TokenKind) -> Result<Token> {
    let id = msd::position_of(element.require_id()?)?;
    let form = element.require_text()?.to_string();
    let xpos = msd::decode_xpos(element.require_attr(attr::ANA)?)?.to_string();
    let descriptor = element.require_attr(attr::MSD)?;

    let (lemma, Msd { tag, feats }) = match kind {
        TokenKind::Word => (
            element.require_attr(attr::LEMMA)?.to_string(),
            msd::decode_word_msd(descriptor)?,
        ),
        TokenKind::Punctuation => (form.clone(), msd::decode_punct_msd(descriptor)?),
    };

    Ok(Token {
        id,
        form,
        lemma,
        upos: tag,
        xpos,
        feats,
        ..Token::default()
    })
}

/// Build a token, append it to the sentence and apply its `join` marker.
pub fn push_token(
    sentence: &mut Sentence,
    element: &Element,
    kind: TokenKind,
    join: JoinDirection,
) -> Result<()> {
    let token = build_token(element, kind)?;
    if token.id != sentence.len() + 1 {
        tracing::warn!(
            "token {} has id {} but is at position {}",
            element.describe(),
            token.id,
            sentence.len() + 1
        );
    }
    sentence.tokens.push(token);

    if element.has_attr(attr::JOIN) {
        let joined = match join {
            JoinDirection::Before => {
                let len = sentence.len();
                len.checked_sub(2).and_then(|index| sentence.tokens.get_mut(index))
            }
            JoinDirection::After => sentence.tokens.last_mut(),
        };
        if let Some(token) = joined {
            token.set_misc(misc::SPACE_AFTER, misc::SPACE_AFTER_NO);
        }
    }

    Ok(())
}
