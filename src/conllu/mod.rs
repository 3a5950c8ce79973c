//! CoNLL-U output model.
//!
//! A [`Sentence`] is a list of [`Token`] rows plus the comment metadata
//! written above them. `feats` and `misc` are optional maps: `None` means
//! the column is deliberately empty and is rendered as `_`.

mod writer;

use std::collections::BTreeMap;

use smol_str::SmolStr;

pub use writer::{render, write_sentence, write_sentences};

/// Key/value column content (FEATS, MISC). Sorted by key on output.
pub type FieldMap = BTreeMap<String, String>;

/// MISC keys written by the converter.
pub mod misc {
    pub const SPACE_AFTER: &str = "SpaceAfter";
    pub const SPACE_AFTER_NO: &str = "No";
    pub const SRL: &str = "SRL";
}

/// One CoNLL-U token line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    /// 1-based position in the sentence.
    pub id: usize,
    pub form: String,
    pub lemma: String,
    pub upos: SmolStr,
    pub xpos: String,
    pub feats: Option<FieldMap>,
    /// Head position; `Some(0)` is the root.
    pub head: Option<usize>,
    pub deprel: Option<SmolStr>,
    pub deps: Option<String>,
    pub misc: Option<FieldMap>,
}

impl Token {
    /// Set a MISC entry, keeping any entries already present.
    pub fn set_misc(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.misc
            .get_or_insert_with(FieldMap::new)
            .insert(key.into(), value.into());
    }

    pub fn misc_value(&self, key: &str) -> Option<&str> {
        self.misc.as_ref()?.get(key).map(String::as_str)
    }

    pub fn feat(&self, key: &str) -> Option<&str> {
        self.feats.as_ref()?.get(key).map(String::as_str)
    }

    pub fn has_space_after(&self) -> bool {
        self.misc_value(misc::SPACE_AFTER) != Some(misc::SPACE_AFTER_NO)
    }
}

/// Sentence-level comment metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub newdoc_id: Option<String>,
    pub newpar_id: Option<String>,
    pub sent_id: Option<String>,
    pub text: Option<String>,
}

impl Metadata {
    /// Present entries in output order: newdoc id, newpar id, sent_id, text.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("newdoc id", self.newdoc_id.as_deref()),
            ("newpar id", self.newpar_id.as_deref()),
            ("sent_id", self.sent_id.as_deref()),
            ("text", self.text.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
    }
}

/// One CoNLL-U sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub metadata: Metadata,
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a 1-based position.
    pub fn token(&self, position: usize) -> Option<&Token> {
        position.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    /// Mutable token at a 1-based position.
    pub fn token_mut(&mut self, position: usize) -> Option<&mut Token> {
        position
            .checked_sub(1)
            .and_then(|index| self.tokens.get_mut(index))
    }
}
