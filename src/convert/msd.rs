//! Micro-parsers for packed attribute strings.
//!
//! - word descriptors: `UposTag=NOUN|Case=Nom|Gender=Fem|Number=Sing`
//! - punctuation descriptors: `UposTag=PUNCT`
//! - analysis codes: `mte:Somei` (xpos is everything after `mte:`)
//! - token references: `#ssj1.1.1.t3` (position 3)

use smol_str::SmolStr;

use crate::conllu::FieldMap;
use crate::error::{ConvertError, Result};

/// Length of the `UposTag=` prefix on word descriptors.
pub const WORD_MSD_PREFIX_LEN: usize = 8;

/// Length of the `mte:` prefix on analysis codes.
pub const XPOS_PREFIX_LEN: usize = 4;

/// A decoded morphosyntactic descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msd {
    pub tag: SmolStr,
    /// `None` for punctuation, which never carries features.
    pub feats: Option<FieldMap>,
}

/// Decode a word descriptor into its coarse tag and feature map.
pub fn decode_word_msd(msd: &str) -> Result<Msd> {
    let mut pieces = msd.split('|');
    let head = pieces.next().unwrap_or_default();
    let tag = strip_fixed_prefix(head, WORD_MSD_PREFIX_LEN, "msd")?;

    let mut feats = FieldMap::new();
    for piece in pieces {
        let (name, value) = split_pair(piece).ok_or_else(|| {
            ConvertError::invalid_attribute(format!(
                "feature '{piece}' in msd '{msd}' is not a name=value pair"
            ))
        })?;
        feats.insert(name.to_string(), value.to_string());
    }

    Ok(Msd {
        tag: SmolStr::new(tag),
        feats: Some(feats),
    })
}

/// Decode a single-field punctuation descriptor (`name=value`) into its tag.
pub fn decode_punct_msd(msd: &str) -> Result<Msd> {
    let (_, tag) = split_pair(msd).ok_or_else(|| {
        ConvertError::invalid_attribute(format!("punctuation msd '{msd}' is not a name=value pair"))
    })?;
    Ok(Msd {
        tag: SmolStr::new(tag),
        feats: None,
    })
}

/// The xpos tag carried by an analysis code.
pub fn decode_xpos(ana: &str) -> Result<&str> {
    strip_fixed_prefix(ana, XPOS_PREFIX_LEN, "ana")
}

/// Sentence-relative position encoded in a token id or reference.
///
/// The final `.`-segment with its first character dropped is the 1-based
/// position: `ssj1.1.1.t3` and `#ssj1.1.1.t3` are both position 3.
pub fn position_of(reference: &str) -> Result<usize> {
    let segment = reference.rsplit('.').next().unwrap_or_default();
    let mut chars = segment.chars();
    chars.next();
    chars.as_str().parse().map_err(|_| {
        ConvertError::invalid_attribute(format!(
            "reference '{reference}' does not end in a numbered token id"
        ))
    })
}

/// Drop a fixed-length prefix, failing if the value is too short.
pub(crate) fn strip_fixed_prefix<'a>(value: &'a str, len: usize, what: &str) -> Result<&'a str> {
    value.get(len..).ok_or_else(|| {
        ConvertError::invalid_attribute(format!(
            "{what} '{value}' is missing its {len}-character prefix"
        ))
    })
}

/// Split `name=value`, requiring exactly one `=`.
fn split_pair(piece: &str) -> Option<(&str, &str)> {
    let (name, value) = piece.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some((name, value))
}
