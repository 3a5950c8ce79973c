//! Text Reconstructor: rebuilds `# text` from the token forms.

use super::JoinDirection;
use crate::error::Result;
use crate::tei::{Element, attr};

/// Join token forms with single spaces, leaving out the space that a
/// token's `join` marker suppresses, then trim trailing whitespace.
pub fn reconstruct_text(tokens: &[&Element], join: JoinDirection) -> Result<String> {
    let mut text = String::new();
    let mut space_pending = false;

    for token in tokens {
        let form = token.require_text()?;
        let joined = token.has_attr(attr::JOIN);

        if space_pending && !(joined && join == JoinDirection::Before) {
            text.push(' ');
        }
        text.push_str(form);
        space_pending = !(joined && join == JoinDirection::After);
    }

    text.truncate(text.trim_end().len());
    Ok(text)
}
