//! # tei-conllu
//!
//! Converts linguistically annotated TEI XML corpora into CoNLL-U treebanks.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → tree walk, sentence assembly, tokens, text, links
//!   ↓
//! xpos      → optional tag-conversion table
//!   ↓
//! conllu    → output model and serializer
//!   ↓
//! tei       → quick-xml element tree, TEI vocabulary
//!   ↓
//! error     → ConvertError
//! ```

/// Errors: structural, malformed attributes, unresolved references
pub mod error;

/// TEI input: owned element tree and vocabulary
pub mod tei;

/// CoNLL-U output model and serializer
pub mod conllu;

/// Optional xpos tag-conversion table
pub mod xpos;

/// The converter proper
pub mod convert;

pub use conllu::{Metadata, Sentence, Token};
pub use convert::{
    Conversion, ConvertOptions, Converter, JoinDirection, Layout, LinkLayer, SyntaxMode,
    output_path,
};
pub use error::{ConvertError, Result};
pub use xpos::XposTable;
