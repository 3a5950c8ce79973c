//! TEI to CoNLL-U conversion.
//!
//! ## Architecture
//!
//! ```text
//! walker     → finds document roots (<bibl> + <p>) at any depth
//!   ↓
//! sentence   → one <s> into one CoNLL-U sentence
//!   ├── text   → `# text` reconstruction
//!   ├── token  → <w>/<pc> rows (msd decoding in `msd`)
//!   └── links  → UD / JOS heads, SRL roles
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tei_conllu::{ConvertOptions, Converter, SyntaxMode};
//!
//! let converter = Converter::new(ConvertOptions {
//!     syntax: SyntaxMode::JosSrl,
//!     ..ConvertOptions::default()
//! });
//! let written = converter.convert_file("corpus.xml".as_ref(), None)?;
//! ```

pub mod links;
pub mod msd;
pub mod sentence;
pub mod text;
pub mod token;
pub mod walker;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::conllu::{self, Sentence};
use crate::error::{ConvertError, Result};
use crate::tei::parse_document;
use crate::xpos::XposTable;

pub use links::{LinkLayer, LinkStats};

// ============================================================================
// OPTIONS
// ============================================================================

/// Which link layers are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyntaxMode {
    /// Universal Dependencies links into HEAD/DEPREL.
    #[default]
    Ud,
    /// JOS links into HEAD/DEPREL.
    Jos,
    /// JOS links plus semantic roles in MISC.
    JosSrl,
}

impl SyntaxMode {
    /// Link layers resolved for this mode, in order.
    pub fn layers(self) -> &'static [LinkLayer] {
        match self {
            Self::Ud => &[LinkLayer::Ud],
            Self::Jos => &[LinkLayer::Jos],
            Self::JosSrl => &[LinkLayer::Jos, LinkLayer::Srl],
        }
    }
}

impl FromStr for SyntaxMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "UD" => Ok(Self::Ud),
            "JOS" => Ok(Self::Jos),
            "JOS+SRL" | "JOS-SRL" => Ok(Self::JosSrl),
            _ => Err(ConvertError::invalid_option(format!(
                "unknown syntax type '{s}' (expected UD, JOS or JOS+SRL)"
            ))),
        }
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ud => "UD",
            Self::Jos => "JOS",
            Self::JosSrl => "JOS+SRL",
        })
    }
}

/// Where document roots may appear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Search for document roots under any number of wrapper elements.
    #[default]
    Nested,
    /// The XML root itself must be the document root.
    Flat,
}

impl FromStr for Layout {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nested" => Ok(Self::Nested),
            "flat" => Ok(Self::Flat),
            _ => Err(ConvertError::invalid_option(format!(
                "unknown layout '{s}' (expected nested or flat)"
            ))),
        }
    }
}

/// Which neighbour a token's `join` marker glues it to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinDirection {
    /// No space between the marked token and the one before it.
    #[default]
    Before,
    /// No space between the marked token and the one after it.
    After,
}

impl FromStr for JoinDirection {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(ConvertError::invalid_option(format!(
                "unknown join direction '{s}' (expected before or after)"
            ))),
        }
    }
}

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub syntax: SyntaxMode,
    pub layout: Layout,
    pub join: JoinDirection,
}

// ============================================================================
// CONVERSION
// ============================================================================

/// The complete result of converting one TEI document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub sentences: Vec<Sentence>,
    pub documents: usize,
    pub paragraphs: usize,
    pub links: LinkStats,
}

impl Conversion {
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// CoNLL-U text of all sentences in order.
    pub fn render(&self) -> String {
        conllu::render(&self.sentences)
    }
}

/// Default output path: the input path with its extension replaced by `.conllu`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("conllu")
}

/// Converts TEI documents with fixed options and an optional tag table.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    xpos_table: Option<XposTable>,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            xpos_table: None,
        }
    }

    /// Rewrite xpos tags through `table` after conversion.
    pub fn with_xpos_table(mut self, table: XposTable) -> Self {
        self.xpos_table = Some(table);
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an in-memory TEI document.
    pub fn convert(&self, input: &[u8]) -> Result<Conversion> {
        let root = parse_document(input)?;
        let mut conversion = walker::walk(&root, &self.options)?;

        if let Some(table) = &self.xpos_table {
            let rewritten = table.apply(&mut conversion.sentences);
            tracing::debug!("rewrote {rewritten} xpos tags");
        }

        Ok(conversion)
    }

    /// Convert a TEI file and write the CoNLL-U result.
    ///
    /// Nothing is written unless the whole document converts. Returns the
    /// path written to, which is `output` or [`output_path`] of `input`.
    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let bytes = std::fs::read(input)?;
        let conversion = self.convert(&bytes)?;

        if conversion.links.overwritten > 0 {
            tracing::warn!(
                "{} links in {} overwrote an earlier assignment",
                conversion.links.overwritten,
                input.display()
            );
        }

        let target = output.map_or_else(|| output_path(input), Path::to_path_buf);
        std::fs::write(&target, conversion.render())?;

        tracing::info!(
            "converted {} ({} documents, {} sentences, {} tokens, {}) to {}",
            input.display(),
            conversion.documents,
            conversion.sentences.len(),
            conversion.token_count(),
            self.options.syntax,
            target.display()
        );

        Ok(target)
    }
}
