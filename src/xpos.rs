//! Optional xpos tag-conversion table.
//!
//! Corpora tag xpos with source-language MSD codes (`Somei`); a table file
//! maps them to another tagset (`Ncfsn`). One `source<TAB>target` pair per
//! line, blank lines and `#` comments skipped.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use crate::conllu::Sentence;
use crate::error::{ConvertError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XposTable {
    entries: IndexMap<String, String>,
}

impl XposTable {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        tracing::debug!("loaded {} xpos mappings from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = IndexMap::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(source), Some(target), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(ConvertError::XposTable {
                    line: index + 1,
                    message: format!("expected 'source<TAB>target', got '{line}'"),
                });
            };
            entries.insert(source.to_string(), target.to_string());
        }
        Ok(Self { entries })
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite every mapped xpos in place; returns the number rewritten.
    pub fn apply(&self, sentences: &mut [Sentence]) -> usize {
        let mut rewritten = 0;
        let mut unknown = IndexSet::new();

        for token in sentences.iter_mut().flat_map(|s| s.tokens.iter_mut()) {
            match self.entries.get(&token.xpos) {
                Some(target) => {
                    token.xpos.clone_from(target);
                    rewritten += 1;
                }
                None => {
                    if unknown.insert(token.xpos.clone()) {
                        tracing::debug!("no xpos mapping for '{}'", token.xpos);
                    }
                }
            }
        }

        rewritten
    }
}
