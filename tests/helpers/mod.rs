//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod tei_fixtures;

use tei_conllu::{Conversion, ConvertOptions, Converter, SyntaxMode};

/// Convert a fixture with the given syntax mode, panicking on error.
pub fn convert(xml: &str, syntax: SyntaxMode) -> Conversion {
    Converter::new(ConvertOptions {
        syntax,
        ..ConvertOptions::default()
    })
    .convert(xml.as_bytes())
    .expect("conversion")
}

/// Token lines (non-comment, non-blank) of rendered CoNLL-U output.
pub fn token_lines(output: &str) -> Vec<Vec<&str>> {
    output
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').collect())
        .collect()
}

/// Wrap a document body in a TEI root.
pub fn tei(body: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="UTF-8"?><TEI xmlns="http://www.tei-c.org/ns/1.0">{body}</TEI>"#)
}
