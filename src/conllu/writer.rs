use std::fmt::{self, Write};

use super::{FieldMap, Sentence, Token};

const EMPTY: &str = "_";

/// Render a sequence of sentences as one CoNLL-U document.
pub fn render(sentences: &[Sentence]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sentences(&mut out, sentences);
    out
}

pub fn write_sentences<W: Write>(out: &mut W, sentences: &[Sentence]) -> fmt::Result {
    for sentence in sentences {
        write_sentence(out, sentence)?;
    }
    Ok(())
}

/// Write metadata comments, one line per token and the terminating blank line.
pub fn write_sentence<W: Write>(out: &mut W, sentence: &Sentence) -> fmt::Result {
    for (key, value) in sentence.metadata.entries() {
        writeln!(out, "# {key} = {value}")?;
    }
    for token in &sentence.tokens {
        write_token(out, token)?;
    }
    writeln!(out)
}

fn write_token<W: Write>(out: &mut W, token: &Token) -> fmt::Result {
    let head = token.head.map(|head| head.to_string());
    let columns = [
        token.id.to_string(),
        text_column(&token.form),
        text_column(&token.lemma),
        text_column(&token.upos),
        text_column(&token.xpos),
        map_column(token.feats.as_ref()),
        head.unwrap_or_else(|| EMPTY.to_string()),
        text_column(token.deprel.as_deref().unwrap_or_default()),
        text_column(token.deps.as_deref().unwrap_or_default()),
        map_column(token.misc.as_ref()),
    ];
    writeln!(out, "{}", columns.join("\t"))
}

fn text_column(value: &str) -> String {
    if value.is_empty() {
        EMPTY.to_string()
    } else {
        value.to_string()
    }
}

fn map_column(map: Option<&FieldMap>) -> String {
    match map {
        Some(map) if !map.is_empty() => map
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("|"),
        _ => EMPTY.to_string(),
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sentence(f, self)
    }
}
