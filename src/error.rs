//! Error types for TEI to CoNLL-U conversion.

use thiserror::Error;

/// Result alias used throughout the converter.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Errors that can occur while converting a TEI document.
///
/// Every variant is fatal: a conversion either produces the complete
/// sentence list or nothing at all.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document does not have the expected TEI skeleton.
    #[error("Unsupported document structure: {0}")]
    Structure(String),

    /// Missing required element, attribute or text.
    #[error("Missing required {kind} '{name}' on {context}")]
    Missing {
        kind: &'static str,
        name: String,
        context: String,
    },

    /// An attribute does not match its packed format.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },

    /// A link addresses a token position outside its sentence.
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Malformed line in a tag-conversion table.
    #[error("Tag table error on line {line}: {message}")]
    XposTable { line: usize, message: String },
}

impl ConvertError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a structural error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
            context: context.into(),
        }
    }

    /// Create a missing text error.
    pub fn missing_text(context: impl Into<String>) -> Self {
        Self::Missing {
            kind: "text",
            name: "#text".to_string(),
            context: context.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "attribute",
            message: message.into(),
        }
    }

    /// Create an invalid option error.
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "option",
            message: message.into(),
        }
    }

    /// Create an unresolved reference error.
    pub fn unresolved(message: impl Into<String>) -> Self {
        Self::UnresolvedReference(message.into())
    }

    /// Whether this error is a malformed-attribute error.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Missing { .. }
                | Self::Invalid {
                    kind: "attribute",
                    ..
                }
        )
    }
}
