use indexmap::IndexMap;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};

use super::{attr, namespace};
use crate::error::{ConvertError, Result};

/// One XML element with its resolved namespace, attributes, leading text
/// and children in document order.
///
/// Attributes are keyed by their qualified name as written (`xml:id`,
/// `lemma`). Only the text before the first child is kept; tail text
/// between children carries no annotation in TEI corpora. Text is trimmed
/// of surrounding whitespace, so token forms never start or end with a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub namespace: Option<String>,
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether this is the TEI element with the given local name.
    pub fn is_tei(&self, local: &str) -> bool {
        self.name == local && self.namespace.as_deref() == Some(namespace::TEI)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Get an attribute or fail with a malformed-attribute error.
    pub fn require_attr(&self, key: &str) -> Result<&str> {
        self.attr(key)
            .ok_or_else(|| ConvertError::missing_attribute(key, self.describe()))
    }

    pub fn id(&self) -> Option<&str> {
        self.attr(attr::XML_ID)
    }

    pub fn require_id(&self) -> Result<&str> {
        self.require_attr(attr::XML_ID)
    }

    /// Leading text, failing if the element has none.
    pub fn require_text(&self) -> Result<&str> {
        self.text
            .as_deref()
            .ok_or_else(|| ConvertError::missing_text(self.describe()))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct TEI children with the given local name.
    pub fn tei_children<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.is_tei(local))
    }

    /// Short human-readable label for error messages, e.g. `<w xml:id="s1.t2">`.
    pub fn describe(&self) -> String {
        match self.id() {
            Some(id) => format!("<{} xml:id=\"{}\">", self.name, id),
            None => format!("<{}>", self.name),
        }
    }
}

/// Parse a complete XML document into its root [`Element`].
pub fn parse_document(input: &[u8]) -> Result<Element> {
    let mut reader = NsReader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(open_element(&reader, e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = open_element(&reader, e)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ConvertError::xml("Closing tag without an open element"))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| ConvertError::xml(format!("Text error: {e}")))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e);
                append_text(&mut stack, &text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ConvertError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ConvertError::xml(format!(
            "Unexpected end of document inside {}",
            open.describe()
        )));
    }

    root.ok_or_else(|| ConvertError::xml("Document has no root element"))
}

fn open_element<R>(reader: &NsReader<R>, start: &BytesStart<'_>) -> Result<Element> {
    let (resolved, local) = reader.resolve_element(start.name());
    let name = std::str::from_utf8(local.as_ref())
        .map_err(|e| ConvertError::xml(format!("Invalid tag name: {e}")))?;

    let mut element = Element::new(name);
    if let ResolveResult::Bound(Namespace(uri)) = resolved {
        element.namespace = Some(String::from_utf8_lossy(uri).into_owned());
    }

    for attr_result in start.attributes() {
        let attr =
            attr_result.map_err(|e| ConvertError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ConvertError::xml(format!("Attribute key error: {e}")))?;

        // Namespace declarations are already applied by the reader.
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }

        let value = attr
            .unescape_value()
            .map_err(|e| ConvertError::xml(format!("Attribute value error: {e}")))?
            .into_owned();
        element.attributes.insert(key.to_string(), value);
    }

    Ok(element)
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(ConvertError::xml(format!(
            "Second root element {} after document root",
            element.describe()
        )));
    }
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) {
    if let Some(current) = stack.last_mut() {
        if current.children.is_empty() {
            current
                .text
                .get_or_insert_with(String::new)
                .push_str(text);
        }
    }
}
