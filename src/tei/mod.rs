//! TEI XML input.
//!
//! The source document is read completely into an owned [`Element`] tree
//! before any conversion happens. The converter only understands a small
//! slice of the TEI vocabulary:
//!
//! ```text
//! <TEI>                     (any number of wrapper levels)
//!   <div xml:id="doc1">     document root: has <bibl> followed by <p>
//!     <bibl>...</bibl>
//!     <p xml:id="doc1.1">
//!       <s xml:id="doc1.1.1">
//!         <w xml:id="doc1.1.1.t1" lemma=".." msd="UposTag=..|.." ana="mte:..">Ana</w>
//!         <seg> <w .../> <pc .../> </seg>
//!         <linkGrp type="UD-SYN"> <link ana="ud-syn:root" target="#s #t"/> </linkGrp>
//!       </s>
//!     </p>
//!   </div>
//! </TEI>
//! ```

mod tree;

pub use tree::{Element, parse_document};

/// Namespace URIs.
pub mod namespace {
    /// TEI P5 namespace.
    pub const TEI: &str = "http://www.tei-c.org/ns/1.0";
}

/// Local element names of the TEI vocabulary in use.
pub mod tag {
    pub const BIBL: &str = "bibl";
    pub const PARAGRAPH: &str = "p";
    pub const SENTENCE: &str = "s";
    pub const SEGMENT: &str = "seg";
    pub const WORD: &str = "w";
    pub const PUNCTUATION: &str = "pc";
    pub const LINK_GROUP: &str = "linkGrp";
    pub const LINK: &str = "link";
}

/// Attribute names, keyed by their qualified form.
pub mod attr {
    pub const XML_ID: &str = "xml:id";
    pub const LEMMA: &str = "lemma";
    pub const MSD: &str = "msd";
    pub const ANA: &str = "ana";
    pub const JOIN: &str = "join";
    pub const TYPE: &str = "type";
    pub const TARGET: &str = "target";
}
