//! Factory-method document creation.
//!
//! Callers hold a [`DocumentFactory`] and never name the concrete document
//! type; each factory decides which [`Document`] it builds.

mod factory;
mod kinds;

pub use factory::*;
pub use kinds::*;

use std::fmt;

/// The kinds of document a factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Word,
    Excel,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Word, DocumentKind::Excel];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Word => "docx",
            DocumentKind::Excel => "xlsx",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Word => f.write_str("Word"),
            DocumentKind::Excel => f.write_str("Excel"),
        }
    }
}

/// A document produced by a [`DocumentFactory`].
pub trait Document: fmt::Debug {
    fn kind(&self) -> DocumentKind;

    /// Opens the document and returns a confirmation message.
    fn open(&self) -> String {
        let kind = self.kind();
        format!("Opening {kind} document (.{})", kind.extension())
    }
}
