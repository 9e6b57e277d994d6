use super::{Document, DocumentKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordDocument;

impl Document for WordDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Word
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcelDocument;

impl Document for ExcelDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Excel
    }
}
