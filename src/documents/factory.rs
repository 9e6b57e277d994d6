use super::{Document, DocumentKind, ExcelDocument, WordDocument};

/// Creates documents without exposing the concrete type to the caller.
pub trait DocumentFactory {
    fn create_document(&self) -> Box<dyn Document>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordDocumentFactory;

impl DocumentFactory for WordDocumentFactory {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(WordDocument)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelDocumentFactory;

impl DocumentFactory for ExcelDocumentFactory {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(ExcelDocument)
    }
}

/// Picks the factory responsible for `kind`.
pub fn factory_for(kind: DocumentKind) -> Box<dyn DocumentFactory> {
    match kind {
        DocumentKind::Word => Box::new(WordDocumentFactory),
        DocumentKind::Excel => Box::new(ExcelDocumentFactory),
    }
}
