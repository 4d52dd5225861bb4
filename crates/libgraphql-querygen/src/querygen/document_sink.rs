use crate::OperationKind;
use indexmap::IndexMap;
use inherent::inherent;

pub type SinkResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Receives everything an [`OperationGenerator`](crate::querygen::OperationGenerator)
/// writes out: one document per root field, one re-export index per kind of
/// operation, and a root index tying those together.
pub trait DocumentSink {
    fn write_document(
        &mut self,
        kind: OperationKind,
        field_name: &str,
        file_extension: &str,
        document: &str,
    ) -> SinkResult;

    fn write_kind_index(&mut self, kind: OperationKind, index: &str) -> SinkResult;

    fn write_root_index(&mut self, index: &str) -> SinkResult;
}

/// A [`DocumentSink`] that keeps everything in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryDocumentSink {
    documents: IndexMap<OperationKind, IndexMap<String, String>>,
    kind_indexes: IndexMap<OperationKind, String>,
    root_index: Option<String>,
}
impl InMemoryDocumentSink {
    pub fn document(&self, kind: OperationKind, field_name: &str) -> Option<&str> {
        self.documents
            .get(&kind)?
            .get(field_name)
            .map(|doc| doc.as_str())
    }

    /// Documents written for `kind`, keyed by root field name in the order
    /// they were written.
    pub fn documents(&self, kind: OperationKind) -> Option<&IndexMap<String, String>> {
        self.documents.get(&kind)
    }

    pub fn kind_index(&self, kind: OperationKind) -> Option<&str> {
        self.kind_indexes.get(&kind).map(|index| index.as_str())
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_index(&self) -> Option<&str> {
        self.root_index.as_deref()
    }
}
#[inherent]
impl DocumentSink for InMemoryDocumentSink {
    pub fn write_document(
        &mut self,
        kind: OperationKind,
        field_name: &str,
        _file_extension: &str,
        document: &str,
    ) -> SinkResult {
        self.documents
            .entry(kind)
            .or_default()
            .insert(field_name.to_string(), document.to_string());
        Ok(())
    }

    pub fn write_kind_index(&mut self, kind: OperationKind, index: &str) -> SinkResult {
        self.kind_indexes.insert(kind, index.to_string());
        Ok(())
    }

    pub fn write_root_index(&mut self, index: &str) -> SinkResult {
        self.root_index = Some(index.to_string());
        Ok(())
    }
}
