use crate::OperationKind;

/// A finished query document for one root field.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedOperation {
    pub(super) document: String,
    pub(super) field_name: String,
    pub(super) kind: OperationKind,
    pub(super) variable_names: Vec<String>,
}
impl GeneratedOperation {
    /// The full GraphQL document text.
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Names (without the leading `$`) of the variables declared in the
    /// document's header, in declaration order.
    pub fn variable_names(&self) -> &[String] {
        self.variable_names.as_slice()
    }
}
