use crate::OperationKind;
use crate::querygen::GeneratedOperation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryGenError {
    #[error(transparent)]
    MissingRootType(#[from] MissingRootTypeWarning),

    #[error("Failed to persist `{target}`: {err}")]
    PersistenceFailure {
        target: String,
        #[source]
        err: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("The {kind} root type `{root_type_name}` has no field named `{field_name}`")]
    UndefinedRootField {
        kind: OperationKind,
        root_type_name: String,
        field_name: String,
    },
}

/// Emitted when a schema does not define a root type for some kind of
/// operation. Nothing is generated for that kind, but generation of the other
/// kinds carries on.
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "The schema defines no {kind} root operation type, so no {} will be generated",
    .kind.directory_name(),
)]
pub struct MissingRootTypeWarning {
    pub kind: OperationKind,
}

/// Everything produced by one generation pass over a schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationReport {
    pub(super) operations: Vec<GeneratedOperation>,
    pub(super) warnings: Vec<MissingRootTypeWarning>,
}
impl GenerationReport {
    pub fn operation(
        &self,
        kind: OperationKind,
        field_name: &str,
    ) -> Option<&GeneratedOperation> {
        self.operations.iter().find(|op| {
            op.kind() == kind && op.field_name() == field_name
        })
    }

    /// Generated documents in generation order: all queries, then mutations,
    /// then subscriptions, each in root field declaration order.
    pub fn operations(&self) -> &[GeneratedOperation] {
        self.operations.as_slice()
    }

    pub fn warnings(&self) -> &[MissingRootTypeWarning] {
        self.warnings.as_slice()
    }
}
