use crate::OperationKind;
use crate::querygen::DocumentSink;
use crate::querygen::GeneratedOperation;
use crate::querygen::GenerationReport;
use crate::querygen::KindReexportIndex;
use crate::querygen::MissingRootTypeWarning;
use crate::querygen::QueryGenConfig;
use crate::querygen::QueryGenError;
use crate::querygen::RootReexportIndex;
use crate::querygen::SelectionSynthesizer;
use crate::querygen::TraversalState;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, QueryGenError>;

/// Generates a query document for each root field of a [`Schema`].
///
/// Every document is generated from scratch (with its own variable table and
/// set of expanded edges), so the output for one root field never depends on
/// which other root fields were generated before it.
#[derive(Debug)]
pub struct OperationGenerator<'schema> {
    config: QueryGenConfig,
    schema: &'schema Schema,
}
impl<'schema> OperationGenerator<'schema> {
    pub fn config(&self) -> &QueryGenConfig {
        &self.config
    }

    /// Generate documents for every included root field of every root
    /// operation type the schema defines.
    pub fn generate_all(&self) -> GenerationReport {
        let mut report = GenerationReport::default();
        for kind in OperationKind::ALL {
            match self.generate_kind(kind) {
                Ok(operations) => report.operations.extend(operations),
                Err(warning) => report.warnings.push(warning),
            }
        }
        report
    }

    fn generate_kind(
        &self,
        kind: OperationKind,
    ) -> std::result::Result<Vec<GeneratedOperation>, MissingRootTypeWarning> {
        let root_type = self.schema.root_operation_type(kind).ok_or_else(|| {
            let warning = MissingRootTypeWarning { kind };
            log::warn!("{warning}");
            warning
        })?;

        Ok(root_type.fields()
            .values()
            .filter(|field| self.config.includes_field(field))
            .map(|field| self.generate_root_field(kind, root_type, field))
            .collect())
    }

    /// Generate the document for a single root field.
    ///
    /// The field is generated even if it is deprecated and deprecated fields
    /// are otherwise excluded.
    pub fn generate_operation(
        &self,
        kind: OperationKind,
        field_name: &str,
    ) -> Result<GeneratedOperation> {
        let root_type = self.schema.root_operation_type(kind)
            .ok_or(MissingRootTypeWarning { kind })?;
        let field = root_type.fields().get(field_name).ok_or_else(
            || QueryGenError::UndefinedRootField {
                kind,
                root_type_name: root_type.name().to_string(),
                field_name: field_name.to_string(),
            },
        )?;
        Ok(self.generate_root_field(kind, root_type, field))
    }

    fn generate_root_field(
        &self,
        kind: OperationKind,
        root_type: &'schema ObjectType,
        field: &'schema Field,
    ) -> GeneratedOperation {
        let synthesizer = SelectionSynthesizer::new(self.schema, &self.config);
        let mut state = TraversalState::new();
        let selection = synthesizer.synthesize_field(
            field,
            root_type.name(),
            &mut state,
            /* depth = */ 1,
            /* from_union = */ false,
        );

        let keyword = Self::operation_keyword(root_type.name());
        let document =
            if state.arguments.is_empty() {
                format!("{keyword} {}{{\n{selection}\n}}", field.name())
            } else {
                format!(
                    "{keyword} {}({}){{\n{selection}\n}}",
                    field.name(),
                    state.arguments.render_variable_declarations(),
                )
            };

        log::debug!(
            "Generated {kind} `{}` ({} variables, {} expanded edges)",
            field.name(),
            state.arguments.len(),
            state.cross_references.len(),
        );

        GeneratedOperation {
            document,
            field_name: field.name().to_string(),
            kind,
            variable_names: state.arguments
                .variable_names()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn new(schema: &'schema Schema, config: QueryGenConfig) -> Self {
        Self {
            config,
            schema,
        }
    }

    /// The keyword that opens a document generated for a field of the root
    /// type named `root_type_name`.
    ///
    /// The keyword is picked by looking for `query`, `mutation`, or
    /// `subscription` (in that order, ignoring case) in the root type's name.
    /// A root type whose name contains none of them has its own name used as
    /// the keyword. Such documents are not valid GraphQL, so a warning is
    /// logged when that happens.
    pub fn operation_keyword(root_type_name: &str) -> String {
        let lowercase_name = root_type_name.to_lowercase();
        let matched_kind = OperationKind::ALL.into_iter().find(
            |kind| lowercase_name.contains(kind.keyword_label()),
        );
        match matched_kind {
            Some(kind) => kind.keyword_label().to_string(),
            None => {
                log::warn!(
                    "Unable to infer an operation keyword from the root type name \
                    `{root_type_name}`; using the type name itself",
                );
                root_type_name.to_string()
            },
        }
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Generate every document (as [`OperationGenerator::generate_all()`]
    /// does) and write each one into `sink`, followed by an index for each
    /// kind of operation that has a root type and finally the root index.
    ///
    /// Stops at the first write that fails.
    pub fn write_all(&self, sink: &mut dyn DocumentSink) -> Result<GenerationReport> {
        let file_ext = self.config.file_extension.as_str();
        let mut report = GenerationReport::default();
        let mut root_index = RootReexportIndex::new();

        for kind in OperationKind::ALL {
            let operations = match self.generate_kind(kind) {
                Ok(operations) => operations,
                Err(warning) => {
                    report.warnings.push(warning);
                    continue;
                },
            };

            let dir_name = kind.directory_name();
            let mut kind_index = KindReexportIndex::new(file_ext);
            for operation in operations {
                sink.write_document(
                    kind,
                    operation.field_name(),
                    file_ext,
                    operation.document(),
                ).map_err(|err| QueryGenError::PersistenceFailure {
                    target: format!("{dir_name}/{}.{file_ext}", operation.field_name()),
                    err,
                })?;
                kind_index.push(operation.field_name());
                report.operations.push(operation);
            }

            sink.write_kind_index(kind, kind_index.render().as_str())
                .map_err(|err| QueryGenError::PersistenceFailure {
                    target: format!("{dir_name}/index.js"),
                    err,
                })?;
            root_index.push(kind);
        }

        sink.write_root_index(root_index.render().as_str())
            .map_err(|err| QueryGenError::PersistenceFailure {
                target: "index.js".to_string(),
                err,
            })?;

        Ok(report)
    }
}
