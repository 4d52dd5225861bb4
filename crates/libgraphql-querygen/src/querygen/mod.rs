mod argument_table;
mod cross_reference_set;
mod document_sink;
mod generated_operation;
mod operation_generator;
mod query_gen_config;
mod query_gen_error;
mod reexport_index;
mod selection_synthesizer;

pub use argument_table::ArgumentTable;
pub use cross_reference_set::CrossReferenceSet;
pub use document_sink::DocumentSink;
pub use document_sink::InMemoryDocumentSink;
pub use document_sink::SinkResult;
pub use generated_operation::GeneratedOperation;
pub use operation_generator::OperationGenerator;
pub use query_gen_config::QueryGenConfig;
pub use query_gen_error::GenerationReport;
pub use query_gen_error::MissingRootTypeWarning;
pub use query_gen_error::QueryGenError;
pub use reexport_index::KindReexportIndex;
pub use reexport_index::RootReexportIndex;
pub use selection_synthesizer::SelectionSynthesizer;
pub use selection_synthesizer::TraversalState;

#[cfg(test)]
mod tests;
