use crate::fs_document_sink::FsDocumentSink;
use crate::generation_args::GenerationArgs;
use crate::output_utils;
use crate::schema_sources::SchemaSources;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_querygen::OperationKind;
use libgraphql_querygen::querygen::OperationGenerator;
use std::path::PathBuf;

/// Generate a document for every root field of a schema and write them out,
/// grouped by kind of operation, along with `index.js` re-export files.
#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Directory to write generated documents into. Created if it \
             does not exist.",
        long,
        short='o',
    )]
    dest_dir: PathBuf,

    #[command(flatten)]
    generation_args: GenerationArgs,

    #[command(flatten)]
    schema_sources: SchemaSources,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.schema_sources.load_schema() {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        let generator = OperationGenerator::new(
            &schema,
            self.generation_args.to_config(),
        );
        let mut sink = FsDocumentSink::new(self.dest_dir.as_path());
        let report = match generator.write_all(&mut sink) {
            Ok(report) => report,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to write generated documents: {e}",
                output_utils::RED_X,
            )),
        };

        let kind_counts = OperationKind::ALL
            .into_iter()
            .map(|kind| format!(
                "  * Generated {} {}.",
                report.operations().iter().filter(|op| op.kind() == kind).count(),
                kind.directory_name(),
            ))
            .collect::<Vec<_>>()
            .join("\n");
        let warnings = report.warnings()
            .iter()
            .map(|warning| format!("\n  {} {warning}.", output_utils::WARNING_SIGN))
            .collect::<String>();

        CommandResult::stdout(format_args!(
            "{} Wrote {} files to {:?}:\n{kind_counts}{warnings}",
            output_utils::GREEN_CHECK,
            sink.num_files_written(),
            self.dest_dir,
        ))
    }
}
