use crate::generation_args::GenerationArgs;
use crate::output_utils;
use crate::schema_sources::SchemaSources;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_querygen::OperationKind;
use libgraphql_querygen::querygen::OperationGenerator;

/// Print the document generated for a single root field to stdout.
#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        default_value_t=OperationKind::Query,
        help="Which root operation type the field belongs to (`query`, \
             `mutation`, or `subscription`).",
        long,
    )]
    kind: OperationKind,

    #[arg(
        help="Name of the root field to generate a document for.",
        long,
    )]
    field: String,

    #[command(flatten)]
    generation_args: GenerationArgs,

    #[command(flatten)]
    schema_sources: SchemaSources,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
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
        match generator.generate_operation(self.kind, self.field.as_str()) {
            Ok(operation) => CommandResult::stdout(format_args!(
                "{}",
                operation.document(),
            )),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        }
    }
}
