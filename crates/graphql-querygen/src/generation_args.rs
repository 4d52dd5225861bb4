use clap::builder::RangedU64ValueParser;
use libgraphql_querygen::querygen::QueryGenConfig;

/// Flags shared by every command that generates documents.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct GenerationArgs {
    #[arg(
        default_value_t=QueryGenConfig::DEFAULT_DEPTH_LIMIT,
        help="Maximum nesting depth at which object, interface, and union \
             fields are still expanded.",
        long,
        value_parser=RangedU64ValueParser::<usize>::new().range(1..),
    )]
    depth_limit: usize,

    #[arg(
        default_value=QueryGenConfig::DEFAULT_FILE_EXTENSION,
        help="File extension used for generated documents.",
        long="ext",
    )]
    file_extension: String,

    #[arg(
        help="Keep expanding a parent-to-child field edge every time it is \
             reached instead of only the first time (bounded by \
             --depth-limit).",
        long,
    )]
    include_cross_references: bool,

    #[arg(
        help="Include fields marked @deprecated.",
        long,
    )]
    include_deprecated_fields: bool,
}
impl GenerationArgs {
    pub(crate) fn to_config(&self) -> QueryGenConfig {
        QueryGenConfig::default()
            .with_depth_limit(self.depth_limit)
            .with_file_extension(self.file_extension.trim_start_matches('.'))
            .with_include_cross_references(self.include_cross_references)
            .with_include_deprecated_fields(self.include_deprecated_fields)
    }
}
