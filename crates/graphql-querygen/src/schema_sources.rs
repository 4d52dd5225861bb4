use anyhow::Context;
use libgraphql_querygen::schema::Schema;
use libgraphql_querygen::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where to find the schema to generate documents from.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct SchemaSources {
    #[arg(
        help="Trust that the schema is valid and skip semantic validation \
             (undefined type references, non-object union members, etc).",
        long,
    )]
    assume_valid: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="SCHEMA_FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl SchemaSources {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg, in a stable order.
    pub(crate) fn discover_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan for schema files at/under {path:?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }

                let ext_matches = entry_path.extension()
                    .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                    .is_some_and(|ext| graphql_file_exts.contains(&ext));
                if ext_matches {
                    log::trace!("Found schema file at {entry_path:?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping file without a GraphQL extension: {entry_path:?}.");
                }
            }
        }

        // A single file passed explicitly is presumed to be a schema file, even
        // if its extension isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to load {only_path:?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(only_path.to_owned());
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No GraphQL schema files found at/under {:?}",
                self.file_or_dir_paths,
            );
        }

        log::debug!("Found {} GraphQL schema files.", file_paths.len());
        Ok(file_paths)
    }

    pub(crate) fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.discover_files()?;
        let schema = SchemaBuilder::new()
            .assume_valid(self.assume_valid)
            .load_files(&file_paths)?
            .build()?;
        log::debug!(
            "Built a schema with {} types from {} files.",
            schema.all_types().len(),
            file_paths.len(),
        );
        Ok(schema)
    }
}
