use crate::types::Field;

/// Options that control how much of a schema each generated document selects.
///
/// Every field is optional when deserialized; missing fields take the values
/// from [`QueryGenConfig::default()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct QueryGenConfig {
    /// Maximum nesting depth (root fields sit at depth 1) at which a field
    /// whose type has sub-fields may still be expanded.
    pub depth_limit: usize,

    /// Extension used for each document's file name in the generated
    /// re-export indexes. Has no effect on document content.
    pub file_extension: String,

    /// When `false`, an edge from a parent field to a child field is only
    /// expanded the first time it is reached along a traversal.
    pub include_cross_references: bool,

    /// When `false`, fields marked `@deprecated` are left out of every
    /// selection (and no documents are generated for deprecated root fields).
    pub include_deprecated_fields: bool,
}
impl QueryGenConfig {
    pub const DEFAULT_DEPTH_LIMIT: usize = 100;
    pub const DEFAULT_FILE_EXTENSION: &'static str = "gql";

    /// Whether `field` may appear in generated selections under this config.
    pub fn includes_field(&self, field: &Field) -> bool {
        self.include_deprecated_fields
            || !field.deprecation_state().is_deprecated()
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_file_extension(mut self, file_extension: impl AsRef<str>) -> Self {
        self.file_extension = file_extension.as_ref().to_string();
        self
    }

    pub fn with_include_cross_references(mut self, include: bool) -> Self {
        self.include_cross_references = include;
        self
    }

    pub fn with_include_deprecated_fields(mut self, include: bool) -> Self {
        self.include_deprecated_fields = include;
        self
    }
}
impl Default for QueryGenConfig {
    fn default() -> Self {
        Self {
            depth_limit: Self::DEFAULT_DEPTH_LIMIT,
            file_extension: Self::DEFAULT_FILE_EXTENSION.to_string(),
            include_cross_references: false,
            include_deprecated_fields: false,
        }
    }
}
