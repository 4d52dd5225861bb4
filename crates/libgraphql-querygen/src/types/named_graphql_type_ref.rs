use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A `String`-named reference to a [`GraphQLType`] stored in some [`Schema`].
///
/// Types in a schema reference each other cyclically, so rather than holding
/// direct references to one another they hold these names and are resolved
/// against the owning [`Schema`] on demand via
/// [`NamedGraphQLTypeRef::deref()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedGraphQLTypeRef {
    name: String,
    ref_location: loc::SourceLocation,
}
impl NamedGraphQLTypeRef {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            ref_location,
        }
    }

    pub fn deref<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        schema.lookup_type(self.name.as_str()).ok_or_else(
            || DerefByNameError::DanglingReference(self.name.to_string()),
        )
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No type named `{0}` is defined in the schema")]
    DanglingReference(String),
}
