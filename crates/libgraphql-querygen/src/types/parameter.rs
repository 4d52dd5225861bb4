use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;

/// An argument declared on a [`Field`](crate::types::Field) definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The default value declared for this parameter, rendered as GraphQL
    /// value syntax (e.g. `10` or `"asc"`).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        field_def_location: &loc::SourceLocation,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        let param_srcloc = field_def_location.with_ast_position(&input_val.position);
        Self {
            default_value: input_val.default_value
                .as_ref()
                .map(|value| value.to_string()),
            description: input_val.description.to_owned(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(
                &param_srcloc,
                &input_val.value_type,
            ),
            def_location: param_srcloc,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
