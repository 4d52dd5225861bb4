use crate::ast;

/// The reason GraphQL assumes when `@deprecated` is applied without an
/// explicit `reason` argument.
///
/// https://spec.graphql.org/October2021/#sec--deprecated
pub(crate) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => Some(*reason),
            Self::NotDeprecated => None,
        }
    }

    /// Extract the deprecation reason (if any) from a list of directive
    /// annotations found in the schema AST.
    pub(crate) fn reason_from_ast(directives: &[ast::schema::Directive]) -> Option<String> {
        let deprecated = directives.iter().find(|d| d.name == "deprecated")?;
        let reason = deprecated.arguments.iter().find_map(|(arg_name, value)| {
            match (arg_name.as_str(), value) {
                ("reason", ast::schema::Value::String(reason)) => Some(reason.to_owned()),
                _ => None,
            }
        });
        Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
    }
}
impl<'a> std::convert::From<Option<&'a String>> for DeprecationState<'a> {
    fn from(value: Option<&'a String>) -> DeprecationState<'a> {
        match value {
            Some(reason) => DeprecationState::Deprecated(reason.as_str()),
            None => DeprecationState::NotDeprecated,
        }
    }
}
