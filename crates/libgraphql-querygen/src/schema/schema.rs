use crate::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents an immutable GraphQL schema: an arena of types addressed by
/// name, plus the (optional) root operation types.
///
/// Types reference one another by name (see [`NamedGraphQLTypeRef`]), so the
/// schema can represent cyclic type graphs without self-references and can be
/// shared freely across independent traversals.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) query_type: Option<NamedGraphQLTypeRef>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`] in definition order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    /// All object types that declare they implement the interface named
    /// `interface_name`, in the order they were defined in the schema.
    pub fn possible_types(&self, interface_name: &str) -> Vec<&ObjectType> {
        self.types
            .values()
            .filter_map(|type_| type_.as_object())
            .filter(|obj_type| obj_type.interface_names().contains(&interface_name))
            .collect()
    }

    /// Returns this [`Schema`]'s Query root operation type (if one was
    /// defined).
    ///
    /// [^note] It is ***strongly*** recommended that you use this in favor of
    /// looking for an [`ObjectType`] whose name is `"Query"`. GraphQL [defines
    /// an object type named "Query" as the _default_ Query type
    /// ](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but it is also possible to override this default with a `schema { ... }`
    /// block.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Query)
    }

    /// Returns the root operation type for the given [`OperationKind`], if the
    /// schema defines one.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        let type_ref = match kind {
            OperationKind::Query => self.query_type.as_ref(),
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        }?;
        type_ref.deref(self).ok()?.as_object()
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
    }
}
