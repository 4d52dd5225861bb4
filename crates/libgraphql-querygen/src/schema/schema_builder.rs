use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::schema_validator::SchemaValidator;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more GraphQL SDL sources.
///
/// ```
/// use libgraphql_querygen::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { me: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(schema.query_type().unwrap().name(), "Query");
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    assume_valid: bool,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    /// When `true`, [`SchemaBuilder::build()`] trusts that the loaded SDL is
    /// semantically valid and skips cross-type validation (dangling type
    /// references, non-object union members, etc). Structural errors (parse
    /// failures, duplicate definitions) are always reported.
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.assume_valid = assume_valid;
        self
    }

    pub fn build(mut self) -> Result<Schema> {
        for (ext_path, ext) in std::mem::take(&mut self.pending_extensions) {
            let ext_srcloc = loc::SourceLocation::from_schema_ast_position(
                ext_path.as_deref(),
                Self::type_extension_position(&ext),
            );
            let type_name = Self::type_extension_name(&ext).to_string();
            if self.types_map_builder.get_type(type_name.as_str()).is_none() {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name,
                    extension_location: ext_srcloc,
                });
            }
            self.merge_type_extension(ext_path.as_deref(), ext)?;
        }

        let types = self.types_map_builder.into_types_map();

        let mut root_types = vec![];
        for kind in OperationKind::ALL {
            let explicit_root = match kind {
                OperationKind::Query => self.query_type.take(),
                OperationKind::Mutation => self.mutation_type.take(),
                OperationKind::Subscription => self.subscription_type.take(),
            };
            let root =
                if let Some(root) = explicit_root {
                    Some(root)
                } else {
                    let default_name = kind.default_root_type_name();
                    match types.get(default_name) {
                        Some(GraphQLType::Object(obj_type)) => Some(NamedTypeDefLocation {
                            def_location: obj_type.def_location().to_owned(),
                            type_name: default_name.to_string(),
                        }),
                        _ => None,
                    }
                };
            root_types.push((kind, root));
        }

        if !self.assume_valid {
            let explicit_roots = root_types
                .iter()
                .filter_map(|(kind, root)| root.as_ref().map(|root| (*kind, root)))
                .collect::<Vec<_>>();
            let errors = SchemaValidator::new(&types).validate(&explicit_roots);
            if !errors.is_empty() {
                return Err(SchemaBuildError::TypeValidationErrors { errors });
            }
        }

        let mut root_refs = root_types.into_iter().map(|(_, root)| {
            root.map(|root| NamedGraphQLTypeRef::new(
                root.type_name,
                root.def_location,
            ))
        });
        Ok(Schema {
            query_type: root_refs.next().flatten(),
            mutation_type: root_refs.next().flatten(),
            subscription_type: root_refs.next().flatten(),
            types,
        })
    }

    /// Shorthand for [`SchemaBuilder::new()`] followed by
    /// [`SchemaBuilder::load_str()`].
    pub fn from_str(
        file_path: Option<PathBuf>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content.as_ref())
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?
                .into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            assume_valid: false,
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let ext_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            Self::type_extension_position(&ext),
        );
        let type_name = Self::type_extension_name(&ext).to_string();
        let existing_type = match self.types_map_builder.get_type_mut(type_name.as_str()) {
            Some(existing_type) => existing_type,
            None => return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_location: ext_srcloc,
            }),
        };

        let mismatch_err = |existing_type: &GraphQLType, ext_srcloc: loc::SourceLocation| {
            SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                existing_kind: existing_type.kind(),
                extension_location: ext_srcloc,
            }
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                Self::enum_values_from_ast(&ext_srcloc, &ext.values, enum_type),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                TypeBuilderHelpers::inputobject_fields_from_ast(
                    &ext_srcloc,
                    type_name.as_str(),
                    &ext.fields,
                    &mut inputobj_type.fields,
                ),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                Self::merge_object_or_interface_ext(
                    &mut iface_type.0,
                    &ext_srcloc,
                    &ext.implements_interfaces,
                    &ext.fields,
                ),

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) =>
                Self::merge_object_or_interface_ext(
                    &mut obj_type.0,
                    &ext_srcloc,
                    &ext.implements_interfaces,
                    &ext.fields,
                ),

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                Self::union_members_from_ast(&ext_srcloc, &ext.types, union_type),

            (existing_type, _) => Err(mismatch_err(existing_type, ext_srcloc)),
        }
    }

    fn merge_object_or_interface_ext(
        type_data: &mut ObjectOrInterfaceTypeData,
        ext_srcloc: &loc::SourceLocation,
        implements_interfaces: &[String],
        fields: &[ast::schema::Field],
    ) -> Result<()> {
        let type_name = type_data.name.to_string();
        TypeBuilderHelpers::interface_refs_from_ast(
            ext_srcloc,
            type_name.as_str(),
            implements_interfaces,
            &mut type_data.interfaces,
        )?;
        TypeBuilderHelpers::object_fielddefs_from_ast(
            ext_srcloc,
            type_name.as_str(),
            fields,
            &mut type_data.fields,
        )
    }

    fn enum_values_from_ast(
        enum_srcloc: &loc::SourceLocation,
        values: &[ast::schema::EnumValue],
        enum_type: &mut EnumType,
    ) -> Result<()> {
        for value in values {
            let value_srcloc = enum_srcloc.with_ast_position(&value.position);
            if let Some(existing_value) = enum_type.values.get(value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_type.name.to_string(),
                    enum_def_location: enum_type.def_location.to_owned(),
                    value_def1: existing_value.def_location().to_owned(),
                    value_def2: value_srcloc,
                });
            }
            enum_type.values.insert(value.name.to_string(), EnumValue {
                def_location: value_srcloc,
                deprecation_reason: DeprecationState::reason_from_ast(&value.directives),
                name: value.name.to_string(),
            });
        }
        Ok(())
    }

    fn object_or_interface_data_from_ast(
        type_srcloc: &loc::SourceLocation,
        name: &str,
        description: &Option<String>,
        implements_interfaces: &[String],
        fields: &[ast::schema::Field],
    ) -> Result<ObjectOrInterfaceTypeData> {
        let mut type_data = ObjectOrInterfaceTypeData {
            def_location: type_srcloc.to_owned(),
            description: description.to_owned(),
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.to_string(),
        };
        Self::merge_object_or_interface_ext(
            &mut type_data,
            type_srcloc,
            implements_interfaces,
            fields,
        )?;
        Ok(type_data)
    }

    fn set_root_operation_type(
        &mut self,
        operation: OperationKind,
        typedef_loc: NamedTypeDefLocation,
    ) -> Result<()> {
        let slot = match operation {
            OperationKind::Query => &mut self.query_type,
            OperationKind::Mutation => &mut self.mutation_type,
            OperationKind::Subscription => &mut self.subscription_type,
        };
        if let Some(existing_typedef_loc) = slot {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation,
                location1: existing_typedef_loc.clone(),
                location2: typedef_loc,
            });
        }
        *slot = Some(typedef_loc);
        Ok(())
    }

    fn type_extension_name(ext: &ast::schema::TypeExtension) -> &str {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(ext) => ext.name.as_str(),
            TypeExtension::InputObject(ext) => ext.name.as_str(),
            TypeExtension::Interface(ext) => ext.name.as_str(),
            TypeExtension::Object(ext) => ext.name.as_str(),
            TypeExtension::Scalar(ext) => ext.name.as_str(),
            TypeExtension::Union(ext) => ext.name.as_str(),
        }
    }

    fn type_extension_position(ext: &ast::schema::TypeExtension) -> &graphql_parser::Pos {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(ext) => &ext.position,
            TypeExtension::InputObject(ext) => &ext.position,
            TypeExtension::Interface(ext) => &ext.position,
            TypeExtension::Object(ext) => &ext.position,
            TypeExtension::Scalar(ext) => &ext.position,
            TypeExtension::Union(ext) => &ext.position,
        }
    }

    fn union_members_from_ast(
        union_srcloc: &loc::SourceLocation,
        member_names: &[String],
        union_type: &mut UnionType,
    ) -> Result<()> {
        for member_name in member_names {
            if let Some(existing_member) = union_type.members.get(member_name.as_str()) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: member_name.to_string(),
                    member1: existing_member.ref_location().to_owned(),
                    member2: union_srcloc.to_owned(),
                });
            }
            union_type.members.insert(
                member_name.to_string(),
                NamedGraphQLTypeRef::new(member_name, union_srcloc.to_owned()),
            );
        }
        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) => {
                // Directive definitions have no bearing on which selections
                // are generated.
                log::trace!("Ignoring definition of directive `@{}`.", directive_def.name);
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_names = [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in root_names {
            if let Some(type_name) = type_name {
                self.set_root_operation_type(
                    operation,
                    NamedTypeDefLocation::from_pos(
                        type_name.to_string(),
                        file_path,
                        schema_def.position,
                    ),
                )?;
            }
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (OperationKind::Query, &self.query_type),
            (OperationKind::Mutation, &self.mutation_type),
            (OperationKind::Subscription, &self.subscription_type),
        ];
        for (idx, (operation1, root1)) in roots.iter().enumerate() {
            for (operation2, root2) in roots.iter().skip(idx + 1) {
                if let (Some(root1), Some(root2)) = (root1, root2)
                    && root1.type_name == root2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: root1.type_name.to_owned(),
                        operation1: *operation1,
                        operation1_loc: root1.def_location.to_owned(),
                        operation2: *operation2,
                        operation2_loc: root2.def_location.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (type_name, type_srcloc, type_) = match type_def {
            TypeDefinition::Enum(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut enum_type = EnumType {
                    def_location: srcloc.to_owned(),
                    description: def.description,
                    name: def.name.to_string(),
                    values: IndexMap::new(),
                };
                Self::enum_values_from_ast(&srcloc, &def.values, &mut enum_type)?;
                (def.name, srcloc, GraphQLType::Enum(enum_type))
            },

            TypeDefinition::InputObject(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut fields = IndexMap::new();
                TypeBuilderHelpers::inputobject_fields_from_ast(
                    &srcloc,
                    def.name.as_str(),
                    &def.fields,
                    &mut fields,
                )?;
                (def.name.to_string(), srcloc.to_owned(), GraphQLType::InputObject(InputObjectType {
                    def_location: srcloc,
                    description: def.description,
                    fields,
                    name: def.name,
                }))
            },

            TypeDefinition::Interface(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let type_data = Self::object_or_interface_data_from_ast(
                    &srcloc,
                    def.name.as_str(),
                    &def.description,
                    &def.implements_interfaces,
                    &def.fields,
                )?;
                (def.name, srcloc, GraphQLType::Interface(InterfaceType(type_data)))
            },

            TypeDefinition::Object(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let type_data = Self::object_or_interface_data_from_ast(
                    &srcloc,
                    def.name.as_str(),
                    &def.description,
                    &def.implements_interfaces,
                    &def.fields,
                )?;
                (def.name, srcloc, GraphQLType::Object(ObjectType(type_data)))
            },

            TypeDefinition::Scalar(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                (def.name.to_string(), srcloc.to_owned(), GraphQLType::Scalar(ScalarType {
                    def_location: srcloc,
                    description: def.description,
                    name: def.name,
                }))
            },

            TypeDefinition::Union(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut union_type = UnionType {
                    def_location: srcloc.to_owned(),
                    description: def.description,
                    name: def.name.to_string(),
                    members: IndexMap::new(),
                };
                Self::union_members_from_ast(&srcloc, &def.types, &mut union_type)?;
                (def.name, srcloc, GraphQLType::Union(union_type))
            },
        };

        self.types_map_builder.add_new_type(
            type_name.as_str(),
            &type_srcloc,
            type_,
        )
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        let type_name = Self::type_extension_name(&ext);
        if self.types_map_builder.get_type(type_name).is_some() {
            self.merge_type_extension(file_path, ext)
        } else {
            // The extended type may be defined later on (or in a later file),
            // so hold on to this extension until `build()`.
            self.pending_extensions.push((file_path.map(|p| p.to_path_buf()), ext));
            Ok(())
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple enum values named `{enum_name}` were defined on a single enum type")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SourceLocation,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("Multiple `{type_name}.{field_name}` fields were defined")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple `{param_name}` arguments were defined on `{type_name}.{field_name}`")]
    DuplicateParameterDefinition {
        type_name: String,
        field_name: String,
        param_name: String,
        param_def1: loc::SourceLocation,
        param_def2: loc::SourceLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("A union type specifies `{type_name}` as a member multiple times")]
    DuplicatedUnionMember {
        type_name: String,
        member1: loc::SourceLocation,
        member2: loc::SourceLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend the {existing_kind} type `{type_name}` using a \
        different kind of type extension"
    )]
    InvalidExtensionType {
        type_name: String,
        existing_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Argument names must not start with `__`: `{type_name}.{field_name}({param_name})`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error(
        "The {operation1} and {operation2} root operations are both defined \
        with the `{reused_type_name}` type, but all root operations must be \
        defined with different types"
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation1_loc: loc::SourceLocation,
        operation2: OperationKind,
        operation2_loc: loc::SourceLocation,
    },

    #[error("Error parsing schema source: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Represents the location of a given root operation type's declaration in
/// the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(file, &pos),
            type_name,
        }
    }
}
