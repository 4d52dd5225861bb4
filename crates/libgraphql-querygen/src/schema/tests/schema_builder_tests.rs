use crate::OperationKind;
use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn builtin_scalars_are_predefined() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { ok: Boolean }")?
            .build()?;

        for (name, type_) in [
            ("Boolean", GraphQLType::Bool),
            ("Float", GraphQLType::Float),
            ("ID", GraphQLType::ID),
            ("Int", GraphQLType::Int),
            ("String", GraphQLType::String),
        ] {
            assert_eq!(schema.lookup_type(name), Some(&type_));
            assert_eq!(type_.def_location(), loc::SourceLocation::GraphQLBuiltIn);
            assert!(type_.is_leaf());
        }
        assert_eq!(schema.all_types().len(), 6);

        Ok(())
    }

    #[test]
    fn default_root_types_are_found_by_name() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Int }\n",
                "type Mutation { b: Int }\n",
                "type Subscription { c: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "Query");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");
        assert_eq!(
            schema.root_operation_type(OperationKind::Mutation).unwrap().name(),
            "Mutation",
        );

        Ok(())
    }

    #[test]
    fn schema_without_a_query_type_still_builds() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Mutation { b: Int }")?
            .build()?;

        assert!(schema.query_type().is_none());
        assert!(schema.mutation_type().is_some());

        Ok(())
    }

    #[test]
    fn types_and_fields_keep_definition_order() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Zebra { z: Int a: Int m: Int }\n",
            "type Query { zebra: Zebra }\n",
            "type Apple { id: ID }",
        ))?.build()?;

        assert_eq!(
            schema.all_types().keys().skip(5).collect::<Vec<_>>(),
            vec!["Zebra", "Query", "Apple"],
        );
        let zebra = schema.lookup_type("Zebra").unwrap().as_object().unwrap();
        assert_eq!(zebra.fields().keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);

        Ok(())
    }

    #[test]
    fn source_locations_are_recorded() -> Result<()> {
        let schema_path = PathBuf::from("schema.graphql");
        let schema = SchemaBuilder::new()
            .load_str(Some(schema_path.to_owned()), "type Query {\n  me: String\n}")?
            .build()?;

        let query_type = schema.query_type().unwrap();
        assert_eq!(query_type.def_location(), &loc::SourceLocation::Schema(loc::FilePosition {
            col: 1,
            file: Some(schema_path.to_owned()),
            line: 1,
        }));
        assert_eq!(
            query_type.fields().get("me").unwrap().def_location(),
            &loc::SourceLocation::Schema(loc::FilePosition {
                col: 3,
                file: Some(schema_path),
                line: 2,
            }),
        );

        Ok(())
    }

    #[test]
    fn invalid_syntax_is_a_parse_error() {
        let result = SchemaBuilder::new().load_str(None, "this is not valid syntax");
        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file: None, .. }),
        ));
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let result = SchemaBuilder::new().load_file("/this/path/does/not/exist.graphql");
        assert!(matches!(result, Err(SchemaBuildError::SchemaFileReadError(_))));
    }

    #[test]
    fn directive_definitions_are_accepted() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @auth(role: String) on FIELD_DEFINITION\n",
                "type Query { me: String @auth(role: \"user\") }",
            ))?
            .build()?;

        assert!(schema.query_type().unwrap().fields().contains_key("me"));

        Ok(())
    }
}

mod fields {
    use super::*;

    #[test]
    fn parameters_keep_declaration_order_and_defaults() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { posts(first: Int = 10, after: String, tags: [String!]!): [String] }")?
            .build()?;

        let field = schema.query_type().unwrap().fields().get("posts").unwrap();
        assert_eq!(field.parent_type_name(), "Query");
        assert_eq!(field.type_annotation().to_string(), "[String]");
        assert_eq!(
            field.parameters().keys().collect::<Vec<_>>(),
            vec!["first", "after", "tags"],
        );

        let first = field.parameters().get("first").unwrap();
        assert_eq!(first.default_value(), Some("10"));
        assert_eq!(first.type_annotation().to_string(), "Int");

        let tags = field.parameters().get("tags").unwrap();
        assert_eq!(tags.default_value(), None);
        assert_eq!(tags.type_annotation().to_string(), "[String!]!");

        Ok(())
    }

    #[test]
    fn deprecation_reasons_are_recorded() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query {\n",
                "  a: Int @deprecated(reason: \"Use `b`\")\n",
                "  b: Int\n",
                "  c: Int @deprecated\n",
                "}",
            ))?
            .build()?;

        let fields = schema.query_type().unwrap().fields();
        assert_eq!(
            fields.get("a").unwrap().deprecation_state(),
            DeprecationState::Deprecated("Use `b`"),
        );
        assert_eq!(
            fields.get("b").unwrap().deprecation_state(),
            DeprecationState::NotDeprecated,
        );
        assert_eq!(
            fields.get("c").unwrap().deprecation_state().reason(),
            Some("No longer supported"),
        );

        Ok(())
    }

    #[test]
    fn duplicate_field_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int a: String }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { ref type_name, ref field_name, .. })
                if type_name == "Query" && field_name == "a",
        ));
    }

    #[test]
    fn duplicate_parameter_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a(x: Int, x: Int): Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateParameterDefinition { ref param_name, .. })
                if param_name == "x",
        ));
    }

    #[test]
    fn dunder_prefixed_field_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { __secret: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName { .. }),
        ));
    }
}

mod types {
    use super::*;

    #[test]
    fn duplicate_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")
            .and_then(|builder| builder.load_str(None, "type Query { b: Int }"));
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefining_a_builtin_is_an_error() {
        let result = SchemaBuilder::new().load_str(None, "scalar String");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { def1: loc::SourceLocation::GraphQLBuiltIn, .. }),
        ));
    }

    #[test]
    fn dunder_prefixed_type_is_an_error() {
        let result = SchemaBuilder::new().load_str(None, "type __Internal { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
    }

    #[test]
    fn possible_types_are_in_definition_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { node: Node }\n",
                "interface Node { id: ID! }\n",
                "type B implements Node { id: ID! }\n",
                "type C { id: ID! }\n",
                "type A implements Node { id: ID! }",
            ))?
            .build()?;

        assert_eq!(
            schema.possible_types("Node")
                .into_iter()
                .map(|obj_type| obj_type.name())
                .collect::<Vec<_>>(),
            vec!["B", "A"],
        );

        Ok(())
    }

    #[test]
    fn union_members_keep_declaration_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { r: Result }\n",
                "union Result = Zed | Alpha\n",
                "type Alpha { a: Int }\n",
                "type Zed { z: Int }",
            ))?
            .build()?;

        let union_type = schema.lookup_type("Result").unwrap().as_union().unwrap();
        assert_eq!(union_type.member_type_names(), vec!["Zed", "Alpha"]);

        Ok(())
    }

    #[test]
    fn duplicate_union_member_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "union U = A | A\ntype A { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicatedUnionMember { ref type_name, .. })
                if type_name == "A",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_appends_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { user: User }\n",
                "interface Node { id: ID! }\n",
                "type User { name: String }\n",
                "extend type User implements Node { id: ID! }",
            ))?
            .build()?;

        let user = schema.lookup_type("User").unwrap().as_object().unwrap();
        assert_eq!(user.fields().keys().collect::<Vec<_>>(), vec!["name", "id"]);
        assert_eq!(user.interface_names(), vec!["Node"]);
        assert_eq!(schema.possible_types("Node").len(), 1);

        Ok(())
    }

    #[test]
    fn extension_before_definition_is_applied_at_build() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query { later: Int }")?
            .load_str(None, "type Query { first: Int }")?
            .build()?;

        assert_eq!(
            schema.query_type().unwrap().fields().keys().collect::<Vec<_>>(),
            vec!["first", "later"],
        );

        Ok(())
    }

    #[test]
    fn enum_and_union_extensions_append_members() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { r: Result c: Color }\n",
                "enum Color { RED }\n",
                "extend enum Color { GREEN }\n",
                "union Result = A\n",
                "extend union Result = B\n",
                "type A { a: Int }\n",
                "type B { b: Int }",
            ))?
            .build()?;

        let color = schema.lookup_type("Color").unwrap().as_enum().unwrap();
        assert_eq!(color.values().keys().collect::<Vec<_>>(), vec!["RED", "GREEN"]);

        let result = schema.lookup_type("Result").unwrap().as_union().unwrap();
        assert_eq!(result.member_type_names(), vec!["A", "B"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend type Missing { b: Int }")
            .and_then(|builder| builder.build());
        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_of_a_different_kind_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend enum Query { B }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                existing_kind: GraphQLTypeKind::Object,
                ..
            }),
        ));
    }

    #[test]
    fn duplicate_field_via_extension_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend type Query { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { .. }),
        ));
    }
}

mod schema_blocks {
    use super::*;

    #[test]
    fn explicit_roots_override_default_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery }\n",
                "type RootQuery { a: Int }\n",
                "type Mutation { b: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "RootQuery");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn duplicate_operation_definition_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }")
            .and_then(|builder| builder.load_str(None, "schema { query: B }"));
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));
    }

    #[test]
    fn shared_root_types_are_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Root mutation: Root }\ntype Root { a: Int }");
        assert!(matches!(
            result,
            Err(SchemaBuildError::NonUniqueOperationTypes {
                operation1: OperationKind::Query,
                operation2: OperationKind::Mutation,
                ..
            }),
        ));
    }
}

mod validation {
    use super::*;

    const INVALID_SCHEMA: &str = concat!(
        "schema { query: Root }\n",
        "type Query { user: User search: Result }\n",
        "union Result = Query | Color\n",
        "enum Color { RED }\n",
        "input Filter { color: Color }",
    );

    #[test]
    fn semantic_errors_are_collected() {
        let result = SchemaBuilder::new()
            .load_str(None, INVALID_SCHEMA)
            .and_then(|builder| builder.build());

        let errors = match result {
            Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
            other => panic!("Unexpected result: {other:?}"),
        };

        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::RootOperationTypeUndefined { operation: OperationKind::Query, type_name, .. }
                if type_name == "Root",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
                if undefined_type_name == "User",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::UnionMemberNotObject { member_name, member_kind: GraphQLTypeKind::Enum, .. }
                if member_name == "Color",
        )));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn assume_valid_skips_semantic_validation() -> Result<()> {
        let schema = SchemaBuilder::new()
            .assume_valid(true)
            .load_str(None, INVALID_SCHEMA)?
            .build()?;

        // The explicitly named root type doesn't exist, so there is no usable
        // query type.
        assert!(schema.query_type().is_none());
        assert!(schema.lookup_type("Filter").is_some());

        Ok(())
    }

    #[test]
    fn implementing_a_non_interface_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\ntype A implements Query { a: Int }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { ref errors })
                if matches!(
                    errors.as_slice(),
                    [TypeValidationError::ImplementsNonInterfaceType { .. }],
                ),
        ));
    }

    #[test]
    fn input_object_as_field_result_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { f: Filter }\ninput Filter { a: Int }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { ref errors })
                if matches!(
                    errors.as_slice(),
                    [TypeValidationError::InvalidOutputFieldType { .. }],
                ),
        ));
    }
}
