use crate::OperationKind;
use crate::querygen::DocumentSink;
use crate::querygen::InMemoryDocumentSink;
use crate::querygen::MissingRootTypeWarning;
use crate::querygen::OperationGenerator;
use crate::querygen::QueryGenConfig;
use crate::querygen::QueryGenError;
use crate::querygen::SinkResult;
use super::build_schema;

const SCHEMA: &str = concat!(
    "type Query {\n",
    "  me: User\n",
    "  version: String!\n",
    "  oldVersion: String @deprecated\n",
    "}\n",
    "type Mutation {\n",
    "  updateUser(id: ID!, name: String): User\n",
    "}\n",
    "type User { id: ID! name: String }",
);

mod documents {
    use super::*;

    #[test]
    fn leaf_root_field_document() {
        let schema = build_schema("type Query { id: ID! }");
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let operation = generator.generate_operation(OperationKind::Query, "id").unwrap();

        assert_eq!(operation.document(), "query id{\n    id\n}");
        assert_eq!(operation.kind(), OperationKind::Query);
        assert_eq!(operation.field_name(), "id");
        assert!(operation.variable_names().is_empty());
    }

    #[test]
    fn variables_are_declared_in_the_header() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let operation = generator
            .generate_operation(OperationKind::Mutation, "updateUser")
            .unwrap();

        assert_eq!(operation.document(), concat!(
            "mutation updateUser($id: ID!, $name: String){\n",
            "    updateUser(id: $id, name: $name){\n",
            "        id\n",
            "        name\n",
            "    }\n",
            "}",
        ));
        assert_eq!(operation.variable_names(), ["id", "name"]);
    }

    #[test]
    fn colliding_arguments_are_all_declared() {
        let schema = build_schema(concat!(
            "type Query { user(id: ID!): User }\n",
            "type User { id: ID! post(id: ID!): Post }\n",
            "type Post { title: String }",
        ));
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let operation = generator.generate_operation(OperationKind::Query, "user").unwrap();

        assert_eq!(operation.document(), concat!(
            "query user($id: ID!, $id1: ID!){\n",
            "    user(id: $id1){\n",
            "        id\n",
            "        post(id: $id){\n",
            "            title\n",
            "        }\n",
            "    }\n",
            "}",
        ));
    }

    #[test]
    fn each_document_starts_from_a_clean_traversal() {
        let schema = build_schema(concat!(
            "type Query { a(id: ID): Node b(id: ID): Node }\n",
            "type Node { id: ID! }",
        ));
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let report = generator.generate_all();

        assert_eq!(
            report.operation(OperationKind::Query, "b").unwrap().document(),
            "query b($id: ID){\n    b(id: $id){\n        id\n    }\n}",
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        assert_eq!(generator.generate_all(), generator.generate_all());
    }

    #[test]
    fn undefined_root_field_is_an_error() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let err = generator.generate_operation(OperationKind::Query, "nope").unwrap_err();

        assert!(matches!(
            err,
            QueryGenError::UndefinedRootField { kind: OperationKind::Query, ref field_name, .. }
                if field_name == "nope",
        ));
    }

    #[test]
    fn explicitly_requested_deprecated_root_field_is_generated() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let operation = generator
            .generate_operation(OperationKind::Query, "oldVersion")
            .unwrap();
        assert_eq!(operation.document(), "query oldVersion{\n    oldVersion\n}");
    }
}

mod root_types {
    use super::*;

    #[test]
    fn missing_root_types_are_reported_as_warnings() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let report = generator.generate_all();

        assert_eq!(report.warnings(), [MissingRootTypeWarning {
            kind: OperationKind::Subscription,
        }]);
        assert_eq!(
            report.operations()
                .iter()
                .map(|op| (op.kind(), op.field_name()))
                .collect::<Vec<_>>(),
            vec![
                (OperationKind::Query, "me"),
                (OperationKind::Query, "version"),
                (OperationKind::Mutation, "updateUser"),
            ],
        );
    }

    #[test]
    fn deprecated_root_fields_are_generated_on_request() {
        let schema = build_schema(SCHEMA);
        let config = QueryGenConfig::default().with_include_deprecated_fields(true);
        let generator = OperationGenerator::new(&schema, config);
        let report = generator.generate_all();

        assert!(report.operation(OperationKind::Query, "oldVersion").is_some());
    }

    #[test]
    fn generating_for_a_missing_root_type_is_an_error() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let err = generator
            .generate_operation(OperationKind::Subscription, "anything")
            .unwrap_err();

        assert!(matches!(
            err,
            QueryGenError::MissingRootType(MissingRootTypeWarning {
                kind: OperationKind::Subscription,
            }),
        ));
    }

    #[test]
    fn schema_block_roots_are_used() {
        let schema = build_schema(concat!(
            "schema { query: QueryRoot subscription: Events }\n",
            "type QueryRoot { ping: Boolean }\n",
            "type Events { pinged: Boolean }",
        ));
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let report = generator.generate_all();

        assert_eq!(
            report.operation(OperationKind::Query, "ping").unwrap().document(),
            "query ping{\n    ping\n}",
        );

        // `Events` mentions none of the operation keywords.
        assert_eq!(
            report.operation(OperationKind::Subscription, "pinged").unwrap().document(),
            "Events pinged{\n    pinged\n}",
        );
    }

    #[test]
    fn operation_keyword_matches_ignoring_case() {
        assert_eq!(OperationGenerator::operation_keyword("Query"), "query");
        assert_eq!(OperationGenerator::operation_keyword("RootQueryType"), "query");
        assert_eq!(OperationGenerator::operation_keyword("MUTATIONS"), "mutation");
        assert_eq!(OperationGenerator::operation_keyword("MySubscriptionRoot"), "subscription");
        assert_eq!(OperationGenerator::operation_keyword("Root"), "Root");
    }
}

mod sinks {
    use super::*;

    #[test]
    fn write_all_emits_documents_and_indexes() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let mut sink = InMemoryDocumentSink::new();
        let report = generator.write_all(&mut sink).unwrap();

        assert_eq!(report.operations().len(), 3);
        assert_eq!(
            sink.document(OperationKind::Query, "version"),
            Some("query version{\n    version\n}"),
        );
        assert_eq!(
            sink.documents(OperationKind::Query)
                .unwrap()
                .keys()
                .collect::<Vec<_>>(),
            vec!["me", "version"],
        );
        assert!(sink.documents(OperationKind::Subscription).is_none());

        assert_eq!(sink.kind_index(OperationKind::Mutation), Some(concat!(
            "const fs = require('fs');\n",
            "const path = require('path');\n",
            "\n",
            "module.exports.updateUser = fs.readFileSync(path.join(__dirname, 'updateUser.gql'), 'utf8');\n",
        )));
        assert!(sink.kind_index(OperationKind::Subscription).is_none());
        assert_eq!(sink.root_index(), Some(concat!(
            "module.exports.queries = require('./queries');\n",
            "module.exports.mutations = require('./mutations');\n",
        )));
    }

    #[test]
    fn file_extension_only_changes_the_indexes() {
        let schema = build_schema(SCHEMA);
        let config = QueryGenConfig::default().with_file_extension("graphql");
        let generator = OperationGenerator::new(&schema, config);
        let mut sink = InMemoryDocumentSink::new();
        generator.write_all(&mut sink).unwrap();

        assert_eq!(
            sink.document(OperationKind::Query, "version"),
            Some("query version{\n    version\n}"),
        );
        assert!(sink.kind_index(OperationKind::Query)
            .unwrap()
            .contains("'version.graphql'"));
    }

    struct FailingSink;
    impl DocumentSink for FailingSink {
        fn write_document(
            &mut self,
            _kind: OperationKind,
            _field_name: &str,
            _file_extension: &str,
            _document: &str,
        ) -> SinkResult {
            Err("disk full".into())
        }

        fn write_kind_index(&mut self, _kind: OperationKind, _index: &str) -> SinkResult {
            Ok(())
        }

        fn write_root_index(&mut self, _index: &str) -> SinkResult {
            Ok(())
        }
    }

    #[test]
    fn sink_failures_name_the_document() {
        let schema = build_schema(SCHEMA);
        let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
        let err = generator.write_all(&mut FailingSink).unwrap_err();

        match err {
            QueryGenError::PersistenceFailure { target, err } => {
                assert_eq!(target, "queries/me.gql");
                assert_eq!(err.to_string(), "disk full");
            },
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
