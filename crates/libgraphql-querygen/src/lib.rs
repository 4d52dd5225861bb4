//! Generate a complete GraphQL query document for every root field of a
//! schema.
//!
//! ```
//! use libgraphql_querygen::OperationKind;
//! use libgraphql_querygen::querygen::OperationGenerator;
//! use libgraphql_querygen::querygen::QueryGenConfig;
//! use libgraphql_querygen::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { user(id: ID!): User } type User { id: ID! name: String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let generator = OperationGenerator::new(&schema, QueryGenConfig::default());
//! let document = generator.generate_operation(OperationKind::Query, "user").unwrap();
//! assert_eq!(document.document(), concat!(
//!     "query user($id: ID!){\n",
//!     "    user(id: $id){\n",
//!     "        id\n",
//!     "        name\n",
//!     "    }\n",
//!     "}",
//! ));
//! ```

pub mod ast;
pub mod file_reader;
pub mod loc;
mod operation_kind;
pub mod querygen;
pub mod schema;
pub mod types;

pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema::SchemaBuildError;
