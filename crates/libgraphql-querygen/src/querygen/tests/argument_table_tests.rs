use crate::querygen::ArgumentTable;
use super::build_schema;

#[test]
fn distinct_names_are_kept_verbatim() {
    let schema = build_schema(
        "type Query { updateUser(id: ID!, name: String): Boolean }",
    );
    let field = schema.query_type().unwrap().fields().get("updateUser").unwrap();

    let mut table = ArgumentTable::new();
    let bindings = table.declare_field_arguments(field);

    assert_eq!(bindings, vec![
        ("id", "id".to_string()),
        ("name", "name".to_string()),
    ]);
    assert_eq!(
        ArgumentTable::render_call_arguments(&bindings),
        "id: $id, name: $name",
    );
    assert_eq!(table.render_variable_declarations(), "$id: ID!, $name: String");
}

#[test]
fn repeated_names_get_increasing_suffixes() {
    let schema = build_schema(concat!(
        "type Query {\n",
        "  a(id: ID!): Boolean\n",
        "  b(id: [ID!]): Boolean\n",
        "  c(id: Int): Boolean\n",
        "}",
    ));
    let fields = schema.query_type().unwrap().fields();

    let mut table = ArgumentTable::new();
    for field_name in ["a", "b", "c"] {
        table.declare_field_arguments(fields.get(field_name).unwrap());
    }

    assert_eq!(
        table.variable_names().collect::<Vec<_>>(),
        vec!["id", "id1", "id2"],
    );
    assert_eq!(
        table.render_variable_declarations(),
        "$id: ID!, $id1: [ID!], $id2: Int",
    );
}

#[test]
fn suffixed_names_never_collide_with_literal_names() {
    let schema = build_schema(concat!(
        "type Query {\n",
        "  a(id: ID, id1: ID): Boolean\n",
        "  b(id: ID): Boolean\n",
        "  c(id: ID): Boolean\n",
        "}",
    ));
    let fields = schema.query_type().unwrap().fields();

    let mut table = ArgumentTable::new();
    let a_bindings = table.declare_field_arguments(fields.get("a").unwrap());
    let b_bindings = table.declare_field_arguments(fields.get("b").unwrap());
    let c_bindings = table.declare_field_arguments(fields.get("c").unwrap());

    assert_eq!(a_bindings, vec![("id", "id".to_string()), ("id1", "id1".to_string())]);
    assert_eq!(b_bindings, vec![("id", "id2".to_string())]);
    assert_eq!(c_bindings, vec![("id", "id3".to_string())]);
    assert_eq!(table.len(), 4);
}

#[test]
fn fields_without_parameters_bind_nothing() {
    let schema = build_schema("type Query { me: String }");
    let field = schema.query_type().unwrap().fields().get("me").unwrap();

    let mut table = ArgumentTable::new();
    assert!(table.declare_field_arguments(field).is_empty());
    assert!(table.is_empty());
    assert_eq!(table.render_variable_declarations(), "");
}
