mod argument_table_tests;
mod operation_generator_tests;
mod reexport_index_tests;

use crate::schema::Schema;
use crate::schema::SchemaBuilder;

fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .expect("schema parses")
        .build()
        .expect("schema is valid")
}
