use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::InputField;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn inputobject_fields_from_ast(
        inputobj_def_location: &loc::SourceLocation,
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
        field_map: &mut IndexMap<String, InputField>,
    ) -> Result<()> {
        for field in input_fields {
            let fielddef_srcloc =
                inputobj_def_location.with_ast_position(&field.position);

            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: fielddef_srcloc,
                });
            }

            field_map.insert(field.name.to_string(), InputField {
                name: field.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    // graphql_parser doesn't give us a location for the
                    // field-definition's type, so reuse the field's.
                    &fielddef_srcloc,
                    &field.value_type,
                ),
                def_location: fielddef_srcloc,
            });
        }
        Ok(())
    }

    pub fn interface_refs_from_ast(
        type_def_location: &loc::SourceLocation,
        type_name: &str,
        iface_names: &[String],
        iface_refs: &mut Vec<NamedGraphQLTypeRef>,
    ) -> Result<()> {
        for iface_name in iface_names {
            if iface_refs.iter().any(|iface_ref| iface_ref.name() == iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: type_def_location.to_owned(),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if iface_name == type_name {
                return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                    def_location: type_def_location.to_owned(),
                    interface_name: type_name.to_string(),
                });
            }

            iface_refs.push(NamedGraphQLTypeRef::new(
                iface_name,
                type_def_location.to_owned(),
            ));
        }
        Ok(())
    }

    pub fn object_fielddefs_from_ast(
        obj_def_location: &loc::SourceLocation,
        type_name: &str,
        fields: &[ast::schema::Field],
        field_map: &mut IndexMap<String, Field>,
    ) -> Result<()> {
        for field in fields {
            let fielddef_srcloc = obj_def_location.with_ast_position(&field.position);

            // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: fielddef_srcloc,
                });
            }

            let mut parameters = IndexMap::<String, Parameter>::new();
            for input_val in &field.arguments {
                let param = Parameter::from_ast(&fielddef_srcloc, input_val);

                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                if input_val.name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        def_location: param.def_location().to_owned(),
                        field_name: field.name.to_string(),
                        param_name: input_val.name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }

                if let Some(existing_param) = parameters.get(input_val.name.as_str()) {
                    return Err(SchemaBuildError::DuplicateParameterDefinition {
                        type_name: type_name.to_string(),
                        field_name: field.name.to_string(),
                        param_name: input_val.name.to_string(),
                        param_def1: existing_param.def_location().to_owned(),
                        param_def2: param.def_location().to_owned(),
                    });
                }
                parameters.insert(input_val.name.to_string(), param);
            }

            field_map.insert(field.name.to_string(), Field {
                deprecation_reason: DeprecationState::reason_from_ast(&field.directives),
                description: field.description.to_owned(),
                name: field.name.to_string(),
                parameters,
                parent_type_name: type_name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &fielddef_srcloc,
                    &field.field_type,
                ),
                def_location: fielddef_srcloc,
            });
        }
        Ok(())
    }
}
