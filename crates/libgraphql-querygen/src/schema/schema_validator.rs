use crate::OperationKind;
use crate::schema::NamedTypeDefLocation;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Checks the semantic rules the query generator relies on to traverse a
/// schema safely: every referenced name resolves, unions only contain object
/// types, implemented interfaces are interfaces, and root operation types are
/// object types.
pub(super) struct SchemaValidator<'a> {
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> SchemaValidator<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            types_map,
        }
    }

    pub fn validate(
        mut self,
        root_types: &[(OperationKind, &NamedTypeDefLocation)],
    ) -> Vec<TypeValidationError> {
        for (operation, root_type) in root_types {
            self.validate_root_type(*operation, root_type);
        }

        let types_map = self.types_map;
        for type_ in types_map.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::Enum(enum_type) => {
                    if enum_type.values().is_empty() {
                        self.errors.push(TypeValidationError::EnumWithNoValues {
                            type_name: enum_type.name().to_string(),
                            loc: enum_type.def_location().to_owned(),
                        });
                    }
                },

                GraphQLType::InputObject(inputobj_type) => {
                    for field in inputobj_type.fields().values() {
                        let type_annot = field.type_annotation();
                        if let Some(field_type) = self.resolve(type_annot)
                            && !field_type.is_input_type() {
                            self.errors.push(TypeValidationError::InvalidInputFieldType {
                                type_name: inputobj_type.name().to_string(),
                                field_name: field.name().to_string(),
                                field_type_name: field_type.name().to_string(),
                                loc: field.def_location().to_owned(),
                            });
                        }
                    }
                },

                GraphQLType::Interface(iface_type) =>
                    self.validate_object_or_interface(&iface_type.0),

                GraphQLType::Object(obj_type) =>
                    self.validate_object_or_interface(&obj_type.0),

                GraphQLType::Union(union_type) => {
                    if union_type.members.is_empty() {
                        self.errors.push(TypeValidationError::UnionWithNoMembers {
                            type_name: union_type.name().to_string(),
                            loc: union_type.def_location().to_owned(),
                        });
                    }

                    for member_ref in union_type.members.values() {
                        match types_map.get(member_ref.name()) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(member_type) => self.errors.push(
                                TypeValidationError::UnionMemberNotObject {
                                    union_name: union_type.name().to_string(),
                                    member_name: member_ref.name().to_string(),
                                    member_kind: member_type.kind(),
                                    loc: member_ref.ref_location().to_owned(),
                                }
                            ),
                            None => self.errors.push(
                                TypeValidationError::UndefinedTypeName {
                                    undefined_type_name: member_ref.name().to_string(),
                                    loc: member_ref.ref_location().to_owned(),
                                }
                            ),
                        }
                    }
                },
            }
        }

        self.errors
    }

    /// Resolve the innermost named type of a [`TypeAnnotation`], recording an
    /// error if it is not defined.
    fn resolve(&mut self, type_annot: &TypeAnnotation) -> Option<&'a GraphQLType> {
        let type_name = type_annot.innermost_type_name();
        let resolved = self.types_map.get(type_name);
        if resolved.is_none() {
            self.errors.push(TypeValidationError::UndefinedTypeName {
                undefined_type_name: type_name.to_string(),
                loc: type_annot.ref_location().to_owned(),
            });
        }
        resolved
    }

    fn validate_object_or_interface(&mut self, type_: &ObjectOrInterfaceTypeData) {
        let types_map = self.types_map;
        let type_name = type_.name();

        for iface_name in type_.interface_names() {
            match types_map.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        type_name: type_name.to_string(),
                        non_interface_type_name: iface_name.to_string(),
                        loc: type_.def_location().to_owned(),
                    }
                ),
                None => self.errors.push(
                    TypeValidationError::ImplementsUndefinedInterface {
                        type_name: type_name.to_string(),
                        undefined_interface_name: iface_name.to_string(),
                        loc: type_.def_location().to_owned(),
                    }
                ),
            }
        }

        for field in type_.fields().values() {
            if let Some(field_type) = self.resolve(field.type_annotation())
                && let GraphQLType::InputObject(_) = field_type {
                self.errors.push(TypeValidationError::InvalidOutputFieldType {
                    type_name: type_name.to_string(),
                    field_name: field.name().to_string(),
                    field_type_name: field_type.name().to_string(),
                    loc: field.def_location().to_owned(),
                });
            }

            for param in field.parameters().values() {
                if let Some(param_type) = self.resolve(param.type_annotation())
                    && !param_type.is_input_type() {
                    self.errors.push(TypeValidationError::InvalidParameterType {
                        type_name: type_name.to_string(),
                        field_name: field.name().to_string(),
                        param_name: param.name().to_string(),
                        param_type_name: param_type.name().to_string(),
                        loc: param.def_location().to_owned(),
                    });
                }
            }
        }
    }

    fn validate_root_type(
        &mut self,
        operation: OperationKind,
        root_type: &NamedTypeDefLocation,
    ) {
        let types_map = self.types_map;
        match types_map.get(root_type.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => (),
            Some(other_type) => self.errors.push(
                TypeValidationError::RootOperationTypeNotObject {
                    operation,
                    type_name: root_type.type_name.to_string(),
                    type_kind: other_type.kind(),
                    loc: root_type.def_location.to_owned(),
                }
            ),
            None => self.errors.push(
                TypeValidationError::RootOperationTypeUndefined {
                    operation,
                    type_name: root_type.type_name.to_string(),
                    loc: root_type.def_location.to_owned(),
                }
            ),
        }
    }
}
