use crate::loc;
use crate::OperationKind;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error("The `{type_name}` enum type must define one or more values")]
    EnumWithNoValues {
        type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements `{non_interface_type_name}`, \
        but `{non_interface_type_name}` is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{undefined_interface_name}` interface, but no such type is defined"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}.{field_name}` field is typed as `{field_type_name}`, \
        which is an input type and cannot be used as a field result"
    )]
    InvalidOutputFieldType {
        type_name: String,
        field_name: String,
        field_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{param_name}` argument of `{type_name}.{field_name}` is typed as \
        `{param_type_name}`, which is not an input type"
    )]
    InvalidParameterType {
        type_name: String,
        field_name: String,
        param_name: String,
        param_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}.{field_name}` input field is typed as \
        `{field_type_name}`, which is not an input type"
    )]
    InvalidInputFieldType {
        type_name: String,
        field_name: String,
        field_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The {operation} root operation type `{type_name}` is a {type_kind} \
        type, but root operation types must be object types"
    )]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_name: String,
        type_kind: GraphQLTypeKind,
        loc: loc::SourceLocation,
    },

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    RootOperationTypeUndefined {
        operation: OperationKind,
        type_name: String,
        loc: loc::SourceLocation,
    },

    #[error("Reference to an undefined type named `{undefined_type_name}`")]
    UndefinedTypeName {
        undefined_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but \
        `{member_name}` is a {member_kind} type and union members must be \
        object types"
    )]
    UnionMemberNotObject {
        union_name: String,
        member_name: String,
        member_kind: GraphQLTypeKind,
        loc: loc::SourceLocation,
    },

    #[error("The `{type_name}` union type must define one or more members")]
    UnionWithNoMembers {
        type_name: String,
        loc: loc::SourceLocation,
    },
}
