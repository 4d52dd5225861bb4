use crate::querygen::ArgumentTable;
use crate::querygen::CrossReferenceSet;
use crate::querygen::QueryGenConfig;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;

const INDENT: &str = "    ";

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Mutable state threaded through the generation of a single document.
#[derive(Clone, Debug, Default)]
pub struct TraversalState<'schema> {
    pub arguments: ArgumentTable<'schema>,
    pub cross_references: CrossReferenceSet,
}
impl TraversalState<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Renders the selection text for a field, expanding every field reachable
/// beneath it until leaves, the depth limit, or an already-expanded edge is
/// reached.
///
/// The synthesizer itself holds no traversal state, so a single instance can
/// be shared by any number of traversals as long as each one brings its own
/// [`TraversalState`].
#[derive(Clone, Copy, Debug)]
pub struct SelectionSynthesizer<'schema> {
    config: &'schema QueryGenConfig,
    schema: &'schema Schema,
}
impl<'schema> SelectionSynthesizer<'schema> {
    pub fn new(schema: &'schema Schema, config: &'schema QueryGenConfig) -> Self {
        Self {
            config,
            schema,
        }
    }

    /// Names of fields that more than one of `possible_types` define with
    /// differing types. Fields the interface itself defines are left out as
    /// they are always selected outside of any fragment.
    fn conflicting_field_names(
        iface_type: &'schema InterfaceType,
        possible_types: &[&'schema ObjectType],
    ) -> IndexSet<&'schema str> {
        let mut field_types = IndexMap::<&str, Vec<&TypeAnnotation>>::new();
        for obj_type in possible_types {
            for field in obj_type.fields().values() {
                if iface_type.fields().contains_key(field.name()) {
                    continue;
                }
                field_types.entry(field.name())
                    .or_default()
                    .push(field.type_annotation());
            }
        }

        field_types.into_iter()
            .filter(|(_, type_annots)| match type_annots.split_first() {
                Some((first, rest)) =>
                    rest.iter().any(|annot| !annot.is_equivalent_to(first)),
                None => false,
            })
            .map(|(field_name, _)| field_name)
            .collect()
    }

    /// Object, interface, and (non-empty) union fields get a selection set.
    /// These are the fields that are subject to the depth limit and
    /// cross-reference suppression.
    fn has_selection_set(field_type: &GraphQLType) -> bool {
        match field_type {
            GraphQLType::Union(union_type) => !union_type.members.is_empty(),
            _ => !field_type.is_leaf(),
        }
    }

    fn render_fragment(
        type_name: &str,
        selections: &[String],
        depth: usize,
    ) -> String {
        let frag_indent = indent(depth + 1);
        format!(
            "{frag_indent}... on {type_name} {{\n{}\n{frag_indent}}}",
            selections.join("\n"),
        )
    }

    fn resolve_type(&self, field: &'schema Field) -> &'schema GraphQLType {
        let type_name = field.type_annotation().innermost_type_name();
        self.schema.lookup_type(type_name).unwrap_or_else(|| panic!(
            "`{}.{}` references `{type_name}`, which is not defined in the schema",
            field.parent_type_name(),
            field.name(),
        ))
    }

    /// Synthesize the selection for the field named `field_name` on
    /// `container_type`.
    ///
    /// `container_name` names the edge the field is reached through (the
    /// parent field's name, or the root type's name for a root field) and
    /// `depth` is 1 for root fields. `from_union` marks a field reached
    /// through a union member or interface implementation fragment.
    ///
    /// Returns an empty string if the field is pruned from its parent's
    /// selection.
    ///
    /// Panics if `container_type` does not define a field named `field_name`.
    pub fn synthesize(
        &self,
        field_name: &str,
        container_type: &'schema GraphQLType,
        container_name: &str,
        state: &mut TraversalState<'schema>,
        depth: usize,
        from_union: bool,
    ) -> String {
        let field = container_type.fields()
            .and_then(|fields| fields.get(field_name))
            .unwrap_or_else(|| panic!(
                "The {} type `{}` has no field named `{field_name}`",
                container_type.kind(),
                container_type.name(),
            ));
        self.synthesize_field(field, container_name, state, depth, from_union)
    }

    /// Same as [`SelectionSynthesizer::synthesize()`] for an already
    /// looked-up [`Field`].
    pub fn synthesize_field(
        &self,
        field: &'schema Field,
        container_name: &str,
        state: &mut TraversalState<'schema>,
        depth: usize,
        from_union: bool,
    ) -> String {
        self.synthesize_field_impl(
            field,
            /* alias = */ None,
            container_name,
            state,
            depth,
            from_union,
        )
    }

    fn synthesize_field_impl(
        &self,
        field: &'schema Field,
        alias: Option<&str>,
        container_name: &str,
        state: &mut TraversalState<'schema>,
        depth: usize,
        from_union: bool,
    ) -> String {
        let field_name = field.name();
        let field_type = self.resolve_type(field);

        let mut selections = vec![];
        if Self::has_selection_set(field_type) {
            let xref_key = CrossReferenceSet::key(container_name, field_name);
            if !self.config.include_cross_references
                && state.cross_references.contains(xref_key.as_str()) {
                log::trace!(
                    "Pruning `{}.{field_name}` at depth {depth}: `{xref_key}` was already expanded",
                    field.parent_type_name(),
                );
                return String::new();
            }

            // Fragment fields sit 2 levels below their polymorphic parent
            // field, so compare them as if they were its direct children.
            let effective_depth = if from_union { depth.saturating_sub(2) } else { depth };
            if effective_depth > self.config.depth_limit {
                log::trace!(
                    "Pruning `{}.{field_name}`: depth {effective_depth} exceeds the limit of {}",
                    field.parent_type_name(),
                    self.config.depth_limit,
                );
                return String::new();
            }

            if !from_union {
                state.cross_references.insert(xref_key);
            }
        }

        if let Some(subfields) = field_type.fields() {
            for subfield in subfields.values() {
                if !self.config.includes_field(subfield) {
                    continue;
                }
                let selection = self.synthesize_field_impl(
                    subfield,
                    None,
                    field_name,
                    state,
                    depth + 1,
                    from_union,
                );
                if !selection.is_empty() {
                    selections.push(selection);
                }
            }
        }

        let field_indent = indent(depth);
        let mut rendered = field_indent.to_string();
        if let Some(alias) = alias {
            rendered.push_str(alias);
            rendered.push_str(": ");
        }
        rendered.push_str(field_name);

        if !field.parameters().is_empty() {
            let bindings = state.arguments.declare_field_arguments(field);
            rendered.push('(');
            rendered.push_str(ArgumentTable::render_call_arguments(&bindings).as_str());
            rendered.push(')');
        }

        match field_type {
            GraphQLType::Interface(iface_type) => {
                selections.push(format!("{}__typename", indent(depth + 1)));
                selections.extend(self.synthesize_interface_fragments(
                    iface_type,
                    field_name,
                    state,
                    depth,
                ));
            },

            GraphQLType::Union(union_type) if !union_type.members.is_empty() => {
                selections.push(format!("{}__typename", indent(depth + 1)));
                selections.extend(self.synthesize_union_fragments(
                    union_type,
                    field_name,
                    state,
                    depth,
                ));
            },

            _ => (),
        }

        if !selections.is_empty() {
            rendered.push_str("{\n");
            rendered.push_str(selections.join("\n").as_str());
            rendered.push('\n');
            rendered.push_str(field_indent.as_str());
            rendered.push('}');
        }

        rendered
    }

    fn synthesize_interface_fragments(
        &self,
        iface_type: &'schema InterfaceType,
        field_name: &str,
        state: &mut TraversalState<'schema>,
        depth: usize,
    ) -> Vec<String> {
        let possible_types = self.schema.possible_types(iface_type.name());
        let conflicting_fields = Self::conflicting_field_names(iface_type, &possible_types);

        let mut fragments = vec![];
        for obj_type in possible_types {
            let mut selections = vec![];
            for field in obj_type.fields().values() {
                if iface_type.fields().contains_key(field.name())
                    || !self.config.includes_field(field) {
                    continue;
                }

                let alias = conflicting_fields.contains(field.name()).then(
                    || format!("{}_{}", field.name(), obj_type.name()),
                );
                let selection = self.synthesize_field_impl(
                    field,
                    alias.as_deref(),
                    field_name,
                    state,
                    depth + 2,
                    /* from_union = */ true,
                );
                if !selection.is_empty() {
                    selections.push(selection);
                }
            }

            if !selections.is_empty() {
                fragments.push(Self::render_fragment(obj_type.name(), &selections, depth));
            }
        }
        fragments
    }

    fn synthesize_union_fragments(
        &self,
        union_type: &'schema UnionType,
        field_name: &str,
        state: &mut TraversalState<'schema>,
        depth: usize,
    ) -> Vec<String> {
        let mut fragments = vec![];
        for member_name in union_type.member_type_names() {
            let member_fields = self.schema
                .lookup_type(member_name)
                .and_then(|member_type| member_type.fields())
                .unwrap_or_else(|| panic!(
                    "Member `{member_name}` of union `{}` is not an object type \
                    defined in the schema",
                    union_type.name(),
                ));

            let mut selections = vec![];
            for field in member_fields.values() {
                if !self.config.includes_field(field) {
                    continue;
                }
                let selection = self.synthesize_field_impl(
                    field,
                    None,
                    field_name,
                    state,
                    depth + 2,
                    /* from_union = */ true,
                );
                if !selection.is_empty() {
                    selections.push(selection);
                }
            }

            if !selections.is_empty() {
                fragments.push(Self::render_fragment(member_name, &selections, depth));
            }
        }
        fragments
    }
}
