use crate::types::Field;
use crate::types::Parameter;
use indexmap::IndexMap;

/// The query variables collected while generating a single document.
///
/// Every argument of every field that ends up in the document is bound to a
/// uniquely named variable. The first argument seen with a given name keeps
/// that name; later ones get an increasing numeric suffix (`id`, `id1`,
/// `id2`, ...). Variables are declared in the order they were bound.
#[derive(Clone, Debug, Default)]
pub struct ArgumentTable<'schema> {
    duplicate_counts: IndexMap<String, usize>,
    variables: IndexMap<String, &'schema Parameter>,
}
impl<'schema> ArgumentTable<'schema> {
    /// Bind a variable for each of `field`'s parameters and return the
    /// `(parameter name, variable name)` pairs in declaration order.
    pub fn declare_field_arguments(
        &mut self,
        field: &'schema Field,
    ) -> Vec<(&'schema str, String)> {
        field.parameters()
            .values()
            .map(|param| {
                let var_name = self.allocate_variable_name(param.name());
                self.variables.insert(var_name.to_string(), param);
                (param.name(), var_name)
            })
            .collect()
    }

    fn allocate_variable_name(&mut self, param_name: &str) -> String {
        if !self.duplicate_counts.contains_key(param_name)
            && !self.variables.contains_key(param_name) {
            return param_name.to_string();
        }

        // A suffixed name can still be taken by a parameter that is literally
        // named that way (e.g. `id1`), so keep counting until it's free.
        let count = self.duplicate_counts
            .entry(param_name.to_string())
            .or_insert(0);
        loop {
            *count += 1;
            let candidate = format!("{param_name}{count}");
            if !self.variables.contains_key(candidate.as_str()) {
                return candidate;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Render `name: $var` pairs as they appear at a field's call site.
    pub fn render_call_arguments(bindings: &[(&str, String)]) -> String {
        bindings.iter()
            .map(|(param_name, var_name)| format!("{param_name}: ${var_name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render the `$var: Type` declarations for an operation header.
    pub fn render_variable_declarations(&self) -> String {
        self.variables.iter()
            .map(|(var_name, param)| format!("${var_name}: {}", param.type_annotation()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Variable names in declaration order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(|name| name.as_str())
    }
}
