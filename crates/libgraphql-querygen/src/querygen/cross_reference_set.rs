use indexmap::IndexSet;

/// Parent-field to child-field edges that have already been expanded while
/// generating a single document.
#[derive(Clone, Debug, Default)]
pub struct CrossReferenceSet {
    keys: IndexSet<String>,
}
impl CrossReferenceSet {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns `true` if the key was not already present.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key identifying the edge from `container_name` to `field_name`.
    pub fn key(container_name: &str, field_name: &str) -> String {
        format!("{container_name}To{field_name}Key")
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn new() -> Self {
        Self::default()
    }
}
