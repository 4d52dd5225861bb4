/// The three kinds of root operation a GraphQL schema can define.
///
/// Ordered the way generated output is emitted: queries, then mutations,
/// then subscriptions.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// Name of the directory (and re-export key) that documents of this kind
    /// are grouped under.
    pub fn directory_name(&self) -> &'static str {
        match self {
            Self::Query => "queries",
            Self::Mutation => "mutations",
            Self::Subscription => "subscriptions",
        }
    }

    /// The conventional name of the root type for this kind of operation when
    /// no `schema { ... }` block overrides it.
    ///
    /// https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }

    /// The keyword that introduces an operation of this kind in an executable
    /// document.
    pub fn keyword_label(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword_label())
    }
}
impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" | "queries" => Ok(Self::Query),
            "mutation" | "mutations" => Ok(Self::Mutation),
            "subscription" | "subscriptions" => Ok(Self::Subscription),
            other => Err(format!(
                "`{other}` is not an operation kind (expected one of `query`, \
                `mutation`, or `subscription`)",
            )),
        }
    }
}
