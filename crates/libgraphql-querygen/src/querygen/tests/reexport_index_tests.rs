use crate::OperationKind;
use crate::querygen::KindReexportIndex;
use crate::querygen::RootReexportIndex;

#[test]
fn kind_index_reads_each_document() {
    let mut index = KindReexportIndex::new("gql");
    index.push("user");
    index.push("users");

    assert_eq!(index.render(), concat!(
        "const fs = require('fs');\n",
        "const path = require('path');\n",
        "\n",
        "module.exports.user = fs.readFileSync(path.join(__dirname, 'user.gql'), 'utf8');\n",
        "module.exports.users = fs.readFileSync(path.join(__dirname, 'users.gql'), 'utf8');\n",
    ));
}

#[test]
fn empty_kind_index_is_just_the_preamble() {
    let index = KindReexportIndex::new("graphql");
    assert!(index.field_names().is_empty());
    assert_eq!(
        index.render(),
        "const fs = require('fs');\nconst path = require('path');\n\n",
    );
}

#[test]
fn root_index_requires_each_kind_directory() {
    let mut index = RootReexportIndex::new();
    index.push(OperationKind::Query);
    index.push(OperationKind::Subscription);

    assert_eq!(index.render(), concat!(
        "module.exports.queries = require('./queries');\n",
        "module.exports.subscriptions = require('./subscriptions');\n",
    ));
}
