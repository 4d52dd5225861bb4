mod command_tests;

use std::path::Path;

const BLOG_SCHEMA: &str = r#"
type Query {
  user(id: ID!): User
  posts(first: Int): [Post!]!
}

type Mutation {
  createPost(title: String!): Post
}

type User {
  id: ID!
  name: String
}

type Post {
  id: ID!
  title: String!
  author: User
}
"#;

fn write_file(dir: &Path, rel_path: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(rel_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path.as_path(), content).expect("write fixture file");
    path
}
