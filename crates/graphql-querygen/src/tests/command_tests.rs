use crate::Cli;
use crate::tests::write_file;
use crate::tests::BLOG_SCHEMA;
use clap::Parser;

async fn run_cli(args: &[&str]) -> crate::CommandResult {
    let argv = std::iter::once("graphql-querygen").chain(args.iter().copied());
    let mut cli = Cli::try_parse_from(argv).expect("parse args");
    let cmd = cli.cmd.take().expect("a subcommand");
    cmd.run(cli).await
}

#[tokio::test]
async fn generate_writes_documents_and_indexes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = write_file(dir.path(), "schema/blog.graphql", BLOG_SCHEMA);
    let dest = dir.path().join("out");

    let schema_arg = schema_path.to_string_lossy().to_string();
    let dest_arg = dest.to_string_lossy().to_string();
    let result = run_cli(&[
        "generate",
        "--dest-dir", dest_arg.as_str(),
        schema_arg.as_str(),
    ]).await;

    let stdout = result.stdout.expect("stdout summary");
    assert!(result.stderr.is_none());
    assert!(stdout.contains("Generated 2 queries."), "{stdout}");
    assert!(stdout.contains("Generated 1 mutations."), "{stdout}");
    assert!(stdout.contains("no subscriptions will be generated"), "{stdout}");

    let user_doc = std::fs::read_to_string(dest.join("queries/user.gql"))
        .expect("read user document");
    assert_eq!(
        user_doc,
        "query user($id: ID!){\n    user(id: $id){\n        id\n        name\n    }\n}",
    );
    assert!(dest.join("queries/posts.gql").is_file());
    assert!(dest.join("queries/index.js").is_file());
    assert!(dest.join("mutations/createPost.gql").is_file());
    assert!(dest.join("mutations/index.js").is_file());
    assert!(!dest.join("subscriptions").exists());

    let root_index = std::fs::read_to_string(dest.join("index.js"))
        .expect("read root index");
    assert!(root_index.contains("queries"));
    assert!(root_index.contains("mutations"));
    assert!(!root_index.contains("subscriptions"));
}

#[tokio::test]
async fn generate_honors_file_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = write_file(dir.path(), "blog.graphql", BLOG_SCHEMA);
    let dest = dir.path().join("out");

    let schema_arg = schema_path.to_string_lossy().to_string();
    let dest_arg = dest.to_string_lossy().to_string();
    let result = run_cli(&[
        "generate",
        "--ext", "graphql",
        "-o", dest_arg.as_str(),
        schema_arg.as_str(),
    ]).await;

    assert!(result.stderr.is_none(), "{:?}", result.stderr);
    assert!(dest.join("queries/user.graphql").is_file());
    assert!(!dest.join("queries/user.gql").exists());
}

#[tokio::test]
async fn generate_reports_schema_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = write_file(dir.path(), "broken.graphql", "type Query {");
    let dest = dir.path().join("out");

    let schema_arg = schema_path.to_string_lossy().to_string();
    let dest_arg = dest.to_string_lossy().to_string();
    let result = run_cli(&[
        "generate",
        "--dest-dir", dest_arg.as_str(),
        schema_arg.as_str(),
    ]).await;

    assert!(result.stdout.is_none());
    let stderr = result.stderr.expect("stderr");
    assert!(stderr.contains("Failed to load schema"), "{stderr}");
    assert!(!dest.exists());
}

#[tokio::test]
async fn print_emits_a_single_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = write_file(dir.path(), "blog.graphql", BLOG_SCHEMA);

    let schema_arg = schema_path.to_string_lossy().to_string();
    let result = run_cli(&[
        "print",
        "--kind", "mutation",
        "--field", "createPost",
        "--depth-limit", "1",
        schema_arg.as_str(),
    ]).await;

    assert_eq!(
        result.stdout.as_deref(),
        Some(concat!(
            "mutation createPost($title: String!){\n",
            "    createPost(title: $title){\n",
            "        id\n",
            "        title\n",
            "    }\n",
            "}",
        )),
    );
}

#[tokio::test]
async fn print_reports_unknown_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = write_file(dir.path(), "blog.graphql", BLOG_SCHEMA);

    let schema_arg = schema_path.to_string_lossy().to_string();
    let result = run_cli(&[
        "print",
        "--field", "nope",
        schema_arg.as_str(),
    ]).await;

    assert!(result.stdout.is_none());
    let stderr = result.stderr.expect("stderr");
    assert!(stderr.contains("no field named `nope`"), "{stderr}");
}

#[test]
fn depth_limit_must_be_positive() {
    let parsed = Cli::try_parse_from([
        "graphql-querygen", "print", "--field", "user", "--depth-limit", "0", "schema.graphql",
    ]);
    assert!(parsed.is_err());
}
