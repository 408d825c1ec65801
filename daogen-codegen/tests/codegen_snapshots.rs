//! Snapshot tests for DAO generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use daogen_codegen::{Generator, Template};
use daogen_core::{GenerationRequest, RawColumn};
use tempfile::TempDir;

fn users() -> Vec<RawColumn> {
    vec![
        RawColumn::new("ID", "int(11)"),
        RawColumn::new("NAME", "varchar(50)"),
        RawColumn::new("status", "enum('active','banned')").with_default("active"),
        RawColumn::new("isAdmin", "tinyint(1)").with_default("0"),
        RawColumn::new("createdAt", "bigint(20)").nullable(),
    ]
}

fn generator() -> Generator {
    Generator::new(
        GenerationRequest::new("Users", "Jane Doe"),
        Template::builtin().expect("builtin template parses"),
    )
    .with_date("8 June 2021")
}

#[test]
fn test_users_dao() {
    let preview = generator().preview(&users()).expect("render failed");
    assert_eq!(preview.path, "Users.ts");
    insta::assert_snapshot!("users_dao", preview.content);
}

#[test]
fn test_generated_fragments_in_output() {
    let preview = generator()
        .preview(&[
            RawColumn::new("ID", "int"),
            RawColumn::new("NAME", "varchar(50)"),
        ])
        .expect("render failed");

    assert!(
        preview
            .content
            .contains("export interface UsersDAO { id: number;\n name: string;\n  }")
    );
    assert!(
        preview
            .content
            .contains("LIST_QUERY = `SELECT u.id, u.name FROM Users u`;")
    );
    assert!(
        preview
            .content
            .contains("const sql = `INSERT INTO Users(id, name) VALUES ?`;")
    );
    assert!(
        preview
            .content
            .contains("const values = [payload.map((u) => [u.id, u.name])];")
    );
    assert!(preview.content.contains("export interface UsersListFilters {}"));
    assert!(preview.content.contains("@author Jane Doe (8 June 2021)"));
    assert!(!preview.content.contains("{{"));
}

#[test]
fn test_meta_interface_does_not_redeclare_columns() {
    let generator = Generator::new(
        GenerationRequest::new("PromoMedia", "Sam"),
        Template::builtin().expect("builtin template parses"),
    )
    .with_date("8 June 2021");

    let preview = generator
        .preview(&[
            RawColumn::new("ID", "int"),
            RawColumn::new("createdAt", "bigint(20)"),
            RawColumn::new("updatedAt", "bigint(20)"),
        ])
        .expect("render failed");

    assert!(preview.content.contains(
        "export interface PromoMediaDAO { id: number;\n createdAt: number;\n updatedAt: number;\n  }"
    ));
    assert!(
        preview
            .content
            .contains("export interface PromoMediaDAOWithMeta extends PromoMediaDAO {  }")
    );
    assert!(!preview.content.contains("createdAt?"));
    assert!(!preview.content.contains("updatedAt?"));
}

#[test]
fn test_generate_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let output_dir = temp.path().join("output");

    let first = generator().generate(&users(), &output_dir).unwrap();
    let first_content = std::fs::read_to_string(&first.path).unwrap();
    assert_eq!(first.path, output_dir.join("Users.ts"));
    assert_eq!(first.write, daogen_core::WriteResult::Created);
    assert_eq!(first.columns, 5);

    let second = generator().generate(&users(), &output_dir).unwrap();
    let second_content = std::fs::read_to_string(&second.path).unwrap();
    assert_eq!(second.write, daogen_core::WriteResult::Overwritten);
    assert_eq!(first_content, second_content);
}

#[test]
fn test_custom_template() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dao.template.txt");
    std::fs::write(
        &path,
        "// {{ author }}\nexport const {{ class_name }}Columns = `{{ list_query }}`;\n",
    )
    .unwrap();

    let generator = Generator::new(
        GenerationRequest::new("Posts", "Sam"),
        Template::from_file(&path).unwrap(),
    );
    let preview = generator
        .preview(&[RawColumn::new("ID", "int"), RawColumn::new("title", "text")])
        .unwrap();

    assert_eq!(
        preview.content,
        "// Sam\nexport const PostsColumns = `SELECT p.id, p.title FROM Posts p`;\n"
    );
}

#[test]
fn test_template_with_unknown_placeholder_fails() {
    let generator = Generator::new(
        GenerationRequest::new("Users", "Jane Doe"),
        Template::parse("custom", "{{ class_name }} {{ primary_key }}").unwrap(),
    );

    let err = generator.preview(&users()).unwrap_err();
    assert_eq!(err.stage(), daogen_core::Stage::Template);
    assert!(err.to_string().contains("primary_key"));
}
