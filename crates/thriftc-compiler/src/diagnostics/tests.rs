use indoc::indoc;

use super::*;

fn duplicate_field() -> Diagnostic {
    let err = CompileError::DuplicateName {
        name: "name".into(),
        first_line: 2,
        line: 3,
    }
    .within("User");
    Diagnostic::new("User", 1, err)
}

fn undefined_tag() -> Diagnostic {
    let err = LinkError::Undefined {
        name: "Tag".into(),
        line: 0,
    }
    .within("Post");
    Diagnostic::new("Post", 6, err)
}

#[test]
fn diagnostic_line_falls_back_to_definition() {
    assert_eq!(duplicate_field().line(), 3);
    assert_eq!(undefined_tag().line(), 6);
}

#[test]
fn collection_basics() {
    let diagnostics: Diagnostics = [duplicate_field(), undefined_tag()].into_iter().collect();

    assert_eq!(diagnostics.len(), 2);
    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics.for_definition("Post").count(), 1);
    assert_eq!(diagnostics.for_definition("Missing").count(), 0);
    assert!(matches!(diagnostics.as_slice()[1].cause, Cause::Link(_)));
}

#[test]
fn render_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(duplicate_field());
    diagnostics.extend([undefined_tag()]);

    insta::assert_snapshot!(diagnostics.printer().render(), @r#"
    error: line 3: cannot compile "User": the name "name" has already been used on line 2
    error: line 6: cannot link "Post": Tag is not defined
    "#);
}

#[test]
fn render_plain_with_path() {
    let diagnostics: Diagnostics = [undefined_tag()].into_iter().collect();

    let res = diagnostics.printer().path("blog.thrift").render();

    insta::assert_snapshot!(res, @r#"blog.thrift:6: error: cannot link "Post": Tag is not defined"#);
}

#[test]
fn render_with_source() {
    let source = indoc! {"
        struct User {
          1: string name
          2: string name
        }
    "};
    let diagnostics: Diagnostics = [duplicate_field()].into_iter().collect();

    let res = diagnostics.printer().source(source).render();

    assert!(res.starts_with(
        r#"error: cannot compile "User": the name "name" has already been used on line 2"#
    ));
    assert!(res.contains("3 |"));
    assert!(res.contains("2: string name"));
    assert!(res.contains("^^^^^^^^^^^^^^"));
}

#[test]
fn render_with_source_out_of_range() {
    let diagnostics: Diagnostics = [undefined_tag()].into_iter().collect();

    let res = diagnostics.printer().source("struct Post {}\n").render();

    insta::assert_snapshot!(res, @r#"error: line 6: cannot link "Post": Tag is not defined"#);
}

#[test]
fn render_empty() {
    let diagnostics = Diagnostics::new();

    assert_eq!(diagnostics.printer().render(), "");
    assert_eq!(diagnostics.printer().source("").render(), "");
}
