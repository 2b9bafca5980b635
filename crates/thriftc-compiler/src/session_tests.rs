use indoc::indoc;
use thriftc_core::{
    BaseType, ConstValue, Field, Function, Ident, Include, Program, Service, Struct, Type, parse_program,
};

use crate::config::{Config, ImplicitIds};
use crate::spec::{Reference, TypeSpec};
use crate::test_utils::{dump_module, module_errors};
use crate::{Error, Session};

fn shared() -> Program {
    Program::new().definition(
        Struct::exception("InternalServiceError")
            .at(1)
            .field(Field::new(1, "message", BaseType::String).at(2)),
    )
}

#[test]
fn compile_and_link_module() {
    let program = Program::new()
        .definition(
            Service::new("BulkKeyValue")
                .at(1)
                .extends("KeyValue")
                .function(Function::new("setValues").arg(Field::new(
                    1,
                    "items",
                    Type::map(BaseType::String, BaseType::Binary),
                ))),
        )
        .definition(
            Service::new("KeyValue").at(5).function(
                Function::new("getValue")
                    .arg(Field::new(1, "key", BaseType::String))
                    .returns(BaseType::Binary)
                    .throws(Field::new(1, "doesNotExist", Type::named("KeyDoesNotExist"))),
            ),
        )
        .definition(Struct::exception("KeyDoesNotExist").at(9));

    insta::assert_snapshot!(dump_module(&program), @r"
    service BulkKeyValue extends KeyValue
      void setValues(1: map<string, binary> items)

    service KeyValue
      binary getValue(1: string key) throws (1: KeyDoesNotExist doesNotExist)

    exception KeyDoesNotExist
    ");
}

#[test]
fn empty_module() {
    let mut session = Session::new();

    let scope = session.compile_module("empty", &Program::new()).unwrap();

    assert!(scope.is_empty());
    assert!(session.specs().is_empty());
    assert!(session.module("empty").is_some());
}

#[test]
fn compile_failures_are_collected() {
    let program = Program::new()
        .definition(
            Struct::structure("User")
                .at(1)
                .field(Field::new(1, "name", BaseType::String).at(2))
                .field(Field::new(1, "email", BaseType::String).at(3)),
        )
        .definition(
            Service::new("Users")
                .at(6)
                .function(Function::new("get").at(7))
                .function(Function::new("get").at(8)),
        )
        .definition(Struct::structure("Post").at(11));

    insta::assert_snapshot!(module_errors(&program), @r#"
    error: line 3: cannot compile "User": the field id 1 has already been used on line 2
    error: line 8: the name "get" has already been used on line 7
    "#);
}

#[test]
fn nothing_is_allocated_when_compilation_fails() {
    let program = Program::new()
        .definition(Struct::structure("Ok"))
        .definition(Service::new("Broken").function(
            Function::new("f").oneway().returns(BaseType::I32),
        ));
    let mut session = Session::new();

    let err = session.compile_module("main", &program).unwrap_err();

    assert!(matches!(err, Error::CompileFailed(_)));
    insta::assert_snapshot!(err, @"compilation failed with 1 errors");
    assert!(session.specs().is_empty());
    assert!(session.module("main").is_none());
}

#[test]
fn duplicate_top_level_name() {
    let program = Program::new()
        .definition(Struct::structure("User").at(1))
        .definition(Service::new("User").at(4));

    insta::assert_snapshot!(module_errors(&program), @r#"error: line 4: the name "User" has already been used on line 1"#);
}

#[test]
fn link_failures_are_collected() {
    let program = Program::new()
        .definition(
            Struct::structure("Post")
                .at(1)
                .field(Field::new(1, "author", Ident::new("Author").at(2)).at(2)),
        )
        .definition(
            Service::new("Blog")
                .at(5)
                .extends("Base")
                .function(Function::new("latest").returns(Type::named("Post"))),
        );

    insta::assert_snapshot!(module_errors(&program), @r#"
    error: line 2: cannot link "Post": Author is not defined
    error: line 5: cannot link "Blog": Base is not defined
    "#);
}

#[test]
fn link_failure_allows_retrying_module() {
    let mut session = Session::new();
    session.compile_module("shared", &shared()).unwrap();
    let broken = Program::new()
        .definition(Struct::structure("Post").field(Field::new(1, "author", Type::named("Author"))));

    let err = session.compile_module("blog", &broken).unwrap_err();

    assert!(matches!(err, Error::LinkFailed(_)));
    assert_eq!(session.specs().len(), 1);
    assert!(session.module("blog").is_none());

    let fixed = broken.definition(Struct::structure("Author"));
    let scope = session.compile_module("blog", &fixed).unwrap().clone();

    assert_eq!(session.specs().len(), 3);
    assert!(scope.ids().all(|id| session.specs().is_linked(id)));
}

#[test]
fn includes_resolve_earlier_modules() {
    let mut session = Session::new();
    session.compile_module("shared", &shared()).unwrap();
    let failure = session
        .module("shared")
        .and_then(|scope| scope.lookup("InternalServiceError"))
        .unwrap();

    let api = Program::new()
        .include(Include::new("shared").at(1))
        .definition(Service::new("Api").at(3).function(
            Function::new("call").throws(Field::new(
                1,
                "error",
                Type::named("shared.InternalServiceError"),
            )),
        ));
    let scope = session.compile_module("api", &api).unwrap().clone();

    let api = scope.lookup("Api").unwrap();
    let service = session.specs().get(api).as_service().unwrap();
    let exceptions = &service.functions["call"].result.as_ref().unwrap().exceptions;
    assert_eq!(
        exceptions.get("error").unwrap().ty,
        TypeSpec::Named(Reference::Resolved(failure))
    );
    assert_eq!(scope.lookup("InternalServiceError"), None);
}

#[test]
fn unknown_include() {
    let program = Program::new().include(Include::new("shared").at(2));
    let mut session = Session::new();

    let err = session.compile_module("api", &program).unwrap_err();

    insta::assert_snapshot!(err, @r#"module "shared" is not defined"#);
    assert!(err.diagnostics().is_none());
}

#[test]
fn duplicate_module() {
    let mut session = Session::new();
    session.compile_module("shared", &shared()).unwrap();

    let err = session.compile_module("shared", &shared()).unwrap_err();

    insta::assert_snapshot!(err, @r#"module "shared" has already been compiled"#);
    assert_eq!(session.specs().len(), 1);
}

#[test]
fn config_applies_to_every_definition() {
    let config = Config::new().implicit_ids(ImplicitIds::Deny);
    let program = Program::new().definition(
        Struct::structure("User")
            .at(1)
            .field(Field::implicit("name", BaseType::String).at(2)),
    );
    let mut session = Session::with_config(config);

    let err = session.compile_module("main", &program).unwrap_err();

    let diagnostics = err.diagnostics().unwrap();
    assert_eq!(diagnostics.len(), 1);
    insta::assert_snapshot!(diagnostics.printer().render(), @r#"error: line 2: cannot compile "User": field "name" does not have an explicit id"#);
}

#[test]
fn primitive_steps() {
    let mut session = Session::new();
    let user = session
        .compile(&Struct::structure("User").field(Field::new(1, "friend", Type::named("User"))).into())
        .unwrap();
    let mut builder = crate::Scope::builder();
    builder.define("User", 1, user).unwrap();
    let scope = builder.build();

    session.link(user, &scope).unwrap();

    assert!(session.specs().is_linked(user));
}

#[test]
fn compiling_twice_is_deterministic() {
    let program = shared().definition(
        Struct::structure("Report")
            .field(Field::new(1, "error", Type::named("InternalServiceError")))
            .field(
                Field::new(2, "level", BaseType::I32).default_value(ConstValue::Int(1)),
            ),
    );

    let mut first = Session::new();
    let mut second = Session::new();
    first.compile_module("main", &program).unwrap();
    second.compile_module("main", &program).unwrap();

    assert_eq!(first.into_specs(), second.into_specs());
}

#[test]
fn module_from_json() {
    let json = indoc! {r#"
        {
          "definitions": [
            {
              "type": "struct",
              "name": "User",
              "kind": "struct",
              "line": 1,
              "fields": [
                { "id": 1, "name": "name", "type": { "base": "string" }, "line": 2 },
                { "id": 2, "name": "tags", "type": { "list": { "named": { "name": "Tag", "line": 3 } } }, "line": 3 }
              ]
            },
            { "type": "typedef", "name": "Tag", "target": { "base": "string" }, "line": 6 }
          ]
        }
    "#};
    let program = parse_program(json).unwrap();

    insta::assert_snapshot!(dump_module(&program), @r"
    struct User
      1: string name
      2: list<Tag> tags

    typedef string Tag
    ");
}
