use indoc::indoc;
use thriftc_core::{BaseType, Field, Function, Program, Service, Struct, Type, Typedef};

use super::{Reference, Spec, TypeSpec};
use crate::link::link;
use crate::test_utils::compile_all;

fn named(name: &str) -> TypeSpec {
    TypeSpec::Named(Reference::unresolved(name, 0))
}

#[test]
fn service_chain_nearest_first() {
    let program = Program::new()
        .definition(Service::new("Base").function(Function::new("ping")))
        .definition(
            Service::new("Middle")
                .extends("Base")
                .function(Function::new("get").returns(BaseType::String)),
        )
        .definition(
            Service::new("Leaf")
                .extends("Middle")
                .function(Function::new("ping").returns(BaseType::Bool)),
        );
    let (mut specs, scope) = compile_all(&program);
    let leaf = scope.lookup("Leaf").unwrap();
    link(&mut specs, leaf, &scope).unwrap();

    let chain: Vec<_> = specs.service_chain(leaf).map(|(_, s)| s.name.as_str()).collect();
    assert_eq!(chain, vec!["Leaf", "Middle", "Base"]);

    let (owner, get) = specs.find_function(leaf, "get").unwrap();
    assert_eq!(owner, scope.lookup("Middle").unwrap());
    assert_eq!(get.name, "get");

    // Overrides shadow ancestors.
    let (owner, _) = specs.find_function(leaf, "ping").unwrap();
    assert_eq!(owner, leaf);

    assert!(specs.find_function(leaf, "missing").is_none());
}

#[test]
fn service_chain_stops_at_unresolved_parent() {
    let program = Program::new().definition(Service::new("Leaf").extends("Missing"));
    let (specs, scope) = compile_all(&program);
    let leaf = scope.lookup("Leaf").unwrap();

    assert_eq!(specs.service_chain(leaf).count(), 1);
}

#[test]
fn service_chain_survives_cycles() {
    let program = Program::new()
        .definition(Service::new("A").extends("B"))
        .definition(Service::new("B").extends("A"));
    let (mut specs, scope) = compile_all(&program);
    let a = scope.lookup("A").unwrap();
    link(&mut specs, a, &scope).unwrap();

    assert_eq!(specs.service_chain(a).count(), specs.len());
    assert!(specs.find_function(a, "anything").is_none());
}

#[test]
fn resolve_type_through_typedefs() {
    let program = Program::new()
        .definition(Struct::structure("User").field(Field::new(1, "name", BaseType::String)))
        .definition(Typedef::new("Owner", Type::named("User")))
        .definition(Typedef::new("Admin", Type::named("Owner")))
        .definition(Typedef::new("Names", Type::list(BaseType::String)));
    let (mut specs, scope) = compile_all(&program);
    for id in scope.ids() {
        link(&mut specs, id, &scope).unwrap();
    }

    let Spec::Typedef(admin) = specs.get(scope.lookup("Admin").unwrap()) else {
        panic!("Admin should be a typedef");
    };
    let resolved = specs.resolve_type(&admin.target).unwrap();
    assert_eq!(
        resolved,
        &TypeSpec::Named(Reference::Resolved(scope.lookup("User").unwrap()))
    );
    assert!(specs.is_struct_type(&admin.target));
    assert_eq!(specs.target_spec(&admin.target).map(Spec::name), Some("User"));

    let Spec::Typedef(names) = specs.get(scope.lookup("Names").unwrap()) else {
        panic!("Names should be a typedef");
    };
    assert!(!specs.is_struct_type(&names.target));
    assert!(specs.target_spec(&names.target).is_none());
}

#[test]
fn resolve_type_stops_on_unresolved_and_cycles() {
    let program = Program::new()
        .definition(Typedef::new("A", Type::named("B")))
        .definition(Typedef::new("B", Type::named("A")));
    let (mut specs, scope) = compile_all(&program);

    assert_eq!(specs.resolve_type(&named("A")), None);
    assert_eq!(
        specs.resolve_type(&TypeSpec::Base(BaseType::I32)),
        Some(&TypeSpec::Base(BaseType::I32))
    );

    let a = scope.lookup("A").unwrap();
    link(&mut specs, a, &scope).unwrap();
    let Spec::Typedef(typedef) = specs.get(a) else {
        panic!("A should be a typedef");
    };
    assert_eq!(specs.resolve_type(&typedef.target), None);
    assert!(!specs.is_struct_type(&typedef.target));
}

#[test]
fn inheritance_is_not_flattened() {
    let program = Program::new()
        .definition(Service::new("Base").function(Function::new("ping")))
        .definition(Service::new("Leaf").extends("Base"));
    let (mut specs, scope) = compile_all(&program);
    let leaf = scope.lookup("Leaf").unwrap();
    link(&mut specs, leaf, &scope).unwrap();

    insta::assert_snapshot!(specs.printer().dump_spec(leaf), @"service Leaf extends Base");
    assert_eq!(
        specs.printer().dump(),
        indoc! {"
            service Base
              void ping()

            service Leaf extends Base
        "}
    );
}
