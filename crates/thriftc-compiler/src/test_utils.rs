//! Shared helpers for unit tests.

use thriftc_core::{Definition, Program};

use crate::compile::{CompileError, Compiler};
use crate::config::Config;
use crate::scope::Scope;
use crate::session::Session;
use crate::spec::{Spec, Specs};

pub fn compile(definition: impl Into<Definition>) -> Result<Spec, CompileError> {
    compile_with(&Config::default(), definition)
}

pub fn compile_with(
    config: &Config,
    definition: impl Into<Definition>,
) -> Result<Spec, CompileError> {
    Compiler::new(config).compile(&definition.into())
}

/// Compile a definition that must fail and render the error.
pub fn compile_error(definition: impl Into<Definition>) -> String {
    compile(definition)
        .expect_err("definition should not compile")
        .to_string()
}

/// Compile a definition that must succeed and dump it unlinked.
pub fn dump_compiled(definition: impl Into<Definition>) -> String {
    let spec = compile(definition).expect("definition should compile");
    let mut specs = Specs::new();
    let id = specs.alloc(spec);
    specs.printer().dump_spec(id)
}

/// Compile every definition of `program` into a fresh arena, without
/// linking, and register them in a scope.
pub fn compile_all(program: &Program) -> (Specs, Scope) {
    let config = Config::default();
    let compiler = Compiler::new(&config);
    let mut specs = Specs::new();
    let mut builder = Scope::builder();
    for definition in &program.definitions {
        let spec = compiler
            .compile(definition)
            .expect("definition should compile");
        let id = specs.alloc(spec);
        builder
            .define(definition.name(), definition.line(), id)
            .expect("names should be unique");
    }
    (specs, builder.build())
}

/// Compile and link `program` as module `main` and dump its definitions.
pub fn dump_module(program: &Program) -> String {
    let mut session = Session::new();
    let scope = session
        .compile_module("main", program)
        .expect("module should compile")
        .clone();
    session.specs().printer().dump_scope(&scope)
}

/// Compile a module that must fail and render its diagnostics.
pub fn module_errors(program: &Program) -> String {
    let mut session = Session::new();
    let err = session
        .compile_module("main", program)
        .expect_err("module should not compile");
    match err.diagnostics() {
        Some(diagnostics) => diagnostics.printer().render(),
        None => err.to_string(),
    }
}
