//! Compilation of syntax-tree definitions into unlinked specs.
//!
//! Every local rule is checked here:
//! - names are unique within a field group, a service and an enum
//! - field ids are unique within a field group
//! - throws lists carry no default values
//!
//! References to other definitions are left as names for the linker.
//!
//! # Module Organization
//!
//! - `compiler`: per-definition lowering
//! - `field_group`: the shared builder all field lists go through
//! - `namespace`: first-occurrence-wins name tracking
//! - `types`: source type lowering

mod compiler;
mod error;
mod field_group;
pub(crate) mod namespace;
mod types;

#[cfg(test)]
mod enum_tests;

pub use compiler::Compiler;
pub use error::CompileError;
