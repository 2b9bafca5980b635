#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for thriftc.
//!
//! The syntax tree in [`ast`] is what an IDL parser hands to the compiler.
//! Parsers written in other tools can also hand it over as JSON, see
//! [`parse_program`].

pub mod ast;


pub use ast::{
    BaseType, ConstValue, Definition, Enum, EnumItem, Field, Function, Ident, Include, Line,
    Program, Requiredness, Service, Struct, StructKind, Type, Typedef,
};

/// Parse a JSON-encoded syntax tree into a [`Program`].
pub fn parse_program(json: &str) -> Result<Program, serde_json::Error> {
    serde_json::from_str(json)
}
