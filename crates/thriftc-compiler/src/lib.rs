//! Semantic core of a Thrift-style IDL toolchain.
//!
//! Parsed definitions are compiled one by one into specs, which hold names
//! of the other definitions they use. Once a module is fully compiled its
//! scope is assembled and every spec is linked: names become handles into
//! a shared arena, and recursive types become plain handle cycles.
//!
//! # Example
//!
//! ```
//! use thriftc_compiler::Session;
//! use thriftc_core::{BaseType, Field, Function, Program, Service};
//!
//! let program = Program::new().definition(
//!     Service::new("KeyValue").function(
//!         Function::new("getValue")
//!             .arg(Field::new(1, "key", BaseType::String))
//!             .returns(BaseType::Binary),
//!     ),
//! );
//!
//! let mut session = Session::new();
//! let scope = session.compile_module("kv", &program).expect("valid module");
//! let id = scope.lookup("KeyValue").expect("defined");
//! assert!(session.specs().is_linked(id));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod dump;
pub mod link;
pub mod scope;
pub mod session;
pub mod spec;

#[cfg(test)]
mod session_tests;
#[cfg(test)]
mod test_utils;

use thriftc_core::Line;

pub use compile::{CompileError, Compiler};
pub use config::{Config, ImplicitIds};
pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter};
pub use dump::SpecPrinter;
pub use link::{LinkError, link};
pub use scope::Scope;
pub use session::Session;
pub use spec::{LinkState, Spec, SpecId, Specs};

/// Errors from compiling a whole module.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("compilation failed with {} errors", .0.len())]
    CompileFailed(Diagnostics),

    #[error("linking failed with {} errors", .0.len())]
    LinkFailed(Diagnostics),

    /// An include names a module not compiled in this session.
    #[error("module \"{name}\" is not defined")]
    UnknownInclude { name: String, line: Line },

    #[error("module \"{0}\" has already been compiled")]
    DuplicateModule(String),
}

impl Error {
    /// The collected per-definition failures, if any.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::CompileFailed(d) | Self::LinkFailed(d) => Some(d),
            Self::UnknownInclude { .. } | Self::DuplicateModule(_) => None,
        }
    }
}

/// Result type for module operations.
pub type Result<T> = std::result::Result<T, Error>;
