//! Failures collected across the definitions of one module.

mod collection;
mod printer;

#[cfg(test)]
mod tests;

use thriftc_core::Line;

use crate::compile::CompileError;
use crate::link::LinkError;

pub use collection::Diagnostics;
pub use printer::DiagnosticsPrinter;

/// The underlying failure of a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Cause {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Link(#[from] LinkError),
}

impl Cause {
    pub fn line(&self) -> Line {
        match self {
            Self::Compile(err) => err.line(),
            Self::Link(err) => err.line(),
        }
    }
}

/// One failing top-level definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the definition that failed.
    pub definition: String,
    /// Line of the definition itself.
    pub definition_line: Line,
    pub cause: Cause,
}

impl Diagnostic {
    pub fn new(definition: impl Into<String>, definition_line: Line, cause: impl Into<Cause>) -> Self {
        Self {
            definition: definition.into(),
            definition_line,
            cause: cause.into(),
        }
    }

    /// Line of the offending element, or of the definition when the element
    /// carries no position.
    pub fn line(&self) -> Line {
        match self.cause.line() {
            0 => self.definition_line,
            line => line,
        }
    }

    pub fn message(&self) -> String {
        self.cause.to_string()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line(), self.cause)
    }
}
