//! Compile-time error types.

use thriftc_core::Line;

/// A local validation failure found while compiling one definition.
///
/// Lines on the leaf variants point at the offending element; the
/// duplicate variants additionally name the line of the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Same identifier declared twice in one namespace.
    #[error("the name \"{name}\" has already been used on line {first_line}")]
    DuplicateName {
        name: String,
        first_line: Line,
        line: Line,
    },

    /// Two fields of one group share an id.
    #[error("the field id {id} has already been used on line {first_line}")]
    DuplicateFieldId { id: i16, first_line: Line, line: Line },

    /// A throws-list entry declares a default value.
    #[error("field \"{name}\" of a throws list cannot have a default value")]
    IllegalDefaultValue { name: String, line: Line },

    /// A union field is marked `required`.
    #[error("field \"{name}\" of a union cannot be required")]
    RequiredUnionField { name: String, line: Line },

    /// A field omits its id and implicit ids are disabled.
    #[error("field \"{name}\" does not have an explicit id")]
    MissingFieldId { name: String, line: Line },

    /// A oneway function declares a return type or exceptions.
    #[error("oneway function \"{name}\" cannot have a result")]
    OnewayResult { name: String, line: Line },

    /// A failure inside a nested list, tagged with the owning definition.
    #[error("cannot compile \"{owner}\": {source}")]
    Context {
        owner: String,
        source: Box<CompileError>,
    },
}

impl CompileError {
    /// Attach the name of the definition that owns the failing list.
    pub fn within(self, owner: impl Into<String>) -> Self {
        Self::Context {
            owner: owner.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with every context layer stripped.
    pub fn root_cause(&self) -> &CompileError {
        let mut err = self;
        while let Self::Context { source, .. } = err {
            err = source;
        }
        err
    }

    /// Owners from outermost to innermost.
    pub fn owners(&self) -> Vec<&str> {
        let mut owners = Vec::new();
        let mut err = self;
        while let Self::Context { owner, source } = err {
            owners.push(owner.as_str());
            err = source;
        }
        owners
    }

    /// Line of the offending element.
    pub fn line(&self) -> Line {
        match self.root_cause() {
            Self::DuplicateName { line, .. }
            | Self::DuplicateFieldId { line, .. }
            | Self::IllegalDefaultValue { line, .. }
            | Self::RequiredUnionField { line, .. }
            | Self::MissingFieldId { line, .. }
            | Self::OnewayResult { line, .. } => *line,
            Self::Context { .. } => unreachable!("root_cause strips context"),
        }
    }
}
