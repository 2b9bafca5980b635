//! Link-time error types.

use thriftc_core::Line;

/// A name that could not be resolved while linking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// The scope has no definition with this name.
    #[error("{name} is not defined")]
    Undefined { name: String, line: Line },

    /// A failure while linking a spec reachable from `owner`.
    #[error("cannot link \"{owner}\": {source}")]
    Context {
        owner: String,
        source: Box<LinkError>,
    },
}

impl LinkError {
    pub fn within(self, owner: impl Into<String>) -> Self {
        Self::Context {
            owner: owner.into(),
            source: Box::new(self),
        }
    }

    pub fn root_cause(&self) -> &LinkError {
        let mut err = self;
        while let Self::Context { source, .. } = err {
            err = source;
        }
        err
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self.root_cause() {
            Self::Undefined { name, .. } => name,
            Self::Context { .. } => unreachable!("root_cause strips context"),
        }
    }

    /// Line of the failing reference.
    pub fn line(&self) -> Line {
        match self.root_cause() {
            Self::Undefined { line, .. } => *line,
            Self::Context { .. } => unreachable!("root_cause strips context"),
        }
    }
}
