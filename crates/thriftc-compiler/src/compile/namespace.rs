//! Order-preserving duplicate detection.

use indexmap::IndexMap;
use thriftc_core::Line;

use super::CompileError;

/// Names declared so far in one namespace, with the line of their first
/// declaration.
#[derive(Debug, Clone, Default)]
pub(crate) struct Namespace {
    names: IndexMap<String, Line>,
}

impl Namespace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for a declaration on `line`.
    ///
    /// The first claim wins; later claims fail with the first line.
    pub(crate) fn claim(&mut self, name: &str, line: Line) -> Result<(), CompileError> {
        if let Some(&first_line) = self.names.get(name) {
            return Err(CompileError::DuplicateName {
                name: name.to_owned(),
                first_line,
                line,
            });
        }
        self.names.insert(name.to_owned(), line);
        Ok(())
    }
}
