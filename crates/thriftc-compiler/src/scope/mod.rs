//! Name → spec registry used for linking.
//!
//! A scope is assembled once all definitions of a module are compiled, and
//! is read-only afterwards. Included modules are layered in under their
//! module name: `shared.Name` resolves `Name` in the scope of `shared`.

use indexmap::IndexMap;
use thriftc_core::Line;

use crate::compile::CompileError;
use crate::compile::namespace::Namespace;
use crate::spec::SpecId;


/// Registry of the top-level specs visible to one module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    /// Own definitions in declaration order.
    entries: IndexMap<String, SpecId>,
    /// Included modules by name.
    includes: IndexMap<String, Scope>,
}

impl Scope {
    /// A scope that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ScopeBuilder {
        ScopeBuilder::default()
    }

    /// Resolve a name, either local (`Name`) or included (`module.Name`).
    ///
    /// Included modules only expose their own definitions, not the modules
    /// they include in turn.
    pub fn lookup(&self, name: &str) -> Option<SpecId> {
        self.resolve(name).map(|(id, _)| id)
    }

    /// Like [`Scope::lookup`], also returning the scope the definition was
    /// declared in. Names inside that definition resolve against it.
    pub fn resolve(&self, name: &str) -> Option<(SpecId, &Scope)> {
        if let Some(&id) = self.entries.get(name) {
            return Some((id, self));
        }
        let (module, rest) = name.split_once('.')?;
        let included = self.includes.get(module)?;
        included.entries.get(rest).map(|&id| (id, included))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of own definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over own (name, handle) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SpecId)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Iterate over own handles in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = SpecId> + '_ {
        self.entries.values().copied()
    }

    /// Names of included modules.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.includes.keys().map(String::as_str)
    }
}

/// Collects definitions for a [`Scope`], rejecting duplicate names.
#[derive(Debug, Default)]
pub struct ScopeBuilder {
    names: Namespace,
    entries: IndexMap<String, SpecId>,
    includes: IndexMap<String, Scope>,
}

impl ScopeBuilder {
    /// Register a top-level definition declared on `line`.
    pub fn define(&mut self, name: &str, line: Line, id: SpecId) -> Result<(), CompileError> {
        self.names.claim(name, line)?;
        self.entries.insert(name.to_owned(), id);
        Ok(())
    }

    /// Make `module.Name` resolve through `scope`. A later include of the
    /// same module name replaces the earlier one.
    pub fn include(&mut self, module: &str, scope: Scope) {
        self.includes.insert(module.to_owned(), scope);
    }

    pub fn build(self) -> Scope {
        Scope {
            entries: self.entries,
            includes: self.includes,
        }
    }
}
