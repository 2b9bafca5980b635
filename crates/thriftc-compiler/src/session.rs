//! Compile-then-link orchestration for whole modules.

use indexmap::IndexMap;
use thriftc_core::{Definition, Program};

use crate::compile::{CompileError, Compiler};
use crate::config::Config;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::link::{self, LinkError};
use crate::scope::Scope;
use crate::spec::{SpecId, Specs};
use crate::{Error, Result};

/// Owns every spec compiled so far and the scopes of finished modules.
///
/// Modules are compiled one at a time; a module may include any module
/// compiled earlier in the same session.
#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    specs: Specs,
    modules: IndexMap<String, Scope>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    pub fn into_specs(self) -> Specs {
        self.specs
    }

    /// Scope of a module compiled earlier.
    pub fn module(&self, name: &str) -> Option<&Scope> {
        self.modules.get(name)
    }

    /// Compile one definition into the arena, unlinked.
    pub fn compile(&mut self, definition: &Definition) -> std::result::Result<SpecId, CompileError> {
        let spec = Compiler::new(&self.config).compile(definition)?;
        Ok(self.specs.alloc(spec))
    }

    /// Link a spec and everything it reaches against `scope`.
    pub fn link(&mut self, id: SpecId, scope: &Scope) -> std::result::Result<(), LinkError> {
        link::link(&mut self.specs, id, scope)
    }

    /// Compile, scope and link every definition of `program` as module `name`.
    ///
    /// Failures of sibling definitions are all collected. When any
    /// definition fails to compile nothing is added to the arena and
    /// linking is skipped. When any spec fails to link, the module's specs
    /// are removed again, so the module can be retried under the same name.
    #[tracing::instrument(level = "debug", skip(self, program), fields(definitions = program.definitions.len()))]
    pub fn compile_module(&mut self, name: &str, program: &Program) -> Result<&Scope> {
        if self.modules.contains_key(name) {
            return Err(Error::DuplicateModule(name.to_owned()));
        }

        let mut builder = Scope::builder();
        for include in &program.includes {
            let Some(scope) = self.modules.get(&include.name) else {
                return Err(Error::UnknownInclude {
                    name: include.name.clone(),
                    line: include.line,
                });
            };
            builder.include(&include.name, scope.clone());
        }

        let compiler = Compiler::new(&self.config);
        let base = self.specs.len();
        let mut compiled = Vec::with_capacity(program.definitions.len());
        let mut diagnostics = Diagnostics::new();

        for (i, definition) in program.definitions.iter().enumerate() {
            let spec = match compiler.compile(definition) {
                Ok(spec) => spec,
                Err(err) => {
                    diagnostics.push(Diagnostic::new(definition.name(), definition.line(), err));
                    continue;
                }
            };
            // Handles are only issued once the whole module compiled, in
            // declaration order.
            let id = SpecId::from_raw((base + i) as u32);
            if let Err(err) = builder.define(definition.name(), definition.line(), id) {
                diagnostics.push(Diagnostic::new(definition.name(), definition.line(), err));
                continue;
            }
            compiled.push(spec);
        }

        if !diagnostics.is_empty() {
            tracing::debug!(errors = diagnostics.len(), "compilation failed");
            return Err(Error::CompileFailed(diagnostics));
        }

        for spec in compiled {
            self.specs.alloc(spec);
        }
        let scope = builder.build();
        tracing::debug!(specs = scope.len(), "compiled");

        for id in scope.ids() {
            if let Err(err) = link::link(&mut self.specs, id, &scope) {
                let spec = self.specs.get(id);
                diagnostics.push(Diagnostic::new(spec.name(), spec.line(), err));
            }
        }

        if !diagnostics.is_empty() {
            // Earlier modules are fully linked and never reach these specs.
            self.specs.truncate(base);
            tracing::debug!(errors = diagnostics.len(), "linking failed");
            return Err(Error::LinkFailed(diagnostics));
        }

        tracing::debug!("linked");
        Ok(self.modules.entry(name.to_owned()).or_insert(scope))
    }
}
