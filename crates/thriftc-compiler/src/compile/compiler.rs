//! Definition → spec lowering with local validation.

use indexmap::IndexMap;
use thriftc_core::{Definition, Enum, Function, Service, Struct, Typedef};

use super::CompileError;
use super::field_group::{FieldGroupBuilder, GroupKind};
use super::namespace::Namespace;
use super::types::compile_type;
use crate::config::Config;
use crate::spec::{
    EnumItemSpec, EnumSpec, FunctionSpec, Reference, ResultSpec, ServiceSpec, Spec, StructSpec,
    TypedefSpec,
};

/// Compiles one definition at a time.
///
/// Holds no state between calls, so definitions can be compiled in any
/// order. References to other definitions are left unresolved.
pub struct Compiler<'c> {
    config: &'c Config,
}

impl<'c> Compiler<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Compile a definition, returning the first local error found.
    #[tracing::instrument(level = "trace", skip_all, fields(name = definition.name()))]
    pub fn compile(&self, definition: &Definition) -> Result<Spec, CompileError> {
        match definition {
            Definition::Struct(s) => self.compile_struct(s).map(Spec::Struct),
            Definition::Service(s) => self.compile_service(s).map(Spec::Service),
            Definition::Typedef(t) => Ok(Spec::Typedef(self.compile_typedef(t))),
            Definition::Enum(e) => self.compile_enum(e).map(Spec::Enum),
        }
    }

    fn compile_struct(&self, s: &Struct) -> Result<StructSpec, CompileError> {
        let fields = FieldGroupBuilder::compile(self.config, GroupKind::Fields(s.kind), &s.fields)
            .map_err(|e| e.within(&s.name))?;

        Ok(StructSpec {
            name: s.name.clone(),
            kind: s.kind,
            fields,
            line: s.line,
        })
    }

    fn compile_service(&self, s: &Service) -> Result<ServiceSpec, CompileError> {
        let mut names = Namespace::new();
        let mut functions = IndexMap::with_capacity(s.functions.len());

        for function in &s.functions {
            names.claim(&function.name, function.line)?;
            let spec = self.compile_function(function)?;
            functions.insert(function.name.clone(), spec);
        }

        Ok(ServiceSpec {
            name: s.name.clone(),
            parent: s
                .extends
                .as_ref()
                .map(|parent| Reference::unresolved(&parent.name, parent.line)),
            functions,
            line: s.line,
        })
    }

    fn compile_function(&self, f: &Function) -> Result<FunctionSpec, CompileError> {
        if f.oneway && (f.return_type.is_some() || !f.exceptions.is_empty()) {
            return Err(CompileError::OnewayResult {
                name: f.name.clone(),
                line: f.line,
            });
        }

        let args = FieldGroupBuilder::compile(self.config, GroupKind::Arguments, &f.args)
            .map_err(|e| e.within(&f.name))?;
        let exceptions =
            FieldGroupBuilder::compile(self.config, GroupKind::Exceptions, &f.exceptions)
                .map_err(|e| e.within(&f.name))?;

        let result = if f.return_type.is_none() && exceptions.is_empty() {
            None
        } else {
            Some(ResultSpec {
                return_type: f.return_type.as_ref().map(compile_type),
                exceptions,
            })
        };

        Ok(FunctionSpec {
            name: f.name.clone(),
            args,
            result,
            oneway: f.oneway,
            line: f.line,
        })
    }

    fn compile_typedef(&self, t: &Typedef) -> TypedefSpec {
        TypedefSpec {
            name: t.name.clone(),
            target: compile_type(&t.target),
            line: t.line,
        }
    }

    fn compile_enum(&self, e: &Enum) -> Result<EnumSpec, CompileError> {
        let mut names = Namespace::new();
        let mut items = IndexMap::with_capacity(e.items.len());
        let mut next_value = 0i32;

        for item in &e.items {
            names
                .claim(&item.name, item.line)
                .map_err(|err| err.within(&e.name))?;
            let value = item.value.unwrap_or(next_value);
            next_value = value.wrapping_add(1);
            items.insert(
                item.name.clone(),
                EnumItemSpec {
                    value,
                    line: item.line,
                },
            );
        }

        Ok(EnumSpec {
            name: e.name.clone(),
            items,
            line: e.line,
        })
    }
}
