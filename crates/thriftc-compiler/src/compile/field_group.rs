//! The uniqueness-checking builder every field list goes through.

use indexmap::IndexMap;
use thriftc_core::{Field, Line, Requiredness, StructKind};

use super::CompileError;
use super::namespace::Namespace;
use super::types::compile_type;
use crate::config::{Config, ImplicitIds};
use crate::spec::{FieldGroup, FieldSpec};

/// Which list a field group belongs to. Decides the extra rules applied on
/// top of name and id uniqueness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GroupKind {
    Fields(StructKind),
    Arguments,
    Exceptions,
}

pub(crate) struct FieldGroupBuilder<'c> {
    config: &'c Config,
    kind: GroupKind,
    names: Namespace,
    ids: IndexMap<i16, Line>,
    next_implicit_id: i16,
    group: FieldGroup,
}

impl<'c> FieldGroupBuilder<'c> {
    pub(crate) fn new(config: &'c Config, kind: GroupKind) -> Self {
        Self {
            config,
            kind,
            names: Namespace::new(),
            ids: IndexMap::new(),
            next_implicit_id: -1,
            group: FieldGroup::new(),
        }
    }

    /// Build a group from a whole list, stopping at the first failure.
    pub(crate) fn compile(
        config: &'c Config,
        kind: GroupKind,
        fields: &[Field],
    ) -> Result<FieldGroup, CompileError> {
        let mut builder = Self::new(config, kind);
        for field in fields {
            builder.add(field)?;
        }
        Ok(builder.finish())
    }

    pub(crate) fn add(&mut self, field: &Field) -> Result<(), CompileError> {
        self.names.claim(&field.name, field.line)?;

        if self.kind == GroupKind::Exceptions && field.default.is_some() {
            return Err(CompileError::IllegalDefaultValue {
                name: field.name.clone(),
                line: field.line,
            });
        }

        if self.kind == GroupKind::Fields(StructKind::Union)
            && self.config.strict_unions
            && field.requiredness == Requiredness::Required
        {
            return Err(CompileError::RequiredUnionField {
                name: field.name.clone(),
                line: field.line,
            });
        }

        let id = self.field_id(field)?;
        if let Some(&first_line) = self.ids.get(&id) {
            return Err(CompileError::DuplicateFieldId {
                id,
                first_line,
                line: field.line,
            });
        }
        self.ids.insert(id, field.line);

        self.group.push(FieldSpec {
            id,
            name: field.name.clone(),
            ty: compile_type(&field.ty),
            requiredness: field.requiredness,
            default: field.default.clone(),
            line: field.line,
        });
        Ok(())
    }

    pub(crate) fn finish(self) -> FieldGroup {
        self.group
    }

    fn field_id(&mut self, field: &Field) -> Result<i16, CompileError> {
        if let Some(id) = field.id {
            return Ok(id);
        }
        match self.config.implicit_ids {
            ImplicitIds::Negative => {
                let id = self.next_implicit_id;
                self.next_implicit_id = id.saturating_sub(1);
                Ok(id)
            }
            ImplicitIds::Deny => Err(CompileError::MissingFieldId {
                name: field.name.clone(),
                line: field.line,
            }),
        }
    }
}
