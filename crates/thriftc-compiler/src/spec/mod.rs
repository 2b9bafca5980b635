//! Compiled specs: the validated, linkable form of IDL definitions.
//!
//! Top-level specs live in a [`Specs`] arena and refer to each other through
//! [`SpecId`] handles. A reference starts out as a name
//! ([`Reference::Unresolved`]) and is replaced by a handle during linking.
//! Cycles between specs are plain handle chains.

mod arena;
mod field;
mod service;
mod traverse;

#[cfg(test)]
mod traverse_tests;

use indexmap::IndexMap;

pub use arena::{LinkState, SpecId, Specs};
pub use field::{FieldGroup, FieldSpec};
pub use service::{FunctionSpec, ResultSpec, ServiceSpec};
pub use thriftc_core::{BaseType, ConstValue, Line, Requiredness, StructKind};
pub use traverse::ServiceChain;

/// A reference to another top-level spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// Name as written in the source, not yet looked up.
    Unresolved { name: String, line: Line },
    /// Handle to the spec the name resolved to.
    Resolved(SpecId),
}

impl Reference {
    pub fn unresolved(name: impl Into<String>, line: Line) -> Self {
        Self::Unresolved {
            name: name.into(),
            line,
        }
    }

    pub fn resolved(&self) -> Option<SpecId> {
        match self {
            Self::Resolved(id) => Some(*id),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Type of a field, argument, return value or typedef target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    Base(BaseType),
    Map {
        key: Box<TypeSpec>,
        value: Box<TypeSpec>,
    },
    List(Box<TypeSpec>),
    Set(Box<TypeSpec>),
    Named(Reference),
}

/// A compiled top-level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Struct(StructSpec),
    Service(ServiceSpec),
    Typedef(TypedefSpec),
    Enum(EnumSpec),
}

impl Spec {
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(s) => &s.name,
            Self::Service(s) => &s.name,
            Self::Typedef(t) => &t.name,
            Self::Enum(e) => &e.name,
        }
    }

    pub fn line(&self) -> Line {
        match self {
            Self::Struct(s) => s.line,
            Self::Service(s) => s.line,
            Self::Typedef(t) => t.line,
            Self::Enum(e) => e.line,
        }
    }

    pub fn as_struct(&self) -> Option<&StructSpec> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_service(&self) -> Option<&ServiceSpec> {
        match self {
            Self::Service(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_typedef(&self) -> Option<&TypedefSpec> {
        match self {
            Self::Typedef(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumSpec> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }
}

/// A `struct`, `union` or `exception`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    pub name: String,
    pub kind: StructKind,
    pub fields: FieldGroup,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedefSpec {
    pub name: String,
    pub target: TypeSpec,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumSpec {
    pub name: String,
    pub items: IndexMap<String, EnumItemSpec>,
    pub line: Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumItemSpec {
    pub value: i32,
    pub line: Line,
}

/// Mutable walk over every [`Reference`] a spec holds, in declaration order.
///
/// Only the linker rewrites references; everything else reads them.
pub(crate) trait VisitReferences {
    fn try_visit_references<E>(
        &mut self,
        f: &mut impl FnMut(&mut Reference) -> Result<(), E>,
    ) -> Result<(), E>;
}

impl VisitReferences for TypeSpec {
    fn try_visit_references<E>(
        &mut self,
        f: &mut impl FnMut(&mut Reference) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Self::Base(_) => Ok(()),
            Self::Map { key, value } => {
                key.try_visit_references(f)?;
                value.try_visit_references(f)
            }
            Self::List(elem) | Self::Set(elem) => elem.try_visit_references(f),
            Self::Named(reference) => f(reference),
        }
    }
}

impl VisitReferences for Spec {
    fn try_visit_references<E>(
        &mut self,
        f: &mut impl FnMut(&mut Reference) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Self::Struct(s) => s.fields.try_visit_references(f),
            Self::Service(s) => s.try_visit_references(f),
            Self::Typedef(t) => t.target.try_visit_references(f),
            Self::Enum(_) => Ok(()),
        }
    }
}
