use indexmap::IndexMap;

use super::{FieldGroup, Line, Reference, TypeSpec, VisitReferences};

/// A compiled `service`.
///
/// `functions` holds only the functions declared in this service's own body.
/// Inherited functions stay on the parent; see [`Specs::service_chain`].
///
/// [`Specs::service_chain`]: super::Specs::service_chain
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSpec {
    pub name: String,
    /// Base service from `extends`.
    pub parent: Option<Reference>,
    pub functions: IndexMap<String, FunctionSpec>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    pub name: String,
    pub args: FieldGroup,
    /// `None` for functions that return nothing and throw nothing.
    pub result: Option<ResultSpec>,
    pub oneway: bool,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSpec {
    /// `None` for `void`.
    pub return_type: Option<TypeSpec>,
    /// Declared exceptions. Never carry default values.
    pub exceptions: FieldGroup,
}

impl VisitReferences for ServiceSpec {
    fn try_visit_references<E>(
        &mut self,
        f: &mut impl FnMut(&mut Reference) -> Result<(), E>,
    ) -> Result<(), E> {
        if let Some(parent) = &mut self.parent {
            f(parent)?;
        }
        for function in self.functions.values_mut() {
            function.try_visit_references(f)?;
        }
        Ok(())
    }
}

impl VisitReferences for FunctionSpec {
    fn try_visit_references<E>(
        &mut self,
        f: &mut impl FnMut(&mut Reference) -> Result<(), E>,
    ) -> Result<(), E> {
        self.args.try_visit_references(f)?;
        let Some(result) = &mut self.result else {
            return Ok(());
        };
        if let Some(ty) = &mut result.return_type {
            ty.try_visit_references(f)?;
        }
        result.exceptions.try_visit_references(f)
    }
}
