//! Read-only graph queries for code generators.
//!
//! Inheritance is never flattened into a service; these helpers walk the
//! parent chain instead. All walks stop on unresolved references and on
//! cycles, so they are safe on partially linked graphs.

use super::{FunctionSpec, ServiceSpec, Spec, SpecId, Specs, TypeSpec};

/// Iterator over a service followed by its ancestors, nearest first.
pub struct ServiceChain<'s> {
    specs: &'s Specs,
    next: Option<SpecId>,
    remaining: usize,
}

impl<'s> Iterator for ServiceChain<'s> {
    type Item = (SpecId, &'s ServiceSpec);

    fn next(&mut self) -> Option<Self::Item> {
        // An `extends` cycle would otherwise loop forever.
        self.remaining = self.remaining.checked_sub(1)?;
        let id = self.next.take()?;
        let service = self.specs.try_get(id)?.as_service()?;
        self.next = service.parent.as_ref().and_then(|p| p.resolved());
        Some((id, service))
    }
}

impl Specs {
    /// Walk `extends` links starting at `service` itself.
    pub fn service_chain(&self, service: SpecId) -> ServiceChain<'_> {
        ServiceChain {
            specs: self,
            next: Some(service),
            remaining: self.len(),
        }
    }

    /// Find a function on `service` or the closest ancestor declaring it.
    ///
    /// Returns the handle of the service that declares the function.
    pub fn find_function(&self, service: SpecId, name: &str) -> Option<(SpecId, &FunctionSpec)> {
        self.service_chain(service)
            .find_map(|(id, s)| s.functions.get(name).map(|f| (id, f)))
    }

    /// Follow typedefs until reaching a type that is not a typedef.
    ///
    /// Returns `None` when the chain hits an unresolved name or loops.
    pub fn resolve_type<'s>(&'s self, ty: &'s TypeSpec) -> Option<&'s TypeSpec> {
        let mut current = ty;
        for _ in 0..=self.len() {
            let TypeSpec::Named(reference) = current else {
                return Some(current);
            };
            match self.try_get(reference.resolved()?)? {
                Spec::Typedef(typedef) => current = &typedef.target,
                _ => return Some(current),
            }
        }
        None
    }

    /// Whether `ty` names a struct, union or exception, looking through
    /// typedefs.
    pub fn is_struct_type(&self, ty: &TypeSpec) -> bool {
        self.target_spec(ty)
            .is_some_and(|spec| matches!(spec, Spec::Struct(_)))
    }

    /// The top-level spec `ty` ultimately names, looking through typedefs.
    pub fn target_spec(&self, ty: &TypeSpec) -> Option<&Spec> {
        let TypeSpec::Named(reference) = self.resolve_type(ty)? else {
            return None;
        };
        self.try_get(reference.resolved()?)
    }
}
