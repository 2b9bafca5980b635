//! Reference resolution over the spec graph.

use crate::scope::Scope;
use crate::spec::{LinkState, Reference, SpecId, Specs, VisitReferences};

use super::LinkError;

/// Link `id` and everything reachable from it against `scope`.
///
/// Linking an already linked spec is a no-op, whatever the scope.
pub fn link(specs: &mut Specs, id: SpecId, scope: &Scope) -> Result<(), LinkError> {
    Linker::new(specs, scope).link(id)
}

/// Resolves references spec by spec, following every resolved handle.
///
/// Each spec resolves its names in the scope it was declared in: a spec
/// reached through `alias.Name` is linked against the included scope.
///
/// A spec is marked `Linking` while its references are being resolved, so a
/// reference cycle back to it ends the walk. If any spec fails, every spec
/// touched during the same call gets its references and its `Unlinked`
/// state back: a linked spec never reaches an unlinked one.
pub struct Linker<'a> {
    specs: &'a mut Specs,
    scope: &'a Scope,
    /// Specs linked during the current call, with their references as they
    /// were before linking.
    linked: Vec<(SpecId, Vec<Reference>)>,
}

impl<'a> Linker<'a> {
    pub fn new(specs: &'a mut Specs, scope: &'a Scope) -> Self {
        Self {
            specs,
            scope,
            linked: Vec::new(),
        }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn link(&mut self, id: SpecId) -> Result<(), LinkError> {
        self.linked.clear();
        let result = self.link_spec(id, self.scope);
        if result.is_err() {
            for (id, originals) in std::mem::take(&mut self.linked) {
                self.restore(id, originals);
                self.specs.set_state(id, LinkState::Unlinked);
            }
        }
        result
    }

    fn link_spec(&mut self, id: SpecId, scope: &'a Scope) -> Result<(), LinkError> {
        if self.specs.state(id) != LinkState::Unlinked {
            return Ok(());
        }

        self.specs.set_state(id, LinkState::Linking);
        let mut originals = Vec::new();
        match self.link_references(id, scope, &mut originals) {
            Ok(()) => {
                self.specs.set_state(id, LinkState::Linked);
                self.linked.push((id, originals));
                tracing::trace!(spec = self.specs.name(id), "linked");
                Ok(())
            }
            Err(err) => {
                self.restore(id, originals);
                self.specs.set_state(id, LinkState::Unlinked);
                Err(err.within(self.specs.name(id)))
            }
        }
    }

    fn link_references(
        &mut self,
        id: SpecId,
        scope: &'a Scope,
        originals: &mut Vec<Reference>,
    ) -> Result<(), LinkError> {
        let mut targets = Vec::new();

        // Resolve this spec's own names first, then descend.
        self.specs
            .get_mut(id)
            .try_visit_references(&mut |reference| -> Result<(), LinkError> {
                originals.push(reference.clone());
                targets.push(resolve(reference, scope)?);
                Ok(())
            })?;

        for (target, declared_in) in targets {
            self.link_spec(target, declared_in)?;
        }
        Ok(())
    }

    /// Put back the references a spec had before this call rewrote them.
    fn restore(&mut self, id: SpecId, originals: Vec<Reference>) {
        let mut originals = originals.into_iter();
        let _ = self
            .specs
            .get_mut(id)
            .try_visit_references(&mut |reference| -> Result<(), LinkError> {
                if let Some(original) = originals.next() {
                    *reference = original;
                }
                Ok(())
            });
    }
}

/// Resolve one reference, returning the target and the scope it was
/// declared in.
///
/// Handles already present (only in hand-built specs) are taken as
/// declared in `scope`.
fn resolve<'s>(
    reference: &mut Reference,
    scope: &'s Scope,
) -> Result<(SpecId, &'s Scope), LinkError> {
    let (name, line) = match reference {
        Reference::Resolved(id) => return Ok((*id, scope)),
        Reference::Unresolved { name, line } => (name, *line),
    };
    let Some((id, declared_in)) = scope.resolve(name) else {
        return Err(LinkError::Undefined {
            name: name.clone(),
            line,
        });
    };
    *reference = Reference::Resolved(id);
    Ok((id, declared_in))
}
