use super::Spec;

/// A lightweight handle to a top-level spec.
///
/// Handles are only meaningful for the [`Specs`] arena that issued them.
/// Two equal handles denote the same spec instance.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SpecId(u32);

impl SpecId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpecId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Link progress of one spec. Transitions only move forward, except that a
/// failed link drops back to `Unlinked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    /// Compiled; references may still be names.
    #[default]
    Unlinked,
    /// Linking has started and not finished yet.
    Linking,
    /// Every reference reachable from this spec is resolved.
    Linked,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    spec: Spec,
    state: LinkState,
}

/// Arena of every spec compiled in one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specs {
    entries: Vec<Entry>,
}

impl Specs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly compiled spec.
    pub fn alloc(&mut self, spec: Spec) -> SpecId {
        let id = SpecId(self.entries.len() as u32);
        self.entries.push(Entry {
            spec,
            state: LinkState::Unlinked,
        });
        id
    }

    /// # Panics
    /// Panics if the handle was not issued by this arena.
    pub fn get(&self, id: SpecId) -> &Spec {
        &self.entry(id).spec
    }

    pub fn try_get(&self, id: SpecId) -> Option<&Spec> {
        self.entries.get(id.index()).map(|e| &e.spec)
    }

    /// Returns the spec only if it finished linking.
    pub fn linked(&self, id: SpecId) -> Option<&Spec> {
        self.entries
            .get(id.index())
            .filter(|e| e.state == LinkState::Linked)
            .map(|e| &e.spec)
    }

    pub fn name(&self, id: SpecId) -> &str {
        self.get(id).name()
    }

    pub fn state(&self, id: SpecId) -> LinkState {
        self.entry(id).state
    }

    pub fn is_linked(&self, id: SpecId) -> bool {
        self.state(id) == LinkState::Linked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (handle, spec) pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (SpecId, &Spec)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (SpecId(i as u32), &e.spec))
    }

    pub(crate) fn get_mut(&mut self, id: SpecId) -> &mut Spec {
        &mut self.entry_mut(id).spec
    }

    /// Drop every spec allocated at or after index `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub(crate) fn set_state(&mut self, id: SpecId, state: LinkState) {
        self.entry_mut(id).state = state;
    }

    fn entry(&self, id: SpecId) -> &Entry {
        self.entries.get(id.index()).expect("invalid SpecId")
    }

    fn entry_mut(&mut self, id: SpecId) -> &mut Entry {
        self.entries.get_mut(id.index()).expect("invalid SpecId")
    }
}
