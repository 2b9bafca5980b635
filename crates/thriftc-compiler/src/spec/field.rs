use indexmap::IndexMap;

use super::{ConstValue, Line, Reference, Requiredness, TypeSpec, VisitReferences};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub id: i16,
    pub name: String,
    pub ty: TypeSpec,
    pub requiredness: Requiredness,
    /// Default value as written in the source.
    pub default: Option<ConstValue>,
    pub line: Line,
}

/// Fields of one struct body, argument list or throws list.
///
/// Names and ids are unique within a group. Iteration follows declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldGroup {
    fields: IndexMap<String, FieldSpec>,
}

impl FieldGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callers must have checked name and id uniqueness.
    pub(crate) fn push(&mut self, field: FieldSpec) {
        debug_assert!(!self.fields.contains_key(&field.name));
        self.fields.insert(field.name.clone(), field);
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn by_id(&self, id: i16) -> Option<&FieldSpec> {
        self.fields.values().find(|f| f.id == id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }
}

impl<'a> IntoIterator for &'a FieldGroup {
    type Item = &'a FieldSpec;
    type IntoIter = indexmap::map::Values<'a, String, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}

impl VisitReferences for FieldGroup {
    fn try_visit_references<E>(
        &mut self,
        f: &mut impl FnMut(&mut Reference) -> Result<(), E>,
    ) -> Result<(), E> {
        for field in self.fields.values_mut() {
            field.ty.try_visit_references(f)?;
        }
        Ok(())
    }
}
