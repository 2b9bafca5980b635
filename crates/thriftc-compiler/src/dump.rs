//! Text rendering of compiled specs, in IDL-like syntax.
//!
//! Resolved references print as the name of the spec they point to, and
//! unresolved ones as `Name?`. Recursion through references is never
//! followed, so cyclic graphs print like any other.

use std::fmt::Write;

use crate::scope::Scope;
use crate::spec::{
    ConstValue, EnumSpec, FieldGroup, FieldSpec, FunctionSpec, Reference, Requiredness,
    ServiceSpec, Spec, SpecId, Specs, StructSpec, TypeSpec, TypedefSpec,
};

pub struct SpecPrinter<'s> {
    specs: &'s Specs,
    handles: bool,
    states: bool,
}

impl<'s> SpecPrinter<'s> {
    pub fn new(specs: &'s Specs) -> Self {
        Self {
            specs,
            handles: false,
            states: false,
        }
    }

    /// Append `#N` handles to spec headers and resolved references.
    pub fn with_handles(mut self, value: bool) -> Self {
        self.handles = value;
        self
    }

    /// Append the link state to spec headers.
    pub fn with_states(mut self, value: bool) -> Self {
        self.states = value;
        self
    }

    /// Every spec in the arena, in allocation order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn dump_spec(&self, id: SpecId) -> String {
        let mut out = String::new();
        self.format_spec(id, &mut out)
            .expect("String write never fails");
        out
    }

    /// The own definitions of a scope, in declaration order.
    pub fn dump_scope(&self, scope: &Scope) -> String {
        let mut out = String::new();
        self.format_ids(scope.ids(), &mut out)
            .expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_ids(self.specs.iter().map(|(id, _)| id), w)
    }

    fn format_ids(&self, ids: impl Iterator<Item = SpecId>, w: &mut impl Write) -> std::fmt::Result {
        for (i, id) in ids.enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            self.format_spec(id, w)?;
        }
        Ok(())
    }

    pub fn format_spec(&self, id: SpecId, w: &mut impl Write) -> std::fmt::Result {
        match self.specs.get(id) {
            Spec::Struct(s) => self.format_struct(id, s, w),
            Spec::Service(s) => self.format_service(id, s, w),
            Spec::Typedef(t) => self.format_typedef(id, t, w),
            Spec::Enum(e) => self.format_enum(id, e, w),
        }
    }

    fn format_struct(&self, id: SpecId, s: &StructSpec, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "{} {}", s.kind.keyword(), s.name)?;
        self.format_header_suffix(id, w)?;
        for field in &s.fields {
            w.write_str("  ")?;
            self.format_field(field, w)?;
            w.write_char('\n')?;
        }
        Ok(())
    }

    fn format_service(&self, id: SpecId, s: &ServiceSpec, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "service {}", s.name)?;
        if let Some(parent) = &s.parent {
            w.write_str(" extends ")?;
            self.format_reference(parent, w)?;
        }
        self.format_header_suffix(id, w)?;
        for function in s.functions.values() {
            w.write_str("  ")?;
            self.format_function(function, w)?;
            w.write_char('\n')?;
        }
        Ok(())
    }

    fn format_typedef(&self, id: SpecId, t: &TypedefSpec, w: &mut impl Write) -> std::fmt::Result {
        w.write_str("typedef ")?;
        self.format_type(&t.target, w)?;
        write!(w, " {}", t.name)?;
        self.format_header_suffix(id, w)
    }

    fn format_enum(&self, id: SpecId, e: &EnumSpec, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "enum {}", e.name)?;
        self.format_header_suffix(id, w)?;
        for (name, item) in &e.items {
            writeln!(w, "  {} = {}", name, item.value)?;
        }
        Ok(())
    }

    fn format_header_suffix(&self, id: SpecId, w: &mut impl Write) -> std::fmt::Result {
        if self.handles {
            write!(w, " {id}")?;
        }
        if self.states {
            write!(w, " ({:?})", self.specs.state(id))?;
        }
        w.write_char('\n')
    }

    fn format_function(&self, f: &FunctionSpec, w: &mut impl Write) -> std::fmt::Result {
        if f.oneway {
            w.write_str("oneway ")?;
        }
        match f.result.as_ref().and_then(|r| r.return_type.as_ref()) {
            Some(ty) => self.format_type(ty, w)?,
            None => w.write_str("void")?,
        }
        write!(w, " {}(", f.name)?;
        self.format_field_list(&f.args, w)?;
        w.write_char(')')?;

        if let Some(result) = &f.result
            && !result.exceptions.is_empty()
        {
            w.write_str(" throws (")?;
            self.format_field_list(&result.exceptions, w)?;
            w.write_char(')')?;
        }
        Ok(())
    }

    fn format_field_list(&self, group: &FieldGroup, w: &mut impl Write) -> std::fmt::Result {
        for (i, field) in group.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            self.format_field(field, w)?;
        }
        Ok(())
    }

    fn format_field(&self, field: &FieldSpec, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "{}: ", field.id)?;
        match field.requiredness {
            Requiredness::Required => w.write_str("required ")?,
            Requiredness::Optional => w.write_str("optional ")?,
            Requiredness::Unspecified => {}
        }
        self.format_type(&field.ty, w)?;
        write!(w, " {}", field.name)?;
        if let Some(value) = &field.default {
            w.write_str(" = ")?;
            format_const(value, w)?;
        }
        Ok(())
    }

    fn format_type(&self, ty: &TypeSpec, w: &mut impl Write) -> std::fmt::Result {
        match ty {
            TypeSpec::Base(base) => w.write_str(base.keyword()),
            TypeSpec::Map { key, value } => {
                w.write_str("map<")?;
                self.format_type(key, w)?;
                w.write_str(", ")?;
                self.format_type(value, w)?;
                w.write_char('>')
            }
            TypeSpec::List(elem) => {
                w.write_str("list<")?;
                self.format_type(elem, w)?;
                w.write_char('>')
            }
            TypeSpec::Set(elem) => {
                w.write_str("set<")?;
                self.format_type(elem, w)?;
                w.write_char('>')
            }
            TypeSpec::Named(reference) => self.format_reference(reference, w),
        }
    }

    fn format_reference(&self, reference: &Reference, w: &mut impl Write) -> std::fmt::Result {
        match reference {
            Reference::Unresolved { name, .. } => write!(w, "{name}?"),
            Reference::Resolved(id) => {
                match self.specs.try_get(*id) {
                    Some(spec) => w.write_str(spec.name())?,
                    None => w.write_str("<invalid>")?,
                }
                if self.handles {
                    write!(w, "{id}")?;
                }
                Ok(())
            }
        }
    }
}

fn format_const(value: &ConstValue, w: &mut impl Write) -> std::fmt::Result {
    match value {
        ConstValue::Int(n) => write!(w, "{n}"),
        ConstValue::Double(d) => write!(w, "{d:?}"),
        ConstValue::String(s) => write!(w, "{s:?}"),
        ConstValue::Identifier(name) => w.write_str(name),
        ConstValue::List(items) => {
            w.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                format_const(item, w)?;
            }
            w.write_char(']')
        }
        ConstValue::Map(entries) => {
            w.write_char('{')?;
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                format_const(key, w)?;
                w.write_str(": ")?;
                format_const(value, w)?;
            }
            w.write_char('}')
        }
    }
}

impl Specs {
    pub fn printer(&self) -> SpecPrinter<'_> {
        SpecPrinter::new(self)
    }
}
