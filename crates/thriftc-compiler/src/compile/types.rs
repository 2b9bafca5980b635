use thriftc_core::Type;

use crate::spec::{Reference, TypeSpec};

/// Lower a source type. Names become unresolved references.
pub(crate) fn compile_type(ty: &Type) -> TypeSpec {
    match ty {
        Type::Base(base) => TypeSpec::Base(*base),
        Type::Map { key, value } => TypeSpec::Map {
            key: Box::new(compile_type(key)),
            value: Box::new(compile_type(value)),
        },
        Type::List(elem) => TypeSpec::List(Box::new(compile_type(elem))),
        Type::Set(elem) => TypeSpec::Set(Box::new(compile_type(elem))),
        Type::Named(ident) => TypeSpec::Named(Reference::unresolved(&ident.name, ident.line)),
    }
}
