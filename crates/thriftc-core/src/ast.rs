//! Syntax tree produced by the IDL parser.
//!
//! These types are the input contract of the compiler. They are plain data:
//! the parser builds them once and the compiler only reads them.

use serde::{Deserialize, Serialize};

/// 1-based source line of a syntax element.
pub type Line = u32;

/// A whole IDL file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub includes: Vec<Include>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    pub fn definition(mut self, definition: impl Into<Definition>) -> Self {
        self.definitions.push(definition.into());
        self
    }
}

/// `include "shared.thrift"` makes `shared.Name` visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    /// Module name the include is addressed by.
    pub name: String,
    #[serde(default)]
    pub line: Line,
}

impl Include {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: 0,
        }
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

/// A top-level definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Definition {
    Struct(Struct),
    Service(Service),
    Typedef(Typedef),
    Enum(Enum),
}

impl Definition {
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
}

impl From<Struct> for Definition {
    fn from(value: Struct) -> Self {
        Self::Struct(value)
    }
}

impl From<Service> for Definition {
    fn from(value: Service) -> Self {
        Self::Service(value)
    }
}

impl From<Typedef> for Definition {
    fn from(value: Typedef) -> Self {
        Self::Typedef(value)
    }
}

impl From<Enum> for Definition {
    fn from(value: Enum) -> Self {
        Self::Enum(value)
    }
}

/// A name used to refer to another definition, with the line it appears on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    #[serde(default)]
    pub line: Line,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: 0,
        }
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructKind {
    Struct,
    Union,
    Exception,
}

impl StructKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Exception => "exception",
        }
    }
}

/// `struct`, `union` or `exception` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    pub kind: StructKind,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub line: Line,
}

impl Struct {
    pub fn new(kind: StructKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            line: 0,
        }
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(StructKind::Struct, name)
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self::new(StructKind::Union, name)
    }

    pub fn exception(name: impl Into<String>) -> Self {
        Self::new(StructKind::Exception, name)
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    #[default]
    Unspecified,
    Required,
    Optional,
}

/// A struct field, function argument or throws entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub id: Option<i16>,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub requiredness: Requiredness,
    #[serde(default)]
    pub default: Option<ConstValue>,
    #[serde(default)]
    pub line: Line,
}

impl Field {
    /// Field with an explicit id.
    pub fn new(id: i16, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::implicit(name, ty).id(id)
    }

    /// Field whose id is left for the compiler to assign.
    pub fn implicit(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            id: None,
            name: name.into(),
            ty: ty.into(),
            requiredness: Requiredness::Unspecified,
            default: None,
            line: 0,
        }
    }

    pub fn id(mut self, id: i16) -> Self {
        self.id = Some(id);
        self
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn default_value(mut self, value: ConstValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
}

impl BaseType {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Double => "double",
            Self::String => "string",
            Self::Binary => "binary",
        }
    }
}

/// A type reference as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Base(BaseType),
    Map { key: Box<Type>, value: Box<Type> },
    List(Box<Type>),
    Set(Box<Type>),
    Named(Ident),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(Ident::new(name))
    }

    pub fn map(key: impl Into<Type>, value: impl Into<Type>) -> Self {
        Self::Map {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }

    pub fn list(elem: impl Into<Type>) -> Self {
        Self::List(Box::new(elem.into()))
    }

    pub fn set(elem: impl Into<Type>) -> Self {
        Self::Set(Box::new(elem.into()))
    }
}

impl From<BaseType> for Type {
    fn from(value: BaseType) -> Self {
        Self::Base(value)
    }
}

impl From<Ident> for Type {
    fn from(value: Ident) -> Self {
        Self::Named(value)
    }
}

/// A literal default value. Carried verbatim, never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstValue {
    Int(i64),
    Double(f64),
    String(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
    /// Reference to a constant or enum item, e.g. `Status.OK`.
    Identifier(String),
}

/// `service Name extends Parent { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub extends: Option<Ident>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub line: Line,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            functions: Vec::new(),
            line: 0,
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(Ident::new(parent).at(self.line));
        self
    }

    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        if let Some(parent) = &mut self.extends {
            parent.line = line;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// `None` for `void`.
    #[serde(default)]
    pub return_type: Option<Type>,
    #[serde(default)]
    pub args: Vec<Field>,
    #[serde(default)]
    pub exceptions: Vec<Field>,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub line: Line,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            args: Vec::new(),
            exceptions: Vec::new(),
            oneway: false,
            line: 0,
        }
    }

    pub fn returns(mut self, ty: impl Into<Type>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn arg(mut self, field: Field) -> Self {
        self.args.push(field);
        self
    }

    pub fn throws(mut self, field: Field) -> Self {
        self.exceptions.push(field);
        self
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

/// `typedef Target Name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    pub target: Type,
    #[serde(default)]
    pub line: Line,
}

impl Typedef {
    pub fn new(name: impl Into<String>, target: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            line: 0,
        }
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub items: Vec<EnumItem>,
    #[serde(default)]
    pub line: Line,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            line: 0,
        }
    }

    pub fn item(mut self, item: EnumItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumItem {
    pub name: String,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub line: Line,
}

impl EnumItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            line: 0,
        }
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }
}
