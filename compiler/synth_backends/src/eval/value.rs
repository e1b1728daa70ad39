//! Runtime values.

use std::fmt;
use std::sync::Arc;

use synth_ir::{Name, TypeId};

/// A runtime value.
///
/// Structs are reference-counted so that copies share unchanged fields and
/// identity comparison is a pointer comparison.
#[derive(Clone, Debug)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
    Struct(Arc<StructValue>),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn new_struct(value: StructValue) -> Self {
        Value::Struct(Arc::new(value))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Arc<StructValue>> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Struct(_) => "struct",
        }
    }
}

/// Primitive rendering; structs need an evaluator to render.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Struct(s) => write!(f, "<struct {:?}>", s.ty),
        }
    }
}

/// An instance of a declared type: its structural properties by name.
#[derive(Clone, Debug)]
pub struct StructValue {
    pub ty: TypeId,
    pub type_name: Name,
    fields: Vec<(Name, Value)>,
}

impl StructValue {
    pub fn new(ty: TypeId, type_name: Name, fields: Vec<(Name, Value)>) -> Self {
        StructValue {
            ty,
            type_name,
            fields,
        }
    }

    pub fn get_field(&self, name: Name) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(field, value)| (*field == name).then_some(value))
    }

    pub fn fields(&self) -> &[(Name, Value)] {
        &self.fields
    }
}
