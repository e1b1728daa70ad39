//! Derived method evaluation.
//!
//! Runs the methods an [`EvalBackend`](super::EvalBackend) registered:
//! - component accessors return a field
//! - `copy` builds a new instance, defaulting omitted property arguments
//! - `to_string` renders `Type(x=1, y=2)`
//! - `hash_code` folds field hashes as `h = h * 31 + hash(field)` in 32 bits
//! - `equals` compares identity, runtime type, then fields pairwise
//!
//! Nested struct fields dispatch to their own type's derived methods when it
//! has them and fall back to identity semantics otherwise.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use synth_ir::{Name, StringInterner, TypeId};
use tracing::trace;

use super::{
    CopyParameter, DerivedMethod, DerivedMethodTable, EvalError, EvalResult, StructValue, Value,
};

/// Registry of derived method tables, keyed by type.
pub struct Evaluator<'a> {
    interner: &'a StringInterner,
    tables: FxHashMap<TypeId, DerivedMethodTable>,
}

impl<'a> Evaluator<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Evaluator {
            interner,
            tables: FxHashMap::default(),
        }
    }

    /// Register a type's table, replacing any earlier one for that type.
    pub fn register(&mut self, table: DerivedMethodTable) {
        self.tables.insert(table.ty, table);
    }

    pub fn table(&self, ty: TypeId) -> Option<&DerivedMethodTable> {
        self.tables.get(&ty)
    }

    /// Call derived method `method` on `receiver`.
    ///
    /// `copy` called through here takes every argument explicitly; use
    /// [`eval_copy`](Self::eval_copy) to omit some.
    pub fn eval_method(&self, receiver: &Value, method: &str, args: &[Value]) -> EvalResult {
        let (this, derived) = self.lookup(receiver, method)?;
        trace!(method, args = args.len(), "evaluating derived method");

        match derived {
            DerivedMethod::Component { field } => {
                check_arity(method, 0, args)?;
                self.field(this, *field).cloned()
            }
            DerivedMethod::Copy { parameters } => {
                check_arity(method, parameters.len(), args)?;
                let args: Vec<Option<Value>> = args.iter().cloned().map(Some).collect();
                self.copy(this, parameters, &args)
            }
            DerivedMethod::ToString { fields } => {
                check_arity(method, 0, args)?;
                Ok(Value::string(self.render_struct(this, fields)))
            }
            DerivedMethod::Hash { fields } => {
                check_arity(method, 0, args)?;
                Ok(Value::int(i64::from(self.hash_struct(this, fields))))
            }
            DerivedMethod::Equals { fields } => {
                check_arity(method, 1, args)?;
                Ok(Value::Bool(self.equals_struct(this, &args[0], fields)))
            }
        }
    }

    /// Call the derived `copy` on `receiver`; `None` omits an argument.
    pub fn eval_copy(&self, receiver: &Value, args: &[Option<Value>]) -> EvalResult {
        let (this, derived) = self.lookup(receiver, "copy")?;
        let DerivedMethod::Copy { parameters } = derived else {
            return Err(self.unknown(receiver, "copy"));
        };
        if args.len() != parameters.len() {
            return Err(EvalError::WrongArity {
                method: "copy".to_string(),
                expected: parameters.len(),
                found: args.len(),
            });
        }
        self.copy(this, parameters, args)
    }

    /// `to_string` of any value.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Struct(s) => match self.derived(s.ty, is_to_string) {
                Some(DerivedMethod::ToString { fields }) => self.render_struct(s, fields),
                _ => format!(
                    "{}@{:x}",
                    self.interner.lookup(s.type_name),
                    identity_hash(s)
                ),
            },
            other => other.to_string(),
        }
    }

    /// `hash_code` of any value.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "64-bit values folded to a 32-bit hash"
    )]
    pub fn hash(&self, value: &Value) -> i32 {
        match value {
            Value::Unit => 0,
            Value::Bool(true) => 1231,
            Value::Bool(false) => 1237,
            Value::Int(n) => {
                let bits = *n as u64;
                (bits ^ (bits >> 32)) as i32
            }
            Value::Str(s) => s
                .encode_utf16()
                .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit))),
            Value::Struct(s) => match self.derived(s.ty, is_hash) {
                Some(DerivedMethod::Hash { fields }) => self.hash_struct(s, fields),
                _ => identity_hash(s),
            },
        }
    }

    /// `equals` of any two values.
    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::Str(x), Value::Str(y)) => x == y,
            (Value::Struct(x), _) => match self.derived(x.ty, is_equals) {
                Some(DerivedMethod::Equals { fields }) => self.equals_struct(x, b, fields),
                _ => matches!(b, Value::Struct(y) if Arc::ptr_eq(x, y)),
            },
            _ => false,
        }
    }

    fn lookup<'v>(
        &self,
        receiver: &'v Value,
        method: &str,
    ) -> Result<(&'v Arc<StructValue>, &DerivedMethod), EvalError> {
        let Value::Struct(this) = receiver else {
            return Err(self.unknown(receiver, method));
        };
        self.interner
            .get(method)
            .and_then(|name| self.tables.get(&this.ty)?.get(name))
            .map(|derived| (this, derived))
            .ok_or_else(|| self.unknown(receiver, method))
    }

    fn derived(&self, ty: TypeId, pred: fn(&DerivedMethod) -> bool) -> Option<&DerivedMethod> {
        self.tables.get(&ty)?.find(pred)
    }

    fn field<'v>(&self, this: &'v StructValue, field: Name) -> Result<&'v Value, EvalError> {
        this.get_field(field).ok_or_else(|| EvalError::MissingField {
            receiver: self.interner.lookup(this.type_name).to_string(),
            field: self.interner.lookup(field).to_string(),
        })
    }

    fn copy(
        &self,
        this: &StructValue,
        parameters: &[CopyParameter],
        args: &[Option<Value>],
    ) -> EvalResult {
        let mut fields = Vec::with_capacity(parameters.len());
        for (param, arg) in parameters.iter().zip(args) {
            let value = match arg {
                Some(value) => value.clone(),
                None if param.property => self.field(this, param.name)?.clone(),
                None => {
                    return Err(EvalError::MissingArgument {
                        parameter: self.interner.lookup(param.name).to_string(),
                    })
                }
            };
            // Plain parameters only feed construction; they are not stored.
            if param.property {
                fields.push((param.name, value));
            }
        }
        Ok(Value::new_struct(StructValue::new(
            this.ty,
            this.type_name,
            fields,
        )))
    }

    fn render_struct(&self, this: &StructValue, fields: &[Name]) -> String {
        let type_name = self.interner.lookup(this.type_name);
        let mut result = String::with_capacity(type_name.len() + 2 + fields.len() * 8);
        result.push_str(type_name);
        result.push('(');
        for (i, &field) in fields.iter().enumerate() {
            if i > 0 {
                result.push_str(", ");
            }
            let value = this
                .get_field(field)
                .map_or_else(|| "?".to_string(), |v| self.render(v));
            result.push_str(self.interner.lookup(field));
            result.push('=');
            result.push_str(&value);
        }
        result.push(')');
        result
    }

    fn hash_struct(&self, this: &StructValue, fields: &[Name]) -> i32 {
        fields.iter().fold(0i32, |h, &field| {
            let hash = this.get_field(field).map_or(0, |v| self.hash(v));
            h.wrapping_mul(31).wrapping_add(hash)
        })
    }

    fn equals_struct(&self, this: &Arc<StructValue>, other: &Value, fields: &[Name]) -> bool {
        let Value::Struct(that) = other else {
            return false;
        };
        if Arc::ptr_eq(this, that) {
            return true;
        }
        if this.ty != that.ty {
            return false;
        }
        fields
            .iter()
            .all(|&field| match (this.get_field(field), that.get_field(field)) {
                (Some(a), Some(b)) => self.equals(a, b),
                _ => false,
            })
    }

    fn unknown(&self, receiver: &Value, method: &str) -> EvalError {
        let receiver = match receiver {
            Value::Struct(s) => self.interner.lookup(s.type_name).to_string(),
            other => other.type_name().to_string(),
        };
        EvalError::UnknownMethod {
            receiver,
            method: method.to_string(),
        }
    }
}

fn check_arity(method: &str, expected: usize, args: &[Value]) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::WrongArity {
            method: method.to_string(),
            expected,
            found: args.len(),
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "address folded to a 32-bit identity hash"
)]
fn identity_hash(value: &Arc<StructValue>) -> i32 {
    let addr = Arc::as_ptr(value) as usize as u64;
    (addr ^ (addr >> 32)) as i32
}

fn is_to_string(m: &DerivedMethod) -> bool {
    matches!(m, DerivedMethod::ToString { .. })
}

fn is_hash(m: &DerivedMethod) -> bool {
    matches!(m, DerivedMethod::Hash { .. })
}

fn is_equals(m: &DerivedMethod) -> bool {
    matches!(m, DerivedMethod::Equals { .. })
}
