//! Raw kind to C mapping.

use synth_ir::RawKind;
use synth_sema::BindingService;

use super::writer::mangle_str;

/// How values of one raw kind are spelled and handled in C.
pub struct CTypeMapper<'a> {
    bindings: &'a (dyn BindingService + Sync),
}

impl<'a> CTypeMapper<'a> {
    pub fn new(bindings: &'a (dyn BindingService + Sync)) -> Self {
        CTypeMapper { bindings }
    }

    /// The C type of a value of `kind`.
    pub fn c_type(&self, kind: RawKind) -> String {
        match kind {
            RawKind::Unit => "synth_unit_t".to_string(),
            RawKind::Bool => "bool".to_string(),
            RawKind::Int => "int64_t".to_string(),
            RawKind::Str => "synth_string_t*".to_string(),
            RawKind::Any => "synth_object_t*".to_string(),
            RawKind::Named(ty) => {
                let name = self.bindings.interner().lookup(self.bindings.type_name(ty));
                format!("{}*", mangle_str(name))
            }
        }
    }

    /// Statement appending `value` to string builder `sb`.
    pub fn append(kind: RawKind, sb: &str, value: &str) -> String {
        match kind {
            RawKind::Unit => format!("synth_sb_append_cstr({sb}, \"()\");"),
            RawKind::Bool => format!("synth_sb_append_bool({sb}, {value});"),
            RawKind::Int => format!("synth_sb_append_int({sb}, {value});"),
            RawKind::Str => format!("synth_sb_append_str({sb}, {value});"),
            RawKind::Any | RawKind::Named(_) => {
                format!("synth_sb_append_object({sb}, (const synth_object_t*){value});")
            }
        }
    }

    /// Expression hashing `value` to `int32_t`.
    pub fn hash(kind: RawKind, value: &str) -> String {
        match kind {
            RawKind::Unit => "0".to_string(),
            RawKind::Bool => format!("synth_hash_bool({value})"),
            RawKind::Int => format!("synth_hash_int({value})"),
            RawKind::Str => format!("synth_hash_str({value})"),
            RawKind::Any | RawKind::Named(_) => {
                format!("synth_object_hash((const synth_object_t*){value})")
            }
        }
    }

    /// Expression comparing `a` and `b` for equality.
    pub fn equal(kind: RawKind, a: &str, b: &str) -> String {
        match kind {
            RawKind::Unit | RawKind::Bool | RawKind::Int => format!("{a} == {b}"),
            RawKind::Str => format!("synth_string_eq({a}, {b})"),
            RawKind::Any | RawKind::Named(_) => format!(
                "synth_object_equals((const synth_object_t*){a}, (const synth_object_t*){b})"
            ),
        }
    }
}
