//! C source backend.
//!
//! Emits one C unit per declared type: the struct layout (object header
//! followed by one field per structural property) and one function per
//! synthesized member, named `<Type>_<member>`.
//!
//! Copy uses a default mask split into 64-bit words: bit `i % 64` of
//! `mask[i / 64]` set means constructor argument `i` was supplied.
//! Unsupplied property arguments fall back to the receiver's field; plain
//! arguments are always taken as passed.
//!
//! Source names are mangled into C identifiers once per unit. Fields stay
//! clear of the object header and locals stay clear of the names emitted
//! functions declare; names that still collide get a trailing `_` until they
//! are distinct.

mod runtime;
mod types;
mod writer;

pub use runtime::CRuntime;
pub use types::CTypeMapper;
pub use writer::CWriter;

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use synth_core::{ResolvedType, SynthesisBackend};
use synth_ir::{MemberSignature, Name, ParamId, Parameter, RawKind, StructuralProperty, TypeId};
use synth_sema::BindingService;
use tracing::trace;

use writer::{c_string_literal, mangle_str};

/// Locals the emitted functions declare themselves.
const RESERVED: &[&str] = &["self", "mask", "result", "sb", "that"];

/// Struct members every layout starts with.
const HEADER_FIELDS: &[&str] = &["header"];

/// Bits per default-mask word.
const MASK_BITS: usize = 64;

/// Finished C output for one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CUnit {
    pub ty: TypeId,
    pub source: String,
    /// Emitted function names, in emission order.
    pub functions: Vec<String>,
}

/// Emits synthesized members of one type as C source.
pub struct CBackend<'a> {
    ty: TypeId,
    types: CTypeMapper<'a>,
    writer: CWriter<'a>,
    functions: Vec<String>,
    /// Struct member per property parameter.
    fields: FxHashMap<ParamId, String>,
    /// C local per constructor parameter.
    locals: FxHashMap<ParamId, String>,
}

impl<'a> CBackend<'a> {
    pub fn new(bindings: &'a (dyn BindingService + Sync), ty: TypeId) -> Self {
        CBackend {
            ty,
            types: CTypeMapper::new(bindings),
            writer: CWriter::new(bindings.interner()),
            functions: Vec::new(),
            fields: FxHashMap::default(),
            locals: FxHashMap::default(),
        }
    }

    pub fn finish(mut self) -> CUnit {
        CUnit {
            ty: self.ty,
            source: self.writer.take_output(),
            functions: self.functions,
        }
    }

    /// Write the prelude and layout on first use; returns the C type name.
    fn begin(&mut self, owner: &ResolvedType) -> String {
        let ident = self.writer.mangle(owner.name);
        self.writer.once("prelude", CRuntime::emit_prelude);
        if !self.functions.is_empty() {
            return ident;
        }

        let type_name = self.writer.resolve(owner.name);
        self.fields = unique_idents(
            owner
                .properties
                .iter()
                .map(|p| (p.param, self.writer.resolve(p.name))),
            HEADER_FIELDS,
        );
        self.locals = unique_idents(
            owner
                .constructor_parameters()
                .iter()
                .map(|p| (p.id, self.writer.resolve(p.name))),
            RESERVED,
        );

        let layout: Vec<String> = owner
            .properties
            .iter()
            .map(|p| format!("{} {};", self.types.c_type(p.kind), self.field(p.param, p.name)))
            .collect();
        let constructor = owner.constructor.as_ref().map(|params| {
            let params: Vec<String> = params
                .iter()
                .map(|p| format!("{} {}", self.types.c_type(p.kind), self.local(p)))
                .collect();
            if params.is_empty() {
                "void".to_string()
            } else {
                params.join(", ")
            }
        });

        let w = &mut self.writer;
        w.writeln(&format!("// {type_name}"));
        w.writeln(&format!("typedef struct {ident} {ident};"));
        w.writeln(&format!("struct {ident} {{"));
        w.indent();
        w.writeln("synth_object_t header;");
        for field in &layout {
            w.writeln(field);
        }
        w.dedent();
        w.writeln("};");
        w.writeln(&format!("extern const synth_type_info_t {ident}_type_info;"));
        if let Some(params) = constructor {
            w.writeln(&format!("{ident}* {ident}_new({params});"));
        }
        w.newline();
        ident
    }

    fn open_function(&mut self, ident: &str, signature: &MemberSignature, params: &str) {
        let name = format!("{ident}_{}", self.writer.mangle(signature.name));
        let ret = self.types.c_type(signature.ret);
        trace!(function = %name, "emitting C function");
        self.writer.writeln(&format!("{ret} {name}({params}) {{"));
        self.writer.indent();
        self.functions.push(name);
    }

    fn close_function(&mut self) {
        self.writer.dedent();
        self.writer.writeln("}");
        self.writer.newline();
    }

    fn field(&self, param: ParamId, name: Name) -> String {
        self.fields
            .get(&param)
            .cloned()
            .unwrap_or_else(|| self.writer.mangle(name))
    }

    fn local(&self, param: &Parameter) -> String {
        self.locals
            .get(&param.id)
            .cloned()
            .unwrap_or_else(|| local(self.writer.resolve(param.name)))
    }
}

impl SynthesisBackend for CBackend<'_> {
    fn generate_component_accessor(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        parameter: &Parameter,
    ) {
        let ident = self.begin(owner);
        self.open_function(&ident, signature, &format!("const {ident}* self"));
        let field = self.field(parameter.id, parameter.name);
        self.writer.writeln(&format!("return self->{field};"));
        self.close_function();
    }

    fn generate_copy(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        constructor_parameters: &[Parameter],
    ) {
        let ident = self.begin(owner);
        let mut params = vec![
            format!("const {ident}* self"),
            "const uint64_t* mask".to_string(),
        ];
        params.extend(
            constructor_parameters
                .iter()
                .map(|p| format!("{} {}", self.types.c_type(p.kind), self.local(p))),
        );
        self.open_function(&ident, signature, &params.join(", "));

        let mut args = Vec::with_capacity(constructor_parameters.len());
        for (bit, param) in constructor_parameters.iter().enumerate() {
            let arg = self.local(param);
            if let Some(property) = owner.property_of(param.id) {
                let (word, shift) = (bit / MASK_BITS, bit % MASK_BITS);
                let field = self.field(property.param, property.name);
                self.writer.writeln(&format!(
                    "if (!(mask[{word}] & (UINT64_C(1) << {shift}))) {arg} = self->{field};"
                ));
            }
            args.push(arg);
        }
        self.writer
            .writeln(&format!("return {ident}_new({});", args.join(", ")));
        self.close_function();
    }

    fn generate_string_representation(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        let ident = self.begin(owner);
        self.open_function(&ident, signature, &format!("const {ident}* self"));
        self.writer.writeln("synth_sb_t* sb = synth_sb_new();");

        let mut pending = format!("{}(", self.writer.resolve(owner.name));
        for property in properties {
            pending.push_str(self.writer.resolve(property.name));
            pending.push('=');
            self.writer.writeln(&format!(
                "synth_sb_append_cstr(sb, {});",
                c_string_literal(&pending)
            ));
            let value = format!("self->{}", self.field(property.param, property.name));
            self.writer
                .writeln(&CTypeMapper::append(property.kind, "sb", &value));
            pending = ", ".to_string();
        }
        if properties.is_empty() {
            pending.push(')');
        } else {
            pending = ")".to_string();
        }
        self.writer.writeln(&format!(
            "synth_sb_append_cstr(sb, {});",
            c_string_literal(&pending)
        ));
        self.writer.writeln("return synth_sb_finish(sb);");
        self.close_function();
    }

    fn generate_hash(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        let ident = self.begin(owner);
        self.open_function(&ident, signature, &format!("const {ident}* self"));
        self.writer.writeln("int32_t result = 0;");
        for property in properties {
            let value = format!("self->{}", self.field(property.param, property.name));
            let hash = CTypeMapper::hash(property.kind, &value);
            // Unsigned arithmetic for defined 32-bit wrapping.
            self.writer.writeln(&format!(
                "result = (int32_t)((uint32_t)result * 31u + (uint32_t){hash});"
            ));
        }
        self.writer.writeln("return result;");
        self.close_function();
    }

    fn generate_equality(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        let ident = self.begin(owner);
        let (other_kind, other) = signature.params.first().map_or(
            (RawKind::Any, "other".to_string()),
            |p| (p.kind, local(self.writer.resolve(p.name))),
        );
        let other_type = self.types.c_type(other_kind);
        self.open_function(
            &ident,
            signature,
            &format!("const {ident}* self, {other_type} {other}"),
        );

        let fields: Vec<String> = properties
            .iter()
            .map(|p| self.field(p.param, p.name))
            .collect();
        let w = &mut self.writer;
        w.writeln(&format!(
            "if ((const synth_object_t*)self == (const synth_object_t*){other}) return true;"
        ));
        w.writeln(&format!(
            "if ({other} == NULL || ((const synth_object_t*){other})->type != &{ident}_type_info) return false;"
        ));
        if !properties.is_empty() {
            w.writeln(&format!("const {ident}* that = (const {ident}*){other};"));
        }
        for (property, field) in properties.iter().zip(&fields) {
            let equal = CTypeMapper::equal(
                property.kind,
                &format!("self->{field}"),
                &format!("that->{field}"),
            );
            w.writeln(&format!("if (!({equal})) return false;"));
        }
        w.writeln("return true;");
        self.close_function();
    }
}

/// C local for a source parameter name, renamed away from emitted locals.
fn local(name: &str) -> String {
    let mut ident = mangle_str(name);
    if RESERVED.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Distinct C identifiers for `names`, none of them in `reserved`.
fn unique_idents<'n, K: Eq + Hash>(
    names: impl IntoIterator<Item = (K, &'n str)>,
    reserved: &[&str],
) -> FxHashMap<K, String> {
    let mut taken: FxHashSet<String> = reserved.iter().map(|r| (*r).to_string()).collect();
    let mut idents = FxHashMap::default();
    for (key, name) in names {
        let mut ident = mangle_str(name);
        while taken.contains(&ident) {
            ident.push('_');
        }
        taken.insert(ident.clone());
        idents.insert(key, ident);
    }
    idents
}

#[cfg(test)]
mod tests;
