//! C runtime declarations.
//!
//! Synthesized members call into a small runtime for everything that is not
//! plain field arithmetic:
//!
//! - **Object header**: every instance starts with a `synth_object_t` whose
//!   `type` pointer identifies its runtime type
//! - **Strings**: `synth_string_t` plus a string builder used by `to_string`
//! - **Dynamic dispatch**: `synth_object_*` helpers that call the runtime
//!   type's own `to_string`/`hash_code`/`equals`

use super::CWriter;

/// C runtime code generator.
pub struct CRuntime;

impl CRuntime {
    /// Emit includes and runtime declarations.
    pub fn emit_prelude(w: &mut CWriter<'_>) {
        w.writeln("#include <stdbool.h>");
        w.writeln("#include <stddef.h>");
        w.writeln("#include <stdint.h>");
        w.newline();

        Self::emit_object_header(w);
        Self::emit_string_functions(w);
        Self::emit_hash_functions(w);
    }

    fn emit_object_header(w: &mut CWriter<'_>) {
        w.writeln("typedef struct synth_string synth_string_t;");
        w.writeln("typedef uint8_t synth_unit_t;");
        w.writeln("typedef struct synth_type_info synth_type_info_t;");
        w.writeln("typedef struct synth_object {");
        w.indent();
        w.writeln("const synth_type_info_t* type;");
        w.dedent();
        w.writeln("} synth_object_t;");
        w.newline();
        w.writeln("synth_string_t* synth_object_to_string(const synth_object_t* o);");
        w.writeln("int32_t synth_object_hash(const synth_object_t* o);");
        w.writeln("bool synth_object_equals(const synth_object_t* a, const synth_object_t* b);");
        w.newline();
    }

    fn emit_string_functions(w: &mut CWriter<'_>) {
        w.writeln("typedef struct synth_sb synth_sb_t;");
        w.writeln("synth_sb_t* synth_sb_new(void);");
        w.writeln("void synth_sb_append_cstr(synth_sb_t* sb, const char* s);");
        w.writeln("void synth_sb_append_int(synth_sb_t* sb, int64_t v);");
        w.writeln("void synth_sb_append_bool(synth_sb_t* sb, bool v);");
        w.writeln("void synth_sb_append_str(synth_sb_t* sb, const synth_string_t* s);");
        w.writeln("void synth_sb_append_object(synth_sb_t* sb, const synth_object_t* o);");
        w.writeln("synth_string_t* synth_sb_finish(synth_sb_t* sb);");
        w.writeln("bool synth_string_eq(const synth_string_t* a, const synth_string_t* b);");
        w.newline();
    }

    fn emit_hash_functions(w: &mut CWriter<'_>) {
        w.writeln("int32_t synth_hash_int(int64_t v);");
        w.writeln("int32_t synth_hash_bool(bool v);");
        w.writeln("int32_t synth_hash_str(const synth_string_t* s);");
        w.newline();
    }
}
