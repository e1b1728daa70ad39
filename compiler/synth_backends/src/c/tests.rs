use pretty_assertions::assert_eq;
use synth_core::{EmptyPropertyPolicy, SynthConfig, Synthesizer};
use synth_ir::{RawKind, StringInterner};
use synth_sema::{ModelBuilder, ParamSpec, SemanticModel};

use super::*;

fn emit(model: &SemanticModel, ty: TypeId, config: SynthConfig) -> CUnit {
    let mut backend = CBackend::new(model, ty);
    Synthesizer::with_config(model, model, config).synthesize(ty, &mut backend);
    backend.finish()
}

fn point() -> (SemanticModel, TypeId) {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Point");
    b.primary_constructor(
        ty,
        &[
            ParamSpec::val("x", RawKind::Int),
            ParamSpec::var("label", RawKind::Str),
        ],
    );
    b.derive_structural_slots(ty);
    (b.finish(), ty)
}

#[test]
fn test_mangle() {
    let interner = StringInterner::new();
    let w = CWriter::new(&interner);
    assert_eq!(w.mangle(interner.intern("my-type")), "my_type");
    assert_eq!(w.mangle(interner.intern("2d")), "_2d");
    assert_eq!(local("mask"), "mask_");
    assert_eq!(local("width"), "width");
}

#[test]
fn test_string_literal_escapes() {
    assert_eq!(c_string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
}

#[test]
fn test_indent_dedent() {
    let interner = StringInterner::new();
    let mut w = CWriter::new(&interner);
    w.writeln("a {");
    w.indent();
    w.writeln("b;");
    w.dedent();
    w.writeln("}");
    assert_eq!(w.take_output(), "a {\n    b;\n}\n");
}

#[test]
fn test_function_order() {
    let (model, ty) = point();
    let unit = emit(&model, ty, SynthConfig::default());
    assert_eq!(
        unit.functions,
        vec![
            "Point_component1",
            "Point_component2",
            "Point_copy",
            "Point_to_string",
            "Point_hash_code",
            "Point_equals",
        ]
    );
    assert_eq!(unit.source.matches("#include <stdint.h>").count(), 1);
    assert_eq!(unit.source.matches("struct Point {").count(), 1);
}

#[test]
fn test_layout_and_component() {
    let (model, ty) = point();
    let unit = emit(&model, ty, SynthConfig::default());
    assert!(unit.source.contains("    synth_object_t header;\n    int64_t x;\n    synth_string_t* label;\n"));
    assert!(unit.source.contains("Point* Point_new(int64_t x, synth_string_t* label);"));
    assert!(unit
        .source
        .contains("int64_t Point_component1(const Point* self) {\n    return self->x;\n}"));
    assert!(unit
        .source
        .contains("synth_string_t* Point_component2(const Point* self) {\n    return self->label;\n}"));
}

#[test]
fn test_copy_uses_default_mask() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Tagged");
    b.primary_constructor(
        ty,
        &[
            ParamSpec::val("id", RawKind::Int),
            ParamSpec::plain("seed", RawKind::Int),
        ],
    );
    b.derive_structural_slots(ty);
    let model = b.finish();
    let unit = emit(&model, ty, SynthConfig::default());

    let expected = "\
Tagged* Tagged_copy(const Tagged* self, const uint64_t* mask, int64_t id, int64_t seed) {
    if (!(mask[0] & (UINT64_C(1) << 0))) id = self->id;
    return Tagged_new(id, seed);
}";
    assert!(unit.source.contains(expected), "{}", unit.source);
}

#[test]
fn test_copy_mask_spans_words() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Wide");
    let names: Vec<String> = (0..66).map(|i| format!("p{i}")).collect();
    let specs: Vec<ParamSpec<'_>> = names
        .iter()
        .map(|n| ParamSpec::val(n, RawKind::Int))
        .collect();
    b.primary_constructor(ty, &specs);
    b.derive_structural_slots(ty);
    let model = b.finish();
    let unit = emit(&model, ty, SynthConfig::default());

    assert!(unit
        .source
        .contains("    if (!(mask[0] & (UINT64_C(1) << 63))) p63 = self->p63;\n"));
    assert!(unit
        .source
        .contains("    if (!(mask[1] & (UINT64_C(1) << 0))) p64 = self->p64;\n"));
    assert!(unit
        .source
        .contains("    if (!(mask[1] & (UINT64_C(1) << 1))) p65 = self->p65;\n"));
    assert!(!unit.source.contains("<< 64"));
    assert!(!unit.source.contains("<< 65"));
}

#[test]
fn test_field_names_are_distinct() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Msg");
    b.primary_constructor(
        ty,
        &[
            ParamSpec::val("header", RawKind::Int),
            ParamSpec::val("a-b", RawKind::Int),
            ParamSpec::val("a_b", RawKind::Int),
            ParamSpec::val("mask", RawKind::Int),
        ],
    );
    b.derive_structural_slots(ty);
    let model = b.finish();
    let unit = emit(&model, ty, SynthConfig::default());

    assert!(unit.source.contains(
        "    synth_object_t header;\n    int64_t header_;\n    int64_t a_b;\n    int64_t a_b_;\n    int64_t mask;\n"
    ), "{}", unit.source);
    assert_eq!(unit.source.matches(" header;").count(), 1);
    assert!(unit
        .source
        .contains("Msg* Msg_new(int64_t header, int64_t a_b, int64_t a_b_, int64_t mask_);"));
    assert!(unit
        .source
        .contains("int64_t Msg_component1(const Msg* self) {\n    return self->header_;\n}"));
    assert!(unit
        .source
        .contains("    if (!(mask[0] & (UINT64_C(1) << 1))) a_b = self->a_b;\n"));
    assert!(unit
        .source
        .contains("    if (!(mask[0] & (UINT64_C(1) << 2))) a_b_ = self->a_b_;\n"));
    assert!(unit
        .source
        .contains("    if (!(mask[0] & (UINT64_C(1) << 3))) mask_ = self->mask;\n"));
    assert!(unit.source.contains("if (!(self->header_ == that->header_)) return false;"));
}

#[test]
fn test_to_string_hash_equals_bodies() {
    let (model, ty) = point();
    let unit = emit(&model, ty, SynthConfig::default());

    let to_string = "\
    synth_sb_append_cstr(sb, \"Point(x=\");
    synth_sb_append_int(sb, self->x);
    synth_sb_append_cstr(sb, \", label=\");
    synth_sb_append_str(sb, self->label);
    synth_sb_append_cstr(sb, \")\");
    return synth_sb_finish(sb);";
    assert!(unit.source.contains(to_string), "{}", unit.source);

    let hash = "\
    int32_t result = 0;
    result = (int32_t)((uint32_t)result * 31u + (uint32_t)synth_hash_int(self->x));
    result = (int32_t)((uint32_t)result * 31u + (uint32_t)synth_hash_str(self->label));
    return result;";
    assert!(unit.source.contains(hash), "{}", unit.source);

    let equals = "\
bool Point_equals(const Point* self, synth_object_t* other) {
    if ((const synth_object_t*)self == (const synth_object_t*)other) return true;
    if (other == NULL || ((const synth_object_t*)other)->type != &Point_type_info) return false;
    const Point* that = (const Point*)other;
    if (!(self->x == that->x)) return false;
    if (!(synth_string_eq(self->label, that->label))) return false;
    return true;
}";
    assert!(unit.source.contains(equals), "{}", unit.source);
}

#[test]
fn test_explicit_member_not_emitted() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Point");
    b.primary_constructor(ty, &[ParamSpec::val("x", RawKind::Int)]);
    b.derive_structural_slots(ty);
    b.declare_member(ty, "hash_code", &[], RawKind::Int);
    let model = b.finish();
    let unit = emit(&model, ty, SynthConfig::default());
    assert!(!unit.functions.iter().any(|f| f == "Point_hash_code"));
    assert!(unit.functions.iter().any(|f| f == "Point_equals"));
}

#[test]
fn test_zero_properties_with_synthesize_policy() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Marker");
    b.primary_constructor(ty, &[]);
    b.derive_structural_slots(ty);
    let model = b.finish();

    let skipped = emit(&model, ty, SynthConfig::default());
    assert_eq!(skipped.functions, vec!["Marker_copy"]);
    assert!(skipped.source.contains("Marker* Marker_new(void);"));

    let config = SynthConfig::default().with_empty_properties(EmptyPropertyPolicy::Synthesize);
    let unit = emit(&model, ty, config);
    assert!(unit.source.contains("synth_sb_append_cstr(sb, \"Marker()\");"));
    assert!(!unit.source.contains("const Marker* that"));
}

#[test]
fn test_nothing_synthesized_leaves_empty_unit() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Opaque");
    let model = b.finish();
    let unit = emit(&model, ty, SynthConfig::default());
    assert!(unit.source.is_empty());
    assert!(unit.functions.is_empty());
}

#[test]
fn test_named_and_any_kinds() {
    let mut b = ModelBuilder::new();
    let inner = b.declare_type("Inner");
    let ty = b.declare_type("Outer");
    b.primary_constructor(
        ty,
        &[
            ParamSpec::val("inner", RawKind::Named(inner)),
            ParamSpec::val("extra", RawKind::Any),
        ],
    );
    b.derive_structural_slots(ty);
    let model = b.finish();
    let unit = emit(&model, ty, SynthConfig::default());

    assert!(unit.source.contains("    Inner* inner;\n"));
    assert!(unit.source.contains("synth_sb_append_object(sb, (const synth_object_t*)self->inner);"));
    assert!(unit
        .source
        .contains("synth_object_hash((const synth_object_t*)self->extra)"));
    assert!(unit.source.contains(
        "synth_object_equals((const synth_object_t*)self->inner, (const synth_object_t*)that->inner)"
    ));
}
