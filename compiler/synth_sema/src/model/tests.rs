use synth_ir::DeclarationKind;

use super::*;
use crate::{ModelBuilder, ParamSpec};

#[test]
fn raw_lookup_misses_on_shape() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Point");
    // Overload with a different parameter shape; not the contract member.
    b.declare_member(ty, "equals", &[("other", RawKind::Int)], RawKind::Bool);
    let model = b.finish();
    let equals = model.interner().intern("equals");

    let by_any = model.declared_member_by_raw_signature(ty, equals, RawKind::Bool, &[RawKind::Any]);
    assert_eq!(by_any.map(|m| m.kind), Some(DeclarationKind::FakeOverride));

    let by_int = model.declared_member_by_raw_signature(ty, equals, RawKind::Bool, &[RawKind::Int]);
    assert_eq!(by_int.map(|m| m.kind), Some(DeclarationKind::Declaration));

    let wrong_ret = model.declared_member_by_raw_signature(ty, equals, RawKind::Int, &[RawKind::Any]);
    assert!(wrong_ret.is_none());
}

#[test]
fn own_declaration_shadows_inherited() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Point");
    b.declare_member(ty, "hash_code", &[], RawKind::Int);
    let model = b.finish();
    let name = model.interner().intern("hash_code");

    let found = model.declared_member_by_raw_signature(ty, name, RawKind::Int, &[]);
    assert_eq!(found.map(|m| (m.owner, m.kind)), Some((ty, DeclarationKind::Declaration)));
    // No fake override fabricated next to the declaration.
    let count = model.members_of(ty).filter(|m| m.signature.name == name).count();
    assert_eq!(count, 1);
}

#[test]
fn unknown_ids_are_absent() {
    let model = ModelBuilder::new().finish();
    let ghost = TypeId::new(42);
    assert!(model.primary_constructor_parameters(ghost).is_none());
    assert_eq!(model.type_name(ghost), Name::EMPTY);
    assert!(model.member(MemberId::new(999)).is_none());
    assert!(model.direct_overrides(MemberId::new(999)).is_empty());
    assert!(model.structural_property_of(ParamId::new(7)).is_none());
}

#[test]
fn property_lookup_goes_through_parameter() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Point");
    let ids = b.primary_constructor(ty, &[ParamSpec::val("x", RawKind::Int)]);
    let model = b.finish();

    let property = model.structural_property_of(ids[0]);
    assert_eq!(property.map(|p| model.interner().lookup(p.name)), Some("x"));
    assert_eq!(model.interner().lookup(model.type_name(ty)), "Point");
}
