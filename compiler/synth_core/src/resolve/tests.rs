use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;
use synth_ir::{DeclarationKind, RawKind, StringInterner};
use synth_sema::{ModelBuilder, ParamSpec, SemanticModel};

use super::*;

fn point() -> (SemanticModel, TypeId, Vec<ParamId>) {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Point");
    let ids = b.primary_constructor(
        ty,
        &[
            ParamSpec::val("x", RawKind::Int),
            ParamSpec::plain("label", RawKind::Str),
            ParamSpec::val("y", RawKind::Int),
        ],
    );
    b.derive_structural_slots(ty);
    (b.finish(), ty, ids)
}

/// Binding service that overrides selected answers of a real model.
struct Tampered {
    model: SemanticModel,
    params: FxHashMap<TypeId, Vec<Parameter>>,
    properties: FxHashMap<ParamId, StructuralProperty>,
    candidate: Option<CandidateMember>,
}

impl Tampered {
    fn new(model: SemanticModel) -> Self {
        Tampered {
            model,
            params: FxHashMap::default(),
            properties: FxHashMap::default(),
            candidate: None,
        }
    }
}

impl BindingService for Tampered {
    fn interner(&self) -> &StringInterner {
        self.model.interner()
    }

    fn universal_root(&self) -> TypeId {
        self.model.universal_root()
    }

    fn type_name(&self, ty: TypeId) -> Name {
        self.model.type_name(ty)
    }

    fn primary_constructor_parameters(&self, ty: TypeId) -> Option<&[Parameter]> {
        match self.params.get(&ty) {
            Some(params) => Some(params.as_slice()),
            None => self.model.primary_constructor_parameters(ty),
        }
    }

    fn structural_property_of(&self, param: ParamId) -> Option<StructuralProperty> {
        self.properties
            .get(&param)
            .cloned()
            .or_else(|| self.model.structural_property_of(param))
    }

    fn slot(&self, key: SlotKey) -> Option<&MemberSignature> {
        self.model.slot(key)
    }

    fn declared_member_by_raw_signature(
        &self,
        ty: TypeId,
        name: Name,
        ret: RawKind,
        params: &[RawKind],
    ) -> Option<&CandidateMember> {
        self.candidate
            .as_ref()
            .or_else(|| self.model.declared_member_by_raw_signature(ty, name, ret, params))
    }
}

#[test]
fn resolves_structural_type() {
    let (model, ty, ids) = point();
    let resolved = ResolvedType::resolve(&model, ty).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(model.interner().lookup(resolved.name), "Point");
    assert_eq!(resolved.constructor_parameters().len(), 3);

    let property_params: Vec<ParamId> = resolved.properties.iter().map(|p| p.param).collect();
    assert_eq!(property_params, vec![ids[0], ids[2]]);

    let component_params: Vec<ParamId> =
        resolved.components.iter().map(|c| c.parameter.id).collect();
    assert_eq!(component_params, vec![ids[0], ids[2]]);
    assert_eq!(resolved.copy.as_ref().map(MemberSignature::arity), Some(3));

    for member in ContractMember::ALL {
        let candidate = resolved.candidate(member);
        assert_eq!(candidate.map(|c| c.kind), Some(DeclarationKind::FakeOverride));
    }

    assert!(resolved.property_of(ids[1]).is_none());
    assert_eq!(resolved.property_of(ids[2]).map(|p| p.position), Some(2));
}

#[test]
fn no_constructor_skips_copy_lookup() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Light");
    let copy = b.interner().intern("copy");
    b.insert_slot(
        SlotKey::Copy(ty),
        MemberSignature::nullary(copy, RawKind::Named(ty)),
    );
    let model = b.finish();

    let resolved = ResolvedType::resolve(&model, ty).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(resolved.constructor, None);
    assert_eq!(resolved.copy, None);
    assert!(resolved.properties.is_empty());
    assert!(resolved.components.is_empty());
    assert!(resolved.constructor_parameters().is_empty());
}

#[test]
fn component_slots_may_be_partial() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Pair");
    let ids = b.primary_constructor(
        ty,
        &[
            ParamSpec::val("a", RawKind::Int),
            ParamSpec::val("b", RawKind::Int),
        ],
    );
    b.add_component_slot(ids[1]);
    let model = b.finish();

    let resolved = ResolvedType::resolve(&model, ty).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(resolved.components.len(), 1);
    assert_eq!(resolved.components[0].parameter.id, ids[1]);
    assert_eq!(resolved.properties.len(), 2);
    assert_eq!(resolved.copy, None);
}

#[test]
fn component_on_plain_parameter_is_a_violation() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Cfg");
    let ids = b.primary_constructor(
        ty,
        &[
            ParamSpec::plain("seed", RawKind::Int),
            ParamSpec::val("x", RawKind::Int),
        ],
    );
    b.add_component_slot(ids[0]);
    let model = b.finish();

    assert_eq!(
        ResolvedType::resolve(&model, ty),
        Err(ContractViolation::ComponentOnPlainParameter { ty, param: ids[0] })
    );
}

#[test]
fn component_with_parameters_is_a_violation() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Odd");
    let ids = b.primary_constructor(ty, &[ParamSpec::val("a", RawKind::Int)]);
    let name = b.interner().intern("component1");
    let other = b.interner().intern("other");
    b.insert_slot(
        SlotKey::Component(ids[0]),
        MemberSignature::new(name, [synth_ir::SigParam::new(other, RawKind::Int)], RawKind::Int),
    );
    let model = b.finish();

    assert_eq!(
        ResolvedType::resolve(&model, ty),
        Err(ContractViolation::ComponentArity {
            ty,
            param: ids[0],
            arity: 1,
        })
    );
}

#[test]
fn copy_must_mirror_constructor() {
    let mut b = ModelBuilder::new();
    let ty = b.declare_type("Odd");
    b.primary_constructor(ty, &[ParamSpec::val("a", RawKind::Int)]);
    let copy = b.interner().intern("copy");
    b.insert_slot(SlotKey::Copy(ty), MemberSignature::nullary(copy, RawKind::Named(ty)));
    let model = b.finish();

    assert_eq!(
        ResolvedType::resolve(&model, ty),
        Err(ContractViolation::CopyArity {
            ty,
            arity: 0,
            expected: 1,
        })
    );
}

#[test]
fn foreign_parameter_is_a_violation() {
    let mut b = ModelBuilder::new();
    let owner = b.declare_type("Owner");
    b.primary_constructor(owner, &[ParamSpec::val("a", RawKind::Int)]);
    let thief = b.declare_type("Thief");
    let model = b.finish();

    let stolen = model
        .primary_constructor_parameters(owner)
        .map(<[Parameter]>::to_vec)
        .unwrap_or_default();
    let param = stolen[0].id;
    let mut tampered = Tampered::new(model);
    tampered.params.insert(thief, stolen);

    assert_eq!(
        ResolvedType::resolve(&tampered, thief),
        Err(ContractViolation::ForeignParameter {
            ty: thief,
            param,
            owner,
        })
    );
}

#[test]
fn misnumbered_parameter_is_a_violation() {
    let (model, ty, ids) = point();
    let mut params = model
        .primary_constructor_parameters(ty)
        .map(<[Parameter]>::to_vec)
        .unwrap_or_default();
    params.swap(0, 2);
    let mut tampered = Tampered::new(model);
    tampered.params.insert(ty, params);

    assert_eq!(
        ResolvedType::resolve(&tampered, ty),
        Err(ContractViolation::ParameterOutOfOrder {
            ty,
            param: ids[2],
            reported: 2,
            actual: 0,
        })
    );
}

#[test]
fn property_for_wrong_parameter_is_a_violation() {
    let (model, ty, ids) = point();
    let Some(y) = model.structural_property_of(ids[2]) else {
        panic!("y should be a property");
    };
    let mut tampered = Tampered::new(model);
    tampered.properties.insert(ids[0], y);

    assert_eq!(
        ResolvedType::resolve(&tampered, ty),
        Err(ContractViolation::PropertyMismatch { ty, param: ids[0] })
    );
}

#[test]
fn candidate_from_other_type_is_a_violation() {
    let (model, ty, _) = point();
    let root = model.universal_root();
    let Some(root_member) = model.members_of(root).next().cloned() else {
        panic!("root has members");
    };
    let member = root_member.id;
    let mut tampered = Tampered::new(model);
    tampered.candidate = Some(root_member);

    assert_eq!(
        ResolvedType::resolve(&tampered, ty),
        Err(ContractViolation::ForeignCandidate {
            ty,
            member,
            owner: root,
        })
    );
}
