//! Builder for [`SemanticModel`], including override resolution.
//!
//! Types must be declared after their supertypes, so type ids double as a
//! topological order of the hierarchy and `finish()` can resolve overrides
//! in a single forward pass.

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};
use synth_ir::{
    CandidateMember, DeclarationKind, MemberId, MemberSignature, Name, ParamBinding, ParamId,
    Parameter, RawKind, SigParam, SlotKey, StringInterner, StructuralProperty, TypeId,
};
use tracing::{debug, trace};

use crate::model::{SemanticModel, TypeEntry};

/// A primary-constructor parameter to declare.
#[derive(Copy, Clone, Debug)]
pub struct ParamSpec<'s> {
    pub name: &'s str,
    pub kind: RawKind,
    pub binding: ParamBinding,
}

impl<'s> ParamSpec<'s> {
    /// Plain constructor argument.
    pub fn plain(name: &'s str, kind: RawKind) -> Self {
        ParamSpec {
            name,
            kind,
            binding: ParamBinding::Plain,
        }
    }

    /// Immutable property parameter.
    pub fn val(name: &'s str, kind: RawKind) -> Self {
        ParamSpec {
            name,
            kind,
            binding: ParamBinding::Val,
        }
    }

    /// Mutable property parameter.
    pub fn var(name: &'s str, kind: RawKind) -> Self {
        ParamSpec {
            name,
            kind,
            binding: ParamBinding::Var,
        }
    }
}

/// Inherited members sharing one name and parameter shape.
struct InheritedGroup {
    name: Name,
    params: SmallVec<[RawKind; 2]>,
    ancestors: SmallVec<[MemberId; 2]>,
}

/// Incrementally assembles a [`SemanticModel`].
pub struct ModelBuilder {
    interner: StringInterner,
    root: TypeId,
    types: Vec<TypeEntry>,
    members: Vec<CandidateMember>,
    overrides: Vec<SmallVec<[MemberId; 2]>>,
    params: Vec<Parameter>,
    properties: FxHashMap<ParamId, StructuralProperty>,
    slots: FxHashMap<SlotKey, MemberSignature>,
}

impl ModelBuilder {
    /// Create a builder with a fresh interner.
    pub fn new() -> Self {
        Self::with_interner(StringInterner::new())
    }

    /// Create a builder over an existing interner.
    ///
    /// The universal root type `any` is declared immediately, together with
    /// its three built-in contract members.
    pub fn with_interner(interner: StringInterner) -> Self {
        let mut builder = ModelBuilder {
            root: TypeId::new(0),
            interner,
            types: Vec::new(),
            members: Vec::new(),
            overrides: Vec::new(),
            params: Vec::new(),
            properties: FxHashMap::default(),
            slots: FxHashMap::default(),
        };
        let name = builder.interner.intern("any");
        builder.root = builder.push_type(name, SmallVec::new());

        let root = builder.root;
        builder.declare_member(root, "to_string", &[], RawKind::Str);
        builder.declare_member(root, "hash_code", &[], RawKind::Int);
        builder.declare_member(root, "equals", &[("other", RawKind::Any)], RawKind::Bool);
        builder
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// The universal root type.
    pub fn root(&self) -> TypeId {
        self.root
    }

    /// Declare a type extending only the universal root.
    pub fn declare_type(&mut self, name: &str) -> TypeId {
        self.declare_subtype(name, &[])
    }

    /// Declare a type with explicit supertypes, in order.
    ///
    /// An empty list means the universal root.
    pub fn declare_subtype(&mut self, name: &str, supertypes: &[TypeId]) -> TypeId {
        let supertypes = if supertypes.is_empty() {
            smallvec![self.root]
        } else {
            SmallVec::from_slice(supertypes)
        };
        let name = self.interner.intern(name);
        self.push_type(name, supertypes)
    }

    /// Declare an explicit member on `owner`.
    pub fn declare_member(
        &mut self,
        owner: TypeId,
        name: &str,
        params: &[(&str, RawKind)],
        ret: RawKind,
    ) -> MemberId {
        self.declare_member_of_kind(owner, DeclarationKind::Declaration, name, params, ret)
    }

    /// Declare a member with a specific declaration kind.
    pub fn declare_member_of_kind(
        &mut self,
        owner: TypeId,
        kind: DeclarationKind,
        name: &str,
        params: &[(&str, RawKind)],
        ret: RawKind,
    ) -> MemberId {
        let params: SmallVec<[SigParam; 2]> = params
            .iter()
            .map(|&(name, kind)| SigParam::new(self.interner.intern(name), kind))
            .collect();
        let signature = MemberSignature::new(self.interner.intern(name), params, ret);
        self.push_member(owner, kind, signature)
    }

    /// Declare (or replace) the primary constructor of `ty`.
    ///
    /// Flagged parameters are recorded as structural properties.
    pub fn primary_constructor(&mut self, ty: TypeId, specs: &[ParamSpec<'_>]) -> Vec<ParamId> {
        let mut parameters = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            let id = ParamId::new(u32::try_from(self.params.len()).unwrap_or(u32::MAX));
            let parameter = Parameter {
                id,
                owner: ty,
                name: self.interner.intern(spec.name),
                kind: spec.kind,
                index,
                binding: spec.binding,
            };
            if let Some(property) = StructuralProperty::from_parameter(&parameter) {
                self.properties.insert(id, property);
            }
            self.params.push(parameter.clone());
            parameters.push(parameter);
        }

        let ids = parameters.iter().map(|p| p.id).collect();
        if let Some(entry) = self.types.get_mut(ty.index()) {
            entry.constructor = Some(parameters);
        }
        ids
    }

    /// Record a component slot for `param`, named `component<N>` with N its
    /// 1-based constructor position.
    ///
    /// Returns `false` if the parameter is unknown.
    pub fn add_component_slot(&mut self, param: ParamId) -> bool {
        let Some(parameter) = self.params.get(param.index()) else {
            return false;
        };
        let name = self.interner.intern(&component_name(parameter.index));
        let signature = MemberSignature::nullary(name, parameter.kind);
        self.slots.insert(SlotKey::Component(param), signature);
        true
    }

    /// Record a copy slot for `ty` mirroring its full constructor.
    ///
    /// Returns `false` if the type has no primary constructor.
    pub fn add_copy_slot(&mut self, ty: TypeId) -> bool {
        let Some(constructor) = self
            .types
            .get(ty.index())
            .and_then(|e| e.constructor.as_ref())
        else {
            return false;
        };
        let params: SmallVec<[SigParam; 2]> = constructor
            .iter()
            .map(|p| SigParam::new(p.name, p.kind))
            .collect();
        let name = self.interner.intern("copy");
        self.slots.insert(
            SlotKey::Copy(ty),
            MemberSignature::new(name, params, RawKind::Named(ty)),
        );
        true
    }

    /// Record an arbitrary slot signature.
    pub fn insert_slot(&mut self, key: SlotKey, signature: MemberSignature) {
        self.slots.insert(key, signature);
    }

    /// Record the slots semantic resolution grants a structural type: one
    /// component slot per flagged property and a copy slot.
    ///
    /// A slot is withheld when `ty` explicitly declares a conflicting member
    /// (same name; for components also no parameters).
    pub fn derive_structural_slots(&mut self, ty: TypeId) {
        let Some(constructor) = self
            .types
            .get(ty.index())
            .and_then(|e| e.constructor.clone())
        else {
            return;
        };

        for param in constructor.iter().filter(|p| p.binding.is_property()) {
            let name = component_name(param.index);
            if self.declares_explicitly(ty, &name, |sig| sig.arity() == 0) {
                trace!(component = %name, "explicit component declaration, slot withheld");
                continue;
            }
            self.add_component_slot(param.id);
        }

        if self.declares_explicitly(ty, "copy", |_| true) {
            trace!("explicit copy declaration, slot withheld");
        } else {
            self.add_copy_slot(ty);
        }
    }

    /// Freeze the model, resolving overrides.
    ///
    /// For each type, in declaration order: an own member matching an
    /// inherited member's name and parameter kinds gets override edges to
    /// every such inherited member; inherited members not redeclared are
    /// fabricated as [`DeclarationKind::FakeOverride`] members of the type.
    pub fn finish(mut self) -> SemanticModel {
        let mut fabricated = 0usize;

        for index in 0..self.types.len() {
            let Ok(raw) = u32::try_from(index) else {
                break;
            };
            let owner = TypeId::new(raw);

            for group in self.inherited_groups(index) {
                let own = self.types[index].members.iter().copied().find(|&id| {
                    let sig = &self.members[id.index()].signature;
                    sig.name == group.name && sig.same_params(&group.params)
                });

                let member = match own {
                    Some(id) => id,
                    None => {
                        let Some(first) = group.ancestors.first() else {
                            continue;
                        };
                        let signature = self.members[first.index()].signature.clone();
                        fabricated += 1;
                        self.push_member(owner, DeclarationKind::FakeOverride, signature)
                    }
                };
                self.overrides[member.index()].extend(group.ancestors);
            }
        }

        debug!(
            types = self.types.len(),
            members = self.members.len(),
            fabricated,
            slots = self.slots.len(),
            "semantic model finished"
        );

        SemanticModel {
            interner: self.interner,
            root: self.root,
            types: self.types,
            members: self.members,
            overrides: self.overrides,
            properties: self.properties,
            slots: self.slots,
        }
    }

    fn push_type(&mut self, name: Name, supertypes: SmallVec<[TypeId; 2]>) -> TypeId {
        let id = TypeId::new(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.types.push(TypeEntry {
            name,
            supertypes,
            constructor: None,
            members: Vec::new(),
        });
        id
    }

    fn push_member(
        &mut self,
        owner: TypeId,
        kind: DeclarationKind,
        signature: MemberSignature,
    ) -> MemberId {
        let id = MemberId::new(u32::try_from(self.members.len()).unwrap_or(u32::MAX));
        self.members.push(CandidateMember {
            id,
            owner,
            kind,
            signature,
        });
        self.overrides.push(SmallVec::new());
        if let Some(entry) = self.types.get_mut(owner.index()) {
            entry.members.push(id);
        }
        id
    }

    fn declares_explicitly(
        &self,
        ty: TypeId,
        name: &str,
        shape: impl Fn(&MemberSignature) -> bool,
    ) -> bool {
        let Some(name) = self.interner.get(name) else {
            return false;
        };
        self.types.get(ty.index()).is_some_and(|entry| {
            entry.members.iter().any(|id| {
                let member = &self.members[id.index()];
                member.kind.is_explicit() && member.signature.name == name && shape(&member.signature)
            })
        })
    }

    fn inherited_groups(&self, index: usize) -> Vec<InheritedGroup> {
        let mut groups: Vec<InheritedGroup> = Vec::new();

        for sup in &self.types[index].supertypes {
            let Some(entry) = self.types.get(sup.index()) else {
                continue;
            };
            for &id in &entry.members {
                let sig = &self.members[id.index()].signature;
                let kinds: SmallVec<[RawKind; 2]> = sig.param_kinds().collect();
                match groups
                    .iter_mut()
                    .find(|g| g.name == sig.name && g.params == kinds)
                {
                    Some(group) => {
                        if !group.ancestors.contains(&id) {
                            group.ancestors.push(id);
                        }
                    }
                    None => groups.push(InheritedGroup {
                        name: sig.name,
                        params: kinds,
                        ancestors: smallvec![id],
                    }),
                }
            }
        }

        groups
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn component_name(index: usize) -> String {
    format!("component{}", index + 1)
}
