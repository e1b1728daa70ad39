//! Immutable in-memory semantic model.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use synth_ir::{
    CandidateMember, MemberId, MemberSignature, Name, ParamId, Parameter, RawKind, SlotKey,
    StringInterner, StructuralProperty, TypeId,
};

use crate::{BindingService, OverrideGraph};

/// Per-type record.
#[derive(Clone, Debug)]
pub(crate) struct TypeEntry {
    pub(crate) name: Name,
    pub(crate) supertypes: SmallVec<[TypeId; 2]>,
    pub(crate) constructor: Option<Vec<Parameter>>,
    /// Member scope: own declarations first, then fabricated overrides.
    pub(crate) members: Vec<MemberId>,
}

/// Resolved declarations, override edges and synthetic slots.
///
/// Built once by [`ModelBuilder`](crate::ModelBuilder) and never mutated
/// afterwards; every query is a table lookup.
pub struct SemanticModel {
    pub(crate) interner: StringInterner,
    pub(crate) root: TypeId,
    pub(crate) types: Vec<TypeEntry>,
    pub(crate) members: Vec<CandidateMember>,
    /// Direct override edges, indexed by `MemberId`.
    pub(crate) overrides: Vec<SmallVec<[MemberId; 2]>>,
    pub(crate) properties: FxHashMap<ParamId, StructuralProperty>,
    pub(crate) slots: FxHashMap<SlotKey, MemberSignature>,
}

impl SemanticModel {
    /// All declared types in declaration order, root first.
    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.types.len()).filter_map(|i| u32::try_from(i).ok().map(TypeId::new))
    }

    /// Declared types other than the universal root.
    pub fn user_types(&self) -> impl Iterator<Item = TypeId> + '_ {
        let root = self.root;
        self.type_ids().filter(move |&ty| ty != root)
    }

    /// Direct supertypes of `ty`.
    pub fn supertypes(&self, ty: TypeId) -> &[TypeId] {
        self.types
            .get(ty.index())
            .map(|entry| entry.supertypes.as_slice())
            .unwrap_or(&[])
    }

    /// Member scope of `ty`: declared members, then fabricated overrides.
    pub fn members_of(&self, ty: TypeId) -> impl Iterator<Item = &CandidateMember> + '_ {
        self.types
            .get(ty.index())
            .into_iter()
            .flat_map(|entry| entry.members.iter())
            .filter_map(|&id| self.members.get(id.index()))
    }

    /// Find a type by its declared name.
    pub fn type_named(&self, name: &str) -> Option<TypeId> {
        let name = self.interner.get(name)?;
        self.type_ids()
            .find(|ty| self.types.get(ty.index()).is_some_and(|e| e.name == name))
    }
}

impl BindingService for SemanticModel {
    fn interner(&self) -> &StringInterner {
        &self.interner
    }

    fn universal_root(&self) -> TypeId {
        self.root
    }

    fn type_name(&self, ty: TypeId) -> Name {
        self.types.get(ty.index()).map_or(Name::EMPTY, |e| e.name)
    }

    fn primary_constructor_parameters(&self, ty: TypeId) -> Option<&[Parameter]> {
        self.types.get(ty.index())?.constructor.as_deref()
    }

    fn structural_property_of(&self, param: ParamId) -> Option<StructuralProperty> {
        self.properties.get(&param).cloned()
    }

    fn slot(&self, key: SlotKey) -> Option<&MemberSignature> {
        self.slots.get(&key)
    }

    fn declared_member_by_raw_signature(
        &self,
        ty: TypeId,
        name: Name,
        ret: RawKind,
        params: &[RawKind],
    ) -> Option<&CandidateMember> {
        self.members_of(ty)
            .find(|member| member.signature.matches_raw(name, ret, params))
    }
}

impl OverrideGraph for SemanticModel {
    fn member(&self, id: MemberId) -> Option<&CandidateMember> {
        self.members.get(id.index())
    }

    fn direct_overrides(&self, id: MemberId) -> &[MemberId] {
        self.overrides
            .get(id.index())
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests;
