//! Declaration-side model: constructor parameters, structural properties,
//! candidate members and slot keys.

use crate::{MemberId, MemberSignature, Name, ParamId, RawKind, TypeId};

/// How a primary-constructor parameter is bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ParamBinding {
    /// Plain constructor argument, not stored as a property.
    #[default]
    Plain,
    /// Exposed as an immutable property.
    Val,
    /// Exposed as a mutable property.
    Var,
}

impl ParamBinding {
    /// Whether the parameter is exposed as a structural property.
    #[inline]
    pub fn is_property(self) -> bool {
        matches!(self, ParamBinding::Val | ParamBinding::Var)
    }
}

/// A primary-constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub id: ParamId,
    /// The type whose primary constructor declares this parameter.
    pub owner: TypeId,
    pub name: Name,
    pub kind: RawKind,
    /// 0-based position in the constructor's parameter list.
    pub index: usize,
    pub binding: ParamBinding,
}

/// A constructor parameter exposed as a field.
///
/// The ordered list of these is the single source of truth for accessor
/// order, copy defaults, string representation order and the hash/equality
/// field set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructuralProperty {
    pub name: Name,
    pub kind: RawKind,
    /// Position of the backing parameter in the constructor (0-based).
    pub position: usize,
    pub mutable: bool,
    /// The parameter this property is derived from.
    pub param: ParamId,
}

impl StructuralProperty {
    /// Derive the property view of a flagged parameter.
    ///
    /// Returns `None` for plain parameters.
    pub fn from_parameter(param: &Parameter) -> Option<Self> {
        if !param.binding.is_property() {
            return None;
        }
        Some(StructuralProperty {
            name: param.name,
            kind: param.kind,
            position: param.index,
            mutable: param.binding == ParamBinding::Var,
            param: param.id,
        })
    }
}

/// How a member came to exist on a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Written by the user on the owning type.
    Declaration,
    /// Inherited; fabricated by override resolution on the owning type.
    FakeOverride,
    /// Generated to forward to a delegate.
    Delegation,
    /// Generated by the compiler.
    Synthesized,
}

impl DeclarationKind {
    /// Whether a user wrote this member directly.
    #[inline]
    pub fn is_explicit(self) -> bool {
        self == DeclarationKind::Declaration
    }
}

/// A member signature already present on a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CandidateMember {
    pub id: MemberId,
    pub owner: TypeId,
    pub kind: DeclarationKind,
    pub signature: MemberSignature,
}

/// Key of a precomputed synthetic member entitlement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Component accessor for one constructor parameter.
    Component(ParamId),
    /// Field-wise copy for a whole type.
    Copy(TypeId),
}
