//! Semantic binding query protocol.

use synth_ir::{
    CandidateMember, MemberSignature, Name, ParamId, Parameter, RawKind, SlotKey, StringInterner,
    StructuralProperty, TypeId,
};

/// Read-only view of the resolved binding database.
///
/// Every answer is fixed before synthesis starts, so implementations must be
/// safe to query from several workers at once (`Sync` is required by the
/// parallel driver, not by this trait).
pub trait BindingService {
    /// Interner all names in this service resolve against.
    fn interner(&self) -> &StringInterner;

    /// The universal root type every declared type extends.
    fn universal_root(&self) -> TypeId;

    /// Declared name of a type.
    fn type_name(&self, ty: TypeId) -> Name;

    /// Primary-constructor parameters in declaration order.
    ///
    /// `None` when the type has no primary constructor, which is distinct
    /// from a constructor with zero parameters.
    fn primary_constructor_parameters(&self, ty: TypeId) -> Option<&[Parameter]>;

    /// The structural property backed by a parameter, if it is flagged as one.
    fn structural_property_of(&self, param: ParamId) -> Option<StructuralProperty>;

    /// The resolved signature recorded for a synthetic slot, if legally derivable.
    fn slot(&self, key: SlotKey) -> Option<&MemberSignature>;

    /// Find a member in `ty`'s scope (declared or inherited) by raw signature.
    fn declared_member_by_raw_signature(
        &self,
        ty: TypeId,
        name: Name,
        ret: RawKind,
        params: &[RawKind],
    ) -> Option<&CandidateMember>;
}
