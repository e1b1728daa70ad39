//! Backend generation protocol.
//!
//! A target backend plugs into synthesis by implementing the five hooks of
//! [`SynthesisBackend`]. The orchestrator decides whether and with what data
//! each hook runs; the backend decides how the member body looks. A backend
//! value is the per-type output unit: it is created for one type, receives
//! that type's hook calls, and is owned by the worker synthesizing it.

use synth_ir::{MemberSignature, Parameter, StructuralProperty, TypeId};

use crate::{ContractMember, ResolvedType};

/// Emission hooks for one target.
///
/// Every hook receives the [`ResolvedType`] being synthesized so a backend
/// can reach the type name, the full constructor and the property list
/// without querying the semantic model again.
pub trait SynthesisBackend {
    /// Emit a no-argument accessor returning `parameter`'s value.
    fn generate_component_accessor(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        parameter: &Parameter,
    );

    /// Emit a function with one parameter per constructor parameter, each
    /// flagged one defaulting to the receiver's property, that constructs a
    /// new instance.
    fn generate_copy(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        constructor_parameters: &[Parameter],
    );

    /// Emit `"<Type>(<p1>=<v1>, <p2>=<v2>, ...)"` in property order.
    fn generate_string_representation(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    );

    /// Emit an order-sensitive combination of property hashes
    /// (`hash = hash * 31 + property_hash`, seeded with 0).
    fn generate_hash(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    );

    /// Emit equality: same reference is equal, a different runtime type is
    /// not, otherwise every property compares equal pairwise in order.
    fn generate_equality(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    );
}

impl<B: SynthesisBackend + ?Sized> SynthesisBackend for &mut B {
    fn generate_component_accessor(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        parameter: &Parameter,
    ) {
        (**self).generate_component_accessor(owner, signature, parameter);
    }

    fn generate_copy(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        constructor_parameters: &[Parameter],
    ) {
        (**self).generate_copy(owner, signature, constructor_parameters);
    }

    fn generate_string_representation(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        (**self).generate_string_representation(owner, signature, properties);
    }

    fn generate_hash(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        (**self).generate_hash(owner, signature, properties);
    }

    fn generate_equality(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        (**self).generate_equality(owner, signature, properties);
    }
}

/// Which hook a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SynthesizedMember {
    ComponentAccessor,
    Copy,
    StringRepresentation,
    Hash,
    Equality,
}

impl From<ContractMember> for SynthesizedMember {
    fn from(member: ContractMember) -> Self {
        match member {
            ContractMember::ToString => SynthesizedMember::StringRepresentation,
            ContractMember::HashCode => SynthesizedMember::Hash,
            ContractMember::Equals => SynthesizedMember::Equality,
        }
    }
}

/// The data one hook call carries, as an owned value.
///
/// `parameters` holds the accessed parameter for component accessors and the
/// full constructor for copy; `properties` holds the property list for the
/// contract members. Unused fields are empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub owner: TypeId,
    pub member: SynthesizedMember,
    pub signature: MemberSignature,
    pub parameters: Vec<Parameter>,
    pub properties: Vec<StructuralProperty>,
}
