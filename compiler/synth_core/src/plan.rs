//! Recording backend.
//!
//! Emits nothing; keeps every hook call as a [`GenerationRequest`]. Used for
//! dry runs (what would each target be asked to generate?) and for comparing
//! runs in tests.

use synth_ir::{MemberSignature, Parameter, StructuralProperty};

use crate::{GenerationRequest, ResolvedType, SynthesisBackend, SynthesizedMember};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanBackend {
    requests: Vec<GenerationRequest>,
}

impl PlanBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded requests in call order.
    pub fn requests(&self) -> &[GenerationRequest] {
        &self.requests
    }

    /// Recorded requests targeting one hook.
    pub fn of(&self, member: SynthesizedMember) -> impl Iterator<Item = &GenerationRequest> + '_ {
        self.requests.iter().filter(move |r| r.member == member)
    }

    fn record(
        &mut self,
        owner: &ResolvedType,
        member: SynthesizedMember,
        signature: &MemberSignature,
        parameters: &[Parameter],
        properties: &[StructuralProperty],
    ) {
        self.requests.push(GenerationRequest {
            owner: owner.ty,
            member,
            signature: signature.clone(),
            parameters: parameters.to_vec(),
            properties: properties.to_vec(),
        });
    }
}

impl SynthesisBackend for PlanBackend {
    fn generate_component_accessor(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        parameter: &Parameter,
    ) {
        self.record(
            owner,
            SynthesizedMember::ComponentAccessor,
            signature,
            std::slice::from_ref(parameter),
            &[],
        );
    }

    fn generate_copy(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        constructor_parameters: &[Parameter],
    ) {
        self.record(
            owner,
            SynthesizedMember::Copy,
            signature,
            constructor_parameters,
            &[],
        );
    }

    fn generate_string_representation(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        self.record(
            owner,
            SynthesizedMember::StringRepresentation,
            signature,
            &[],
            properties,
        );
    }

    fn generate_hash(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        self.record(owner, SynthesizedMember::Hash, signature, &[], properties);
    }

    fn generate_equality(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        self.record(owner, SynthesizedMember::Equality, signature, &[], properties);
    }
}
