//! Eager, validated snapshot of everything synthesis reads for one type.
//!
//! All binding-service queries for a type happen here, up front, so the
//! orchestrator works on plain values and a contract violation is caught
//! before any backend hook runs.

use synth_ir::{
    CandidateMember, MemberSignature, Name, ParamId, Parameter, SlotKey, StructuralProperty,
    TypeId,
};
use synth_sema::BindingService;

use crate::{ContractMember, ContractViolation};

/// A constructor parameter holding a component slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentSlot {
    pub parameter: Parameter,
    pub signature: MemberSignature,
}

/// Immutable synthesis inputs for one declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedType {
    pub ty: TypeId,
    pub name: Name,
    /// Primary-constructor parameters; `None` without a primary constructor.
    pub constructor: Option<Vec<Parameter>>,
    /// Flagged parameters as properties, in declaration order.
    pub properties: Vec<StructuralProperty>,
    /// Component slots, in constructor order.
    pub components: Vec<ComponentSlot>,
    /// Copy slot signature; only looked up when a constructor exists.
    pub copy: Option<MemberSignature>,
    /// Existing contract members, indexed by [`ContractMember::index`].
    contract: [Option<CandidateMember>; 3],
}

impl ResolvedType {
    /// Query `bindings` for everything synthesis of `ty` needs.
    pub fn resolve<S: BindingService + ?Sized>(
        bindings: &S,
        ty: TypeId,
    ) -> Result<Self, ContractViolation> {
        let constructor = bindings
            .primary_constructor_parameters(ty)
            .map(<[Parameter]>::to_vec);

        let mut properties = Vec::new();
        let mut components = Vec::new();
        let mut copy = None;

        if let Some(params) = &constructor {
            for (actual, param) in params.iter().enumerate() {
                check_parameter(ty, param, actual)?;

                let property = bindings.structural_property_of(param.id);
                let is_property = property.is_some();
                if let Some(property) = property {
                    if !describes(&property, param) {
                        return Err(ContractViolation::PropertyMismatch { ty, param: param.id });
                    }
                    properties.push(property);
                }

                if let Some(signature) = bindings.slot(SlotKey::Component(param.id)) {
                    if !is_property {
                        return Err(ContractViolation::ComponentOnPlainParameter {
                            ty,
                            param: param.id,
                        });
                    }
                    if signature.arity() != 0 {
                        return Err(ContractViolation::ComponentArity {
                            ty,
                            param: param.id,
                            arity: signature.arity(),
                        });
                    }
                    components.push(ComponentSlot {
                        parameter: param.clone(),
                        signature: signature.clone(),
                    });
                }
            }

            if let Some(signature) = bindings.slot(SlotKey::Copy(ty)) {
                if signature.arity() != params.len() {
                    return Err(ContractViolation::CopyArity {
                        ty,
                        arity: signature.arity(),
                        expected: params.len(),
                    });
                }
                copy = Some(signature.clone());
            }
        }

        let interner = bindings.interner();
        let mut contract: [Option<CandidateMember>; 3] = [None, None, None];
        for member in ContractMember::ALL {
            let name = interner.intern(member.method_name());
            let found = bindings.declared_member_by_raw_signature(
                ty,
                name,
                member.return_kind(),
                member.param_kinds(),
            );
            if let Some(candidate) = found {
                if candidate.owner != ty {
                    return Err(ContractViolation::ForeignCandidate {
                        ty,
                        member: candidate.id,
                        owner: candidate.owner,
                    });
                }
                contract[member.index()] = Some(candidate.clone());
            }
        }

        Ok(ResolvedType {
            ty,
            name: bindings.type_name(ty),
            constructor,
            properties,
            components,
            copy,
            contract,
        })
    }

    /// The existing member matching a contract member's raw signature.
    pub fn candidate(&self, member: ContractMember) -> Option<&CandidateMember> {
        self.contract[member.index()].as_ref()
    }

    /// The structural property backed by `param`, if flagged.
    pub fn property_of(&self, param: ParamId) -> Option<&StructuralProperty> {
        self.properties.iter().find(|p| p.param == param)
    }

    /// Constructor parameters, empty without a primary constructor.
    pub fn constructor_parameters(&self) -> &[Parameter] {
        self.constructor.as_deref().unwrap_or(&[])
    }
}

fn check_parameter(ty: TypeId, param: &Parameter, actual: usize) -> Result<(), ContractViolation> {
    if param.owner != ty {
        return Err(ContractViolation::ForeignParameter {
            ty,
            param: param.id,
            owner: param.owner,
        });
    }
    if param.index != actual {
        return Err(ContractViolation::ParameterOutOfOrder {
            ty,
            param: param.id,
            reported: param.index,
            actual,
        });
    }
    Ok(())
}

fn describes(property: &StructuralProperty, param: &Parameter) -> bool {
    property.param == param.id && property.position == param.index && property.name == param.name
}

#[cfg(test)]
mod tests;
