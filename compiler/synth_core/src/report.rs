//! Summary of one type's synthesis.

use synth_ir::{Name, TypeId};

use crate::{ContractMember, OverrideVerdict};

/// What happened to one contract member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractOutcome {
    /// The generation hook ran.
    Generated,
    /// Not attempted: the type has no structural properties.
    NoProperties,
    /// No member with the contract's raw signature exists on the type.
    NoCandidate,
    /// The existing member must not be replaced.
    NonTrivial(OverrideVerdict),
}

/// Which hooks fired for a type, and why the others did not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesisReport {
    pub ty: TypeId,
    /// Names of the generated component accessors, in constructor order.
    pub components: Vec<Name>,
    pub copy: bool,
    contract: [ContractOutcome; 3],
}

impl SynthesisReport {
    pub(crate) fn new(ty: TypeId) -> Self {
        SynthesisReport {
            ty,
            components: Vec::new(),
            copy: false,
            contract: [ContractOutcome::NoProperties; 3],
        }
    }

    pub(crate) fn set(&mut self, member: ContractMember, outcome: ContractOutcome) {
        self.contract[member.index()] = outcome;
    }

    pub fn outcome(&self, member: ContractMember) -> ContractOutcome {
        self.contract[member.index()]
    }

    /// Total number of hook calls made.
    pub fn generated(&self) -> usize {
        let contract = self
            .contract
            .iter()
            .filter(|&&o| o == ContractOutcome::Generated)
            .count();
        self.components.len() + usize::from(self.copy) + contract
    }
}
