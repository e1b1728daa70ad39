//! Collaborator contract violations.
//!
//! Every ordinary anomaly (no constructor, no slot, no candidate, non-trivial
//! override, no properties) is a silent skip, not an error. What remains are
//! inputs the semantic phases should never produce; they indicate a compiler
//! defect upstream and are never shown to users as diagnostics.

use synth_ir::{MemberId, ParamId, TypeId};

/// A binding-service answer that breaks the synthesis preconditions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("constructor parameter {param:?} of {ty:?} belongs to {owner:?}")]
    ForeignParameter {
        ty: TypeId,
        param: ParamId,
        owner: TypeId,
    },

    #[error("constructor parameter {param:?} of {ty:?} reports index {reported}, found at {actual}")]
    ParameterOutOfOrder {
        ty: TypeId,
        param: ParamId,
        reported: usize,
        actual: usize,
    },

    #[error("structural property for {param:?} of {ty:?} does not describe that parameter")]
    PropertyMismatch { ty: TypeId, param: ParamId },

    #[error("component slot for {param:?} of {ty:?} sits on a parameter with no structural property")]
    ComponentOnPlainParameter { ty: TypeId, param: ParamId },

    #[error("component slot for {param:?} of {ty:?} takes {arity} parameters, expected none")]
    ComponentArity {
        ty: TypeId,
        param: ParamId,
        arity: usize,
    },

    #[error("copy slot of {ty:?} takes {arity} parameters, constructor has {expected}")]
    CopyArity {
        ty: TypeId,
        arity: usize,
        expected: usize,
    },

    #[error("member {member:?} found on {ty:?} is owned by {owner:?}")]
    ForeignCandidate {
        ty: TypeId,
        member: MemberId,
        owner: TypeId,
    },
}

/// Failure of a multi-type synthesis run.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error("failed to build synthesis thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
