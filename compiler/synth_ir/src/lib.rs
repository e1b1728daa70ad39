//! Synth IR - Declaration Model Types
//!
//! This crate contains the data model shared by the structural member
//! synthesis pipeline:
//! - Names for interned identifiers
//! - Typed indices for declared types, constructor parameters and members
//! - Raw kinds and member signatures (erased parameter/return shapes)
//! - Constructor parameters and the structural properties derived from them
//! - Candidate members and their declaration kinds
//! - Slot keys for precomputed synthetic member entitlements
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → `Name(u32)`, declarations → `TypeId(u32)`
//! - **Immutable After Resolution**: nothing here is mutated once the
//!   semantic model has been built; synthesis only reads it.

mod decl;
mod ids;
mod interner;
mod kind;
mod name;
mod signature;

pub use decl::{
    CandidateMember, DeclarationKind, ParamBinding, Parameter, SlotKey, StructuralProperty,
};
pub use ids::{MemberId, ParamId, TypeId};
pub use interner::{InternError, StringInterner};
pub use kind::RawKind;
pub use name::Name;
pub use signature::{MemberSignature, SigParam};
