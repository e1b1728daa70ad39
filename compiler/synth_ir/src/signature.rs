//! Resolved member signatures.

use smallvec::SmallVec;

use crate::{Name, RawKind};

/// One parameter of a member signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SigParam {
    pub name: Name,
    pub kind: RawKind,
}

impl SigParam {
    pub fn new(name: Name, kind: RawKind) -> Self {
        SigParam { name, kind }
    }
}

/// A resolved member signature: name, erased parameter shape, erased return.
///
/// Receivers are implicit; `params` lists only value parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberSignature {
    pub name: Name,
    pub params: SmallVec<[SigParam; 2]>,
    pub ret: RawKind,
}

impl MemberSignature {
    pub fn new(name: Name, params: impl IntoIterator<Item = SigParam>, ret: RawKind) -> Self {
        MemberSignature {
            name,
            params: params.into_iter().collect(),
            ret,
        }
    }

    /// A signature with no value parameters.
    pub fn nullary(name: Name, ret: RawKind) -> Self {
        MemberSignature {
            name,
            params: SmallVec::new(),
            ret,
        }
    }

    /// Number of value parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameter kinds in order.
    pub fn param_kinds(&self) -> impl Iterator<Item = RawKind> + '_ {
        self.params.iter().map(|p| p.kind)
    }

    /// Whether the parameter kinds equal `kinds`, ignoring names and return.
    pub fn same_params(&self, kinds: &[RawKind]) -> bool {
        self.params.len() == kinds.len() && self.param_kinds().zip(kinds).all(|(a, &b)| a == b)
    }

    /// Raw signature match: same name, same return kind, same parameter kinds.
    pub fn matches_raw(&self, name: Name, ret: RawKind, params: &[RawKind]) -> bool {
        self.name == name && self.ret == ret && self.same_params(params)
    }
}
