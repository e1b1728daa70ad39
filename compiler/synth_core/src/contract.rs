//! Generic-object-contract members of the universal root.

use synth_ir::RawKind;

/// A member every type inherits from the universal root and that structural
/// types may have synthesized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractMember {
    /// `to_string(): str`
    ToString,
    /// `hash_code(): int`
    HashCode,
    /// `equals(other: any): bool`
    Equals,
}

impl ContractMember {
    /// All contract members, in synthesis order.
    pub const ALL: [ContractMember; 3] = [
        ContractMember::ToString,
        ContractMember::HashCode,
        ContractMember::Equals,
    ];

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        match self {
            ContractMember::ToString => 0,
            ContractMember::HashCode => 1,
            ContractMember::Equals => 2,
        }
    }

    /// Member name on the universal root.
    pub const fn method_name(self) -> &'static str {
        match self {
            ContractMember::ToString => "to_string",
            ContractMember::HashCode => "hash_code",
            ContractMember::Equals => "equals",
        }
    }

    /// Raw return kind.
    pub const fn return_kind(self) -> RawKind {
        match self {
            ContractMember::ToString => RawKind::Str,
            ContractMember::HashCode => RawKind::Int,
            ContractMember::Equals => RawKind::Bool,
        }
    }

    /// Raw parameter kinds.
    pub const fn param_kinds(self) -> &'static [RawKind] {
        match self {
            ContractMember::ToString | ContractMember::HashCode => &[],
            ContractMember::Equals => &[RawKind::Any],
        }
    }
}

#[cfg(test)]
mod tests;
