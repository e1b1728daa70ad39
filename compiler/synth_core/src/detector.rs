//! Trivial-override detection.
//!
//! A member found on a type may be replaced by synthesized logic only if
//! nothing user-written stands between it and the universal root:
//!
//! - the member itself must not be an explicit declaration, and
//! - no transitive override ancestor may be an explicit declaration owned by
//!   a type other than the universal root.

use synth_ir::{CandidateMember, MemberId, TypeId};
use synth_sema::OverrideGraph;
use tracing::trace;

/// Why a member may or may not be replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverrideVerdict {
    /// Only root defaults and fabricated members along the whole chain.
    Trivial,
    /// The member is written directly on the type.
    ExplicitOnType,
    /// An ancestor below the root is written explicitly.
    ExplicitAncestor { member: MemberId, owner: TypeId },
}

impl OverrideVerdict {
    #[inline]
    pub fn is_trivial(self) -> bool {
        self == OverrideVerdict::Trivial
    }
}

/// Stateless predicate over an immutable override graph.
pub struct TrivialOverrideDetector<'g, G: ?Sized> {
    graph: &'g G,
    root: TypeId,
}

impl<'g, G: OverrideGraph + ?Sized> TrivialOverrideDetector<'g, G> {
    pub fn new(graph: &'g G, root: TypeId) -> Self {
        TrivialOverrideDetector { graph, root }
    }

    /// Classify `member`, reporting the nearest blocking ancestor if any.
    pub fn classify(&self, member: &CandidateMember) -> OverrideVerdict {
        if member.kind.is_explicit() {
            return OverrideVerdict::ExplicitOnType;
        }

        for id in self.graph.overridden_ancestors(member.id) {
            let Some(ancestor) = self.graph.member(id) else {
                trace!(member = ?member.id, ancestor = ?id, "override edge to unknown member ignored");
                continue;
            };
            if ancestor.kind.is_explicit() && ancestor.owner != self.root {
                return OverrideVerdict::ExplicitAncestor {
                    member: ancestor.id,
                    owner: ancestor.owner,
                };
            }
        }

        OverrideVerdict::Trivial
    }

    /// Whether `member` may be replaced by a synthesized implementation.
    pub fn is_trivial(&self, member: &CandidateMember) -> bool {
        self.classify(member).is_trivial()
    }
}
