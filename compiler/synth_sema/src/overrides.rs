//! Override graph protocol.

use rustc_hash::FxHashSet;
use synth_ir::{CandidateMember, MemberId};

/// Read-only override relation between members.
///
/// Edges point from a member to the ancestor members it directly overrides.
/// The relation is a DAG bottoming out at the universal root's built-in
/// members.
pub trait OverrideGraph {
    /// Look up a member by id.
    fn member(&self, id: MemberId) -> Option<&CandidateMember>;

    /// Members `id` directly overrides.
    fn direct_overrides(&self, id: MemberId) -> &[MemberId];

    /// Transitive closure of [`direct_overrides`](Self::direct_overrides),
    /// in breadth-first discovery order, excluding `id` itself.
    ///
    /// Each member is reported once even if reachable along several paths,
    /// and a malformed cyclic graph still terminates.
    fn overridden_ancestors(&self, id: MemberId) -> Vec<MemberId> {
        let mut visited = FxHashSet::default();
        visited.insert(id);
        let mut ancestors = Vec::new();
        let mut cursor = 0;
        let mut frontier: Vec<MemberId> = self.direct_overrides(id).to_vec();

        while cursor < frontier.len() {
            let current = frontier[cursor];
            cursor += 1;
            if !visited.insert(current) {
                continue;
            }
            ancestors.push(current);
            frontier.extend_from_slice(self.direct_overrides(current));
        }

        ancestors
    }
}
