//! Bounded breadth-first path discovery between two entities.
//!
//! Classic BFS over the adjacency lists: a work queue of (entity, path) pairs
//! and a visited set seeded with the start entity, so every entity is expanded
//! at most once and the first completed path has minimum hop count even on
//! cyclic graphs.

use std::collections::{HashSet, VecDeque};

use crate::symbol::SymbolId;

use super::Triple;
use super::store::TripleStore;

/// Find a shortest directed path from `start` to `end`, as the ordered
/// triples traversed, searching at most `max_depth` hops.
///
/// Returns `None` without searching when either endpoint is not a known
/// entity, and `Some(vec![])` when `start == end` — the goal test runs on
/// dequeue, before the depth check, so a zero-hop match (and likewise a match
/// at exactly `max_depth` hops) is returned rather than discarded. Among
/// equal-length paths the tie-break is neighbor-list insertion order at each
/// expansion step. "No path" is a normal outcome, not an error.
pub fn find_path(
    store: &TripleStore,
    start: &str,
    end: &str,
    max_depth: usize,
) -> Option<Vec<Triple>> {
    let start_id = store.entity_id(start)?;
    let end_id = store.entity_id(end)?;

    let mut visited: HashSet<SymbolId> = HashSet::new();
    visited.insert(start_id);

    let mut queue: VecDeque<(SymbolId, Vec<(SymbolId, SymbolId, SymbolId)>)> = VecDeque::new();
    queue.push_back((start_id, Vec::new()));

    while let Some((current, path)) = queue.pop_front() {
        if current == end_id {
            return Some(resolve_path(store, &path));
        }
        // A path at the depth bound is not expanded further.
        if path.len() >= max_depth {
            continue;
        }

        for &(predicate, object) in store.adjacency_of(current) {
            if visited.insert(object) {
                let mut next = path.clone();
                next.push((current, predicate, object));
                queue.push_back((object, next));
            }
        }
    }

    None
}

fn resolve_path(store: &TripleStore, path: &[(SymbolId, SymbolId, SymbolId)]) -> Vec<Triple> {
    let symbols = store.symbols();
    path.iter()
        .map(|&(s, p, o)| {
            Triple::new(
                symbols.resolve(s),
                symbols.resolve(p),
                symbols.resolve(o),
            )
        })
        .collect()
}
