//! Conjunctive exact-match triple queries.
//!
//! A [`TriplePattern`] gives an optional constraint per triple position;
//! absent fields match unconditionally. With a subject constraint the scan
//! touches only that subject's neighbor list (O(deg)); without one it walks
//! every entity's list (O(total triples)).

use crate::symbol::SymbolId;

use super::Triple;
use super::store::TripleStore;

/// Optional constraints over the three triple positions.
///
/// Each given field must match exactly (case-sensitive); the filter is the
/// conjunction of the given fields, so the empty pattern matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    /// Required subject, if any.
    pub subject: Option<String>,
    /// Required predicate, if any.
    pub predicate: Option<String>,
    /// Required object, if any.
    pub object: Option<String>,
}

impl TriplePattern {
    /// The unconstrained pattern, matching every stored triple.
    pub fn any() -> Self {
        Self::default()
    }

    /// Constrain the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Constrain the predicate.
    pub fn with_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    /// Constrain the object.
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }
}

/// Resolution of one pattern field against the store's symbol table.
enum Constraint {
    /// Field absent: matches any id.
    Free,
    /// Field present and known: matches exactly this id.
    Exact(SymbolId),
    /// Field present but never inserted: matches nothing.
    Unsatisfiable,
}

impl Constraint {
    fn resolve(store: &TripleStore, field: Option<&str>) -> Self {
        match field {
            None => Constraint::Free,
            Some(name) => match store.symbols().get(name) {
                Some(id) => Constraint::Exact(id),
                None => Constraint::Unsatisfiable,
            },
        }
    }

    fn admits(&self, id: SymbolId) -> bool {
        match self {
            Constraint::Free => true,
            Constraint::Exact(want) => *want == id,
            Constraint::Unsatisfiable => false,
        }
    }
}

/// Return all stored triples matching the pattern.
///
/// Results are deterministic: entities are scanned in first-insertion order
/// and each neighbor list in insertion order, so duplicates appear as often
/// as they were stored. An empty result is a normal outcome, not an error.
pub fn query(store: &TripleStore, pattern: &TriplePattern) -> Vec<Triple> {
    let predicate = Constraint::resolve(store, pattern.predicate.as_deref());
    let object = Constraint::resolve(store, pattern.object.as_deref());
    if matches!(predicate, Constraint::Unsatisfiable) || matches!(object, Constraint::Unsatisfiable)
    {
        return Vec::new();
    }

    // A subject constraint narrows the scan to a single adjacency list.
    let subjects: Vec<SymbolId> = match pattern.subject.as_deref() {
        Some(name) => match store.entity_id(name) {
            Some(id) => vec![id],
            None => return Vec::new(),
        },
        None => store.entity_ids().to_vec(),
    };

    let symbols = store.symbols();
    let mut out = Vec::new();
    for subject in subjects {
        for &(p, o) in store.adjacency_of(subject) {
            if predicate.admits(p) && object.admits(o) {
                out.push(Triple::new(
                    symbols.resolve(subject),
                    symbols.resolve(p),
                    symbols.resolve(o),
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten triples with deliberate overlaps across all three positions.
    fn fixture() -> TripleStore {
        let mut store = TripleStore::new();
        store.insert("Sun", "is-a", "Star");
        store.insert("Sirius", "is-a", "Star");
        store.insert("Moon", "orbits", "Earth");
        store.insert("Earth", "orbits", "Sun");
        store.insert("Mars", "orbits", "Sun");
        store.insert("Earth", "is-a", "Planet");
        store.insert("Mars", "is-a", "Planet");
        store.insert("Sun", "emits", "Light");
        store.insert("Sun", "emits", "Heat");
        store.insert("Moon", "is-a", "Satellite");
        store
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let store = fixture();
        assert_eq!(query(&store, &TriplePattern::any()).len(), store.len());
    }

    #[test]
    fn subject_only() {
        let store = fixture();
        let results = query(&store, &TriplePattern::any().with_subject("Sun"));
        assert_eq!(
            results,
            vec![
                Triple::new("Sun", "is-a", "Star"),
                Triple::new("Sun", "emits", "Light"),
                Triple::new("Sun", "emits", "Heat"),
            ]
        );
    }

    #[test]
    fn predicate_only() {
        let store = fixture();
        let results = query(&store, &TriplePattern::any().with_predicate("orbits"));
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|t| t.predicate == "orbits"));
    }

    #[test]
    fn object_only() {
        let store = fixture();
        let results = query(&store, &TriplePattern::any().with_object("Sun"));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|t| t.object == "Sun"));
    }

    #[test]
    fn subject_and_predicate() {
        let store = fixture();
        let results = query(
            &store,
            &TriplePattern::any()
                .with_subject("Sun")
                .with_predicate("emits"),
        );
        assert_eq!(
            results,
            vec![
                Triple::new("Sun", "emits", "Light"),
                Triple::new("Sun", "emits", "Heat"),
            ]
        );
    }

    #[test]
    fn predicate_and_object() {
        let store = fixture();
        let results = query(
            &store,
            &TriplePattern::any()
                .with_predicate("orbits")
                .with_object("Sun"),
        );
        assert_eq!(
            results,
            vec![
                Triple::new("Earth", "orbits", "Sun"),
                Triple::new("Mars", "orbits", "Sun"),
            ]
        );
    }

    #[test]
    fn fully_constrained() {
        let store = fixture();
        let results = query(
            &store,
            &TriplePattern::any()
                .with_subject("Moon")
                .with_predicate("orbits")
                .with_object("Earth"),
        );
        assert_eq!(results, vec![Triple::new("Moon", "orbits", "Earth")]);
    }

    #[test]
    fn unknown_filter_values_match_nothing() {
        let store = fixture();
        assert!(query(&store, &TriplePattern::any().with_subject("Pluto")).is_empty());
        assert!(query(&store, &TriplePattern::any().with_predicate("devours")).is_empty());
        assert!(query(&store, &TriplePattern::any().with_object("Void")).is_empty());
    }

    #[test]
    fn mismatched_conjunction_is_empty() {
        let store = fixture();
        // Both fields exist individually but no triple joins them.
        let results = query(
            &store,
            &TriplePattern::any()
                .with_subject("Moon")
                .with_object("Star"),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn duplicates_are_returned_twice() {
        let mut store = TripleStore::new();
        store.insert("A", "r", "B");
        store.insert("A", "r", "B");

        let results = query(&store, &TriplePattern::any().with_subject("A"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn results_follow_entity_insertion_order() {
        let store = fixture();
        let results = query(&store, &TriplePattern::any().with_predicate("is-a"));
        let subjects: Vec<&str> = results.iter().map(|t| t.subject.as_str()).collect();
        // First-seen entity order: Sun, Sirius, Moon, Earth, Mars.
        assert_eq!(subjects, vec!["Sun", "Sirius", "Moon", "Earth", "Mars"]);
    }

    #[test]
    fn predicate_name_as_subject_matches_nothing() {
        let store = fixture();
        // "orbits" exists as a relationship, never as an entity.
        assert!(query(&store, &TriplePattern::any().with_subject("orbits")).is_empty());
    }
}
