//! Export types for serializing engine state.
//!
//! A [`GraphExport`] is a label-level snapshot of the whole graph —
//! vocabularies plus triples — suitable for JSON dumps.

use serde::{Deserialize, Serialize};

use crate::graph::TripleStore;

/// Exported triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleExport {
    /// Subject entity.
    pub subject: String,
    /// Predicate label.
    pub predicate: String,
    /// Object entity.
    pub object: String,
}

/// Full dump of a graph: vocabularies and triples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    /// Entities in first-insertion order.
    pub entities: Vec<String>,
    /// Relationships, sorted for stable output.
    pub relationships: Vec<String>,
    /// Triples in deterministic scan order (entity order, then neighbor
    /// insertion order).
    pub triples: Vec<TripleExport>,
}

impl GraphExport {
    /// Snapshot a store.
    pub fn from_store(store: &TripleStore) -> Self {
        let entities: Vec<String> = store.entities().map(str::to_string).collect();

        let all = store.all_triples();

        let mut relationships: Vec<String> =
            all.iter().map(|t| t.predicate.clone()).collect();
        relationships.sort();
        relationships.dedup();

        let triples = all
            .into_iter()
            .map(|t| TripleExport {
                subject: t.subject,
                predicate: t.predicate,
                object: t.object,
            })
            .collect();

        Self {
            entities,
            relationships,
            triples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_snapshot() {
        let mut store = TripleStore::new();
        store.insert("Sun", "is-a", "Star");
        store.insert("Moon", "orbits", "Earth");
        store.insert("Earth", "orbits", "Sun");

        let export = GraphExport::from_store(&store);
        assert_eq!(export.entities, vec!["Sun", "Star", "Moon", "Earth"]);
        assert_eq!(export.relationships, vec!["is-a", "orbits"]);
        assert_eq!(export.triples.len(), 3);
    }

    #[test]
    fn export_round_trips_through_json() {
        let mut store = TripleStore::new();
        store.insert("Sun", "is-a", "Star");

        let export = GraphExport::from_store(&store);
        let json = serde_json::to_string(&export).unwrap();
        let back: GraphExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.triples, export.triples);
    }
}
