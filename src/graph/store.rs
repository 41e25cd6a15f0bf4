//! In-memory triple store with insertion-ordered adjacency lists.
//!
//! The adjacency map `subject → Vec<(predicate, object)>` is the sole source
//! of truth. Entity and relationship membership sets are caches kept
//! consistent by the single insertion path, and a separate list records the
//! first-seen order of entities so that unfiltered scans are deterministic.

use std::collections::{HashMap, HashSet};

use crate::symbol::{SymbolId, SymbolTable};

use super::Triple;

/// Directed labeled multigraph of string triples.
///
/// Entities and relationships are implicitly registered the first time they
/// appear in an inserted triple; there is no explicit create step and no
/// deletion. Duplicate triples are stored twice. `insert` is the only
/// mutator; every other operation is a pure read, so an embedder that needs
/// concurrent access serializes writes externally.
pub struct TripleStore {
    symbols: SymbolTable,
    /// subject → outgoing (predicate, object) pairs, in insertion order.
    adjacency: HashMap<SymbolId, Vec<(SymbolId, SymbolId)>>,
    /// Entities in first-seen order (as subject or object).
    entity_order: Vec<SymbolId>,
    /// Entity membership cache.
    entity_set: HashSet<SymbolId>,
    /// Relationship membership cache.
    relationship_set: HashSet<SymbolId>,
    /// Total stored triples, duplicates included.
    triple_count: usize,
}

impl TripleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            adjacency: HashMap::new(),
            entity_order: Vec::new(),
            entity_set: HashSet::new(),
            relationship_set: HashSet::new(),
            triple_count: 0,
        }
    }

    /// Register an entity, recording its first-seen position.
    fn register_entity(&mut self, id: SymbolId) {
        if self.entity_set.insert(id) {
            self.entity_order.push(id);
        }
    }

    /// Insert a triple.
    ///
    /// Registers `subject` and `object` as entities and `predicate` as a
    /// relationship, then appends `(predicate, object)` to the subject's
    /// neighbor list. Any strings are accepted, the empty string included;
    /// inserting the same triple twice stores it twice.
    pub fn insert(&mut self, subject: &str, predicate: &str, object: &str) {
        let s = self.symbols.intern(subject);
        let p = self.symbols.intern(predicate);
        let o = self.symbols.intern(object);

        self.register_entity(s);
        self.register_entity(o);
        self.relationship_set.insert(p);

        self.adjacency.entry(s).or_default().push((p, o));
        self.triple_count += 1;
    }

    /// Outgoing (predicate, object) pairs of an entity, in insertion order.
    ///
    /// Returns an empty vector if the entity has no outgoing triples or does
    /// not exist. With `relationship` given, the result keeps only pairs
    /// whose predicate equals it exactly (case-sensitive).
    pub fn neighbors(&self, entity: &str, relationship: Option<&str>) -> Vec<(String, String)> {
        let Some(id) = self.symbols.get(entity) else {
            return Vec::new();
        };
        let Some(list) = self.adjacency.get(&id) else {
            return Vec::new();
        };

        let filter = match relationship {
            Some(name) => match self.symbols.get(name) {
                Some(rel_id) => Some(rel_id),
                // The relationship was never inserted, so nothing can match.
                None => return Vec::new(),
            },
            None => None,
        };

        list.iter()
            .filter(|(p, _)| filter.is_none_or(|rel_id| *p == rel_id))
            .map(|&(p, o)| {
                (
                    self.symbols.resolve(p).to_string(),
                    self.symbols.resolve(o).to_string(),
                )
            })
            .collect()
    }

    /// Whether the entity has appeared as a subject or object.
    pub fn entity_exists(&self, entity: &str) -> bool {
        self.symbols
            .get(entity)
            .is_some_and(|id| self.entity_set.contains(&id))
    }

    /// Whether the relationship has appeared as a predicate.
    pub fn relationship_exists(&self, relationship: &str) -> bool {
        self.symbols
            .get(relationship)
            .is_some_and(|id| self.relationship_set.contains(&id))
    }

    /// All triples with the given subject, in insertion order.
    pub fn triples_from(&self, subject: &str) -> Vec<Triple> {
        self.neighbors(subject, None)
            .into_iter()
            .map(|(predicate, object)| Triple::new(subject, predicate, object))
            .collect()
    }

    /// All stored triples: entities in first-seen order, neighbors in
    /// insertion order.
    pub fn all_triples(&self) -> Vec<Triple> {
        let mut out = Vec::with_capacity(self.triple_count);
        for &subject in &self.entity_order {
            if let Some(list) = self.adjacency.get(&subject) {
                for &(p, o) in list {
                    out.push(Triple::new(
                        self.symbols.resolve(subject),
                        self.symbols.resolve(p),
                        self.symbols.resolve(o),
                    ));
                }
            }
        }
        out
    }

    /// Entity labels in first-seen order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entity_order.iter().map(|&id| self.symbols.resolve(id))
    }

    /// Number of distinct entities.
    pub fn entity_count(&self) -> usize {
        self.entity_set.len()
    }

    /// Number of distinct relationships.
    pub fn relationship_count(&self) -> usize {
        self.relationship_set.len()
    }

    /// Number of stored triples, duplicates included.
    pub fn len(&self) -> usize {
        self.triple_count
    }

    /// Whether the store holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triple_count == 0
    }

    // Id-level access for the query and path modules.

    pub(crate) fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(crate) fn entity_ids(&self) -> &[SymbolId] {
        &self.entity_order
    }

    /// Id of a string known to be an entity (not merely a predicate).
    pub(crate) fn entity_id(&self, entity: &str) -> Option<SymbolId> {
        self.symbols
            .get(entity)
            .filter(|id| self.entity_set.contains(id))
    }

    pub(crate) fn adjacency_of(&self, id: SymbolId) -> &[(SymbolId, SymbolId)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for TripleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TripleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripleStore")
            .field("entities", &self.entity_count())
            .field("relationships", &self.relationship_count())
            .field("triples", &self.len())
            .finish()
    }
}
