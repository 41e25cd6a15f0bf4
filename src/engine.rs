//! Engine facade: top-level API for the noema system.
//!
//! The `Engine` owns the triple store and provides the public interface for
//! inserting knowledge, querying it, and discovering paths between entities.

use crate::error::{EngineError, GraphError, NoemaResult};
use crate::export::GraphExport;
use crate::graph::{self, Triple, TriplePattern, TripleStore};

/// Configuration for the noema engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Depth bound used by [`Engine::find_path`] when the caller gives none.
    pub default_max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_depth: 5,
        }
    }
}

/// The noema knowledge graph engine.
///
/// Insertion is the only mutation, so the engine is queried through `&self`
/// and populated through `&mut self`; embedders needing concurrent access
/// serialize externally.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    store: TripleStore,
}

impl Engine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> NoemaResult<Self> {
        if config.default_max_depth == 0 {
            return Err(EngineError::InvalidConfig {
                message: "default_max_depth must be > 0".into(),
            }
            .into());
        }

        tracing::info!(
            default_max_depth = config.default_max_depth,
            "initializing noema engine"
        );

        Ok(Self {
            config,
            store: TripleStore::new(),
        })
    }

    /// Insert a (subject, predicate, object) triple.
    ///
    /// Entities and the relationship are registered implicitly; duplicates
    /// are stored again. Never fails.
    pub fn insert_triple(&mut self, subject: &str, predicate: &str, object: &str) {
        tracing::debug!(subject, predicate, object, "insert triple");
        self.store.insert(subject, predicate, object);
    }

    /// Outgoing (predicate, object) pairs of an entity, insertion-ordered,
    /// optionally filtered to one relationship.
    pub fn neighbors(&self, entity: &str, relationship: Option<&str>) -> Vec<(String, String)> {
        self.store.neighbors(entity, relationship)
    }

    /// All triples matching the pattern's given fields exactly.
    pub fn query(&self, pattern: &TriplePattern) -> Vec<Triple> {
        graph::query(&self.store, pattern)
    }

    /// Shortest directed path between two entities, bounded by `max_depth`
    /// hops (the configured default when `None`). `None` means no path —
    /// a normal outcome, not a failure.
    pub fn find_path(&self, start: &str, end: &str, max_depth: Option<usize>) -> Option<Vec<Triple>> {
        let depth = max_depth.unwrap_or(self.config.default_max_depth);
        tracing::debug!(start, end, depth, "path search");
        graph::find_path(&self.store, start, end, depth)
    }

    /// Whether the entity has appeared in any stored triple.
    pub fn entity_exists(&self, entity: &str) -> bool {
        self.store.entity_exists(entity)
    }

    /// Whether the relationship has labeled any stored triple.
    pub fn relationship_exists(&self, relationship: &str) -> bool {
        self.store.relationship_exists(relationship)
    }

    /// Hard-error policy for embedders: fail unless the entity is known.
    ///
    /// The read operations themselves treat unknown entities as empty
    /// results; layers that want an error check here first.
    pub fn require_entity(&self, entity: &str) -> NoemaResult<()> {
        if self.store.entity_exists(entity) {
            Ok(())
        } else {
            Err(GraphError::UnknownEntity {
                name: entity.to_string(),
            }
            .into())
        }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &TripleStore {
        &self.store
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Summary statistics.
    pub fn info(&self) -> EngineInfo {
        EngineInfo {
            entities: self.store.entity_count(),
            relationships: self.store.relationship_count(),
            triples: self.store.len(),
        }
    }

    /// Label-level dump of the whole graph for JSON export.
    pub fn export(&self) -> GraphExport {
        GraphExport::from_store(&self.store)
    }
}

/// Summary information about the engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    pub entities: usize,
    pub relationships: usize,
    pub triples: usize,
}

impl std::fmt::Display for EngineInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "noema engine info")?;
        writeln!(f, "  entities:       {}", self.entities)?;
        writeln!(f, "  relationships:  {}", self.relationships)?;
        writeln!(f, "  triples:        {}", self.triples)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn zero_depth_config_rejected() {
        let result = Engine::new(EngineConfig {
            default_max_depth: 0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn insert_and_introspect() {
        let mut engine = engine();
        engine.insert_triple("Sun", "is-a", "Star");
        engine.insert_triple("Moon", "orbits", "Earth");

        let info = engine.info();
        assert_eq!(
            info,
            EngineInfo {
                entities: 4,
                relationships: 2,
                triples: 2,
            }
        );
        assert!(engine.entity_exists("Moon"));
        assert!(engine.relationship_exists("orbits"));
    }

    #[test]
    fn find_path_uses_configured_default_depth() {
        let mut engine = Engine::new(EngineConfig {
            default_max_depth: 2,
        })
        .unwrap();
        engine.insert_triple("A", "r", "B");
        engine.insert_triple("B", "r", "C");
        engine.insert_triple("C", "r", "D");

        assert!(engine.find_path("A", "D", None).is_none());
        assert!(engine.find_path("A", "D", Some(3)).is_some());
    }

    #[test]
    fn require_entity_policy() {
        let mut engine = engine();
        engine.insert_triple("Sun", "is-a", "Star");

        assert!(engine.require_entity("Sun").is_ok());
        let err = engine.require_entity("Jupiter").unwrap_err();
        assert!(format!("{err}").contains("Jupiter"));
    }

    #[test]
    fn info_display() {
        let mut engine = engine();
        engine.insert_triple("Sun", "is-a", "Star");

        let rendered = engine.info().to_string();
        assert!(rendered.contains("entities:       2"));
        assert!(rendered.contains("triples:        1"));
    }
}
