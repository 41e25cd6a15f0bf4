//! # noema
//!
//! An in-memory knowledge graph engine with agent tooling.
//!
//! ## Architecture
//!
//! - **Knowledge graph** (`graph`): directed labeled multigraph of
//!   (subject, predicate, object) string triples with insertion-ordered
//!   adjacency lists, exact-match queries, and bounded BFS path discovery
//! - **Engine facade** (`engine`): owns the store and exposes the public API
//! - **Agent layer** (`agent`): trait-based tools with runtime registration,
//!   a ReAct-style reasoning loop, keyword question answering, and a
//!   supervisor/worker orchestration harness
//! - **Seed packs** (`seeds`): TOML-defined triple bundles for bootstrapping
//!   a graph (one bundled, more discoverable from disk)
//!
//! ## Library usage
//!
//! ```
//! use noema::engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! engine.insert_triple("Sun", "is-a", "Star");
//! engine.insert_triple("Moon", "orbits", "Earth");
//!
//! assert!(engine.entity_exists("Sun"));
//! assert_eq!(engine.neighbors("Sun", None).len(), 1);
//! ```

pub mod agent;
pub mod engine;
pub mod error;
pub mod export;
pub mod graph;
pub mod seeds;
pub mod symbol;
