//! Knowledge graph: in-memory directed labeled multigraph of string triples.
//!
//! The graph stores (subject, predicate, object) facts in per-subject
//! adjacency lists that preserve insertion order.
//!
//! - **Store** ([`TripleStore`]): insertion, neighbor lookup, membership
//! - **Query** ([`query`]): conjunctive exact-match filtering over triples
//! - **Paths** ([`find_path`]): bounded breadth-first path discovery
//!
//! Query and path results are independently computed copies, not views into
//! the store, so they stay valid across later insertions.

pub mod paths;
pub mod query;
pub mod store;

pub use paths::find_path;
pub use query::{TriplePattern, query};
pub use store::TripleStore;

use serde::{Deserialize, Serialize};

/// A (subject, predicate, object) fact in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    /// The subject entity.
    pub subject: String,
    /// The predicate (relationship) labeling the edge.
    pub predicate: String,
    /// The object entity.
    pub object: String,
}

impl Triple {
    /// Create a new triple.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" --[{}]--> \"{}\"",
            self.subject, self.predicate, self.object
        )
    }
}
