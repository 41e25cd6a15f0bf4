//! Built-in tools for the agents: KG assert, KG query, KG neighbors, KG path.

pub mod kg_assert;
pub mod kg_neighbors;
pub mod kg_path;
pub mod kg_query;

pub use kg_assert::KgAssertTool;
pub use kg_neighbors::KgNeighborsTool;
pub use kg_path::KgPathTool;
pub use kg_query::KgQueryTool;

use super::tool::ToolRegistry;

/// Create a registry with all built-in tools.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(KgAssertTool));
    registry.register(Box::new(KgQueryTool));
    registry.register(Box::new(KgNeighborsTool));
    registry.register(Box::new(KgPathTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::error::AgentError;
    use crate::agent::tool::ToolInput;
    use crate::engine::{Engine, EngineConfig};

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn default_registry_has_all_tools() {
        let registry = default_registry();
        let names: Vec<String> = registry.list().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["kg_assert", "kg_neighbors", "kg_path", "kg_query"]
        );
    }

    #[test]
    fn assert_then_query() {
        let registry = default_registry();
        let mut engine = engine();

        let out = registry
            .execute(
                "kg_assert",
                ToolInput::new()
                    .with_param("subject", "Sun")
                    .with_param("predicate", "is-a")
                    .with_param("object", "Star"),
                &mut engine,
            )
            .unwrap();
        assert!(out.success);
        assert_eq!(engine.info().triples, 1);

        let out = registry
            .execute(
                "kg_query",
                ToolInput::new().with_param("predicate", "is-a"),
                &mut engine,
            )
            .unwrap();
        assert!(out.result.contains("\"Sun\" --[is-a]--> \"Star\""));
    }

    #[test]
    fn neighbors_with_filter() {
        let registry = default_registry();
        let mut engine = engine();
        engine.insert_triple("Sun", "emits", "Light");
        engine.insert_triple("Sun", "is-a", "Star");

        let out = registry
            .execute(
                "kg_neighbors",
                ToolInput::new()
                    .with_param("entity", "Sun")
                    .with_param("relationship", "emits"),
                &mut engine,
            )
            .unwrap();
        assert!(out.result.contains("Light"));
        assert!(!out.result.contains("Star"));
    }

    #[test]
    fn path_tool_renders_hops() {
        let registry = default_registry();
        let mut engine = engine();
        engine.insert_triple("A", "rel1", "B");
        engine.insert_triple("B", "rel2", "C");

        let out = registry
            .execute(
                "kg_path",
                ToolInput::new().with_param("from", "A").with_param("to", "C"),
                &mut engine,
            )
            .unwrap();
        assert!(out.result.contains("2 hop(s)"));
        assert_eq!(out.entities_touched, vec!["A", "B", "C"]);
    }

    #[test]
    fn path_tool_unknown_entity_is_hard_error() {
        let registry = default_registry();
        let mut engine = engine();
        engine.insert_triple("A", "rel1", "B");

        let result = registry.execute(
            "kg_path",
            ToolInput::new().with_param("from", "A").with_param("to", "Z"),
            &mut engine,
        );
        assert!(matches!(result, Err(AgentError::Engine(_))));
    }

    #[test]
    fn path_tool_rejects_bad_depth() {
        let registry = default_registry();
        let mut engine = engine();
        engine.insert_triple("A", "rel1", "B");

        let result = registry.execute(
            "kg_path",
            ToolInput::new()
                .with_param("from", "A")
                .with_param("to", "B")
                .with_param("max_depth", "many"),
            &mut engine,
        );
        assert!(matches!(result, Err(AgentError::ToolExecution { .. })));
    }
}
