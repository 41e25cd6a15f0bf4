//! KG neighbors tool: list an entity's outgoing relationships.

use crate::agent::error::AgentResult;
use crate::agent::tool::{Tool, ToolInput, ToolOutput, ToolParam, ToolSignature};
use crate::engine::Engine;

/// List an entity's outgoing (relationship, neighbor) pairs.
pub struct KgNeighborsTool;

impl Tool for KgNeighborsTool {
    fn signature(&self) -> ToolSignature {
        ToolSignature {
            name: "kg_neighbors".into(),
            description: "List an entity's outgoing relationships, optionally filtered to one."
                .into(),
            parameters: vec![
                ToolParam {
                    name: "entity".into(),
                    description: "Entity to inspect.".into(),
                    required: true,
                },
                ToolParam {
                    name: "relationship".into(),
                    description: "Only follow this relationship (exact match).".into(),
                    required: false,
                },
            ],
        }
    }

    fn execute(&self, engine: &mut Engine, input: ToolInput) -> AgentResult<ToolOutput> {
        let entity = input.require("entity", "kg_neighbors")?;
        let relationship = input.get("relationship");

        let pairs = engine.neighbors(entity, relationship);
        if pairs.is_empty() {
            return Ok(ToolOutput::ok(format!(
                "No outgoing relationships found for \"{entity}\"."
            )));
        }

        let mut entities = vec![entity.to_string()];
        let lines: Vec<String> = pairs
            .iter()
            .map(|(rel, neighbor)| {
                entities.push(neighbor.clone());
                format!("\"{entity}\" --[{rel}]--> \"{neighbor}\"")
            })
            .collect();

        let result = format!(
            "Found {} relationship(s) for \"{entity}\":\n{}",
            pairs.len(),
            lines.join("\n")
        );
        Ok(ToolOutput::ok_with_entities(result, entities))
    }
}
