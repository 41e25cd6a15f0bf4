//! KG assertion tool: add a triple to the knowledge graph.

use crate::agent::error::AgentResult;
use crate::agent::tool::{Tool, ToolInput, ToolOutput, ToolParam, ToolSignature};
use crate::engine::Engine;

/// Add a triple (subject, predicate, object) to the knowledge graph.
pub struct KgAssertTool;

impl Tool for KgAssertTool {
    fn signature(&self) -> ToolSignature {
        ToolSignature {
            name: "kg_assert".into(),
            description: "Add a triple (subject, predicate, object) to the knowledge graph.".into(),
            parameters: vec![
                ToolParam {
                    name: "subject".into(),
                    description: "Subject entity.".into(),
                    required: true,
                },
                ToolParam {
                    name: "predicate".into(),
                    description: "Predicate (relationship) label.".into(),
                    required: true,
                },
                ToolParam {
                    name: "object".into(),
                    description: "Object entity.".into(),
                    required: true,
                },
            ],
        }
    }

    fn execute(&self, engine: &mut Engine, input: ToolInput) -> AgentResult<ToolOutput> {
        let subject = input.require("subject", "kg_assert")?;
        let predicate = input.require("predicate", "kg_assert")?;
        let object = input.require("object", "kg_assert")?;

        engine.insert_triple(subject, predicate, object);

        let result = format!("Stored \"{subject}\" --[{predicate}]--> \"{object}\".");
        Ok(ToolOutput::ok_with_entities(
            result,
            vec![subject.to_string(), object.to_string()],
        ))
    }
}
