//! KG path tool: bounded BFS connection between two entities.

use crate::agent::error::AgentResult;
use crate::agent::tool::{Tool, ToolInput, ToolOutput, ToolParam, ToolSignature};
use crate::engine::Engine;

/// Find a shortest relation path between two entities.
pub struct KgPathTool;

impl Tool for KgPathTool {
    fn signature(&self) -> ToolSignature {
        ToolSignature {
            name: "kg_path".into(),
            description: "Find a shortest relation path between two entities via BFS.".into(),
            parameters: vec![
                ToolParam {
                    name: "from".into(),
                    description: "Start entity.".into(),
                    required: true,
                },
                ToolParam {
                    name: "to".into(),
                    description: "Target entity.".into(),
                    required: true,
                },
                ToolParam {
                    name: "max_depth".into(),
                    description: "Maximum hops to search (default: engine setting).".into(),
                    required: false,
                },
            ],
        }
    }

    fn execute(&self, engine: &mut Engine, input: ToolInput) -> AgentResult<ToolOutput> {
        let from = input.require("from", "kg_path")?;
        let to = input.require("to", "kg_path")?;
        let max_depth = match input.get("max_depth") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                crate::agent::error::AgentError::ToolExecution {
                    tool_name: "kg_path".into(),
                    message: format!("max_depth must be a non-negative integer, got \"{raw}\""),
                }
            })?),
            None => None,
        };

        // Unknown endpoints are a hard error at this layer; the engine's
        // read operations themselves stay soft.
        engine.require_entity(from)?;
        engine.require_entity(to)?;

        let depth = max_depth.unwrap_or(engine.config().default_max_depth);
        match engine.find_path(from, to, max_depth) {
            Some(path) if path.is_empty() => Ok(ToolOutput::ok_with_entities(
                format!("\"{from}\" and \"{to}\" are the same entity (zero hops)."),
                vec![from.to_string()],
            )),
            Some(path) => {
                let mut entities = vec![from.to_string()];
                let lines: Vec<String> = path
                    .iter()
                    .map(|t| {
                        entities.push(t.object.clone());
                        format!("  {t}")
                    })
                    .collect();
                let result = format!(
                    "Path from \"{from}\" to \"{to}\" in {} hop(s):\n{}",
                    path.len(),
                    lines.join("\n")
                );
                Ok(ToolOutput::ok_with_entities(result, entities))
            }
            None => Ok(ToolOutput::ok(format!(
                "No connection from \"{from}\" to \"{to}\" within {depth} hop(s)."
            ))),
        }
    }
}
