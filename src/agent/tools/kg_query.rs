//! KG query tool: filtered triple lookup.

use crate::agent::error::AgentResult;
use crate::agent::tool::{Tool, ToolInput, ToolOutput, ToolParam, ToolSignature};
use crate::engine::Engine;
use crate::graph::TriplePattern;

/// Look up stored triples matching optional subject/predicate/object filters.
pub struct KgQueryTool;

impl Tool for KgQueryTool {
    fn signature(&self) -> ToolSignature {
        ToolSignature {
            name: "kg_query".into(),
            description: "Look up triples matching optional subject/predicate/object filters."
                .into(),
            parameters: vec![
                ToolParam {
                    name: "subject".into(),
                    description: "Required subject, exact match.".into(),
                    required: false,
                },
                ToolParam {
                    name: "predicate".into(),
                    description: "Required predicate, exact match.".into(),
                    required: false,
                },
                ToolParam {
                    name: "object".into(),
                    description: "Required object, exact match.".into(),
                    required: false,
                },
            ],
        }
    }

    fn execute(&self, engine: &mut Engine, input: ToolInput) -> AgentResult<ToolOutput> {
        let mut pattern = TriplePattern::any();
        if let Some(subject) = input.get("subject") {
            pattern = pattern.with_subject(subject);
        }
        if let Some(predicate) = input.get("predicate") {
            pattern = pattern.with_predicate(predicate);
        }
        if let Some(object) = input.get("object") {
            pattern = pattern.with_object(object);
        }

        let matches = engine.query(&pattern);
        if matches.is_empty() {
            return Ok(ToolOutput::ok("No triples match the given filters."));
        }

        let mut entities = Vec::new();
        let lines: Vec<String> = matches
            .iter()
            .map(|t| {
                entities.push(t.subject.clone());
                entities.push(t.object.clone());
                t.to_string()
            })
            .collect();

        let result = format!("Found {} triple(s):\n{}", matches.len(), lines.join("\n"));
        Ok(ToolOutput::ok_with_entities(result, entities))
    }
}
