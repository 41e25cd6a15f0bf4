//! ReAct loop: Thought → Action → Observation iteration.
//!
//! Each iteration reasons about the question, dispatches one tool through
//! the registry, and records the observation. The planner is a keyword
//! heuristic — the loop structure is what matters; an LLM-backed planner
//! would slot in at [`ReactAgent::decide`] without touching the loop.

use crate::engine::Engine;

use super::error::{AgentError, AgentResult};
use super::qa::{QaAgent, QuestionIntent, classify_question};
use super::tool::{ToolInput, ToolRegistry};
use super::tools;

/// The distinguished action that ends a run.
const FINISH_ACTION: &str = "finish";

/// Configuration for a ReAct run.
#[derive(Debug, Clone)]
pub struct ReactConfig {
    /// Maximum Thought → Action → Observation iterations per run.
    pub max_iterations: usize,
}

impl Default for ReactConfig {
    fn default() -> Self {
        Self { max_iterations: 5 }
    }
}

/// One recorded Thought → Action → Observation step.
#[derive(Debug, Clone)]
pub struct ReactStep {
    /// Why this action was chosen.
    pub thought: String,
    /// Tool name, or `finish`.
    pub action: String,
    /// Input handed to the tool.
    pub input: ToolInput,
    /// What came back.
    pub observation: String,
}

/// Result of a ReAct run.
#[derive(Debug, Clone)]
pub struct ReactOutcome {
    /// The final answer.
    pub answer: String,
    /// The full reasoning trace.
    pub steps: Vec<ReactStep>,
    /// Whether the run hit the iteration bound instead of finishing.
    pub exhausted: bool,
}

/// A ReAct-style agent dispatching graph tools.
pub struct ReactAgent {
    registry: ToolRegistry,
    config: ReactConfig,
    qa: QaAgent,
}

impl ReactAgent {
    /// Create an agent with the built-in tool registry.
    pub fn new(config: ReactConfig) -> Self {
        Self::with_registry(config, tools::default_registry())
    }

    /// Create an agent with a custom tool registry.
    pub fn with_registry(config: ReactConfig, registry: ToolRegistry) -> Self {
        Self {
            registry,
            config,
            qa: QaAgent::new(),
        }
    }

    /// Run the loop on a question until `finish` or the iteration bound.
    ///
    /// Hitting the bound is reported through [`ReactOutcome::exhausted`],
    /// not as an error.
    pub fn run(&self, engine: &mut Engine, question: &str) -> AgentResult<ReactOutcome> {
        let mut steps: Vec<ReactStep> = Vec::new();

        for iteration in 0..self.config.max_iterations {
            let (thought, action, input) = self.decide(engine, question, &steps);
            tracing::debug!(iteration, action = %action, "react step");

            if action == FINISH_ACTION {
                let answer = input.get("answer").unwrap_or_default().to_string();
                steps.push(ReactStep {
                    thought,
                    action,
                    input,
                    observation: answer.clone(),
                });
                return Ok(ReactOutcome {
                    answer,
                    steps,
                    exhausted: false,
                });
            }

            let observation = match self.registry.execute(&action, input.clone(), engine) {
                Ok(output) => output.result,
                // An unknown action is an observation the loop can recover
                // from, matching how a model-suggested bad action would be
                // handled.
                Err(AgentError::ToolNotFound { name }) => {
                    format!("Unknown action \"{name}\".")
                }
                Err(e) => return Err(e),
            };

            steps.push(ReactStep {
                thought,
                action,
                input,
                observation,
            });
        }

        Ok(ReactOutcome {
            answer: "No conclusive answer within the iteration budget.".to_string(),
            steps,
            exhausted: true,
        })
    }

    /// Choose the next (thought, action, input).
    ///
    /// First iteration routes by question shape; afterwards the last
    /// observation is taken as the answer.
    fn decide(
        &self,
        engine: &Engine,
        question: &str,
        steps: &[ReactStep],
    ) -> (String, String, ToolInput) {
        if let Some(last) = steps.last() {
            return (
                "The observation answers the question.".to_string(),
                FINISH_ACTION.to_string(),
                ToolInput::new().with_param("answer", last.observation.clone()),
            );
        }

        let mentions = self.qa.entity_mentions(engine, question);
        match classify_question(question) {
            QuestionIntent::Connection if mentions.len() >= 2 => (
                format!(
                    "The question asks how \"{}\" and \"{}\" are connected; \
                     I should search for a path.",
                    mentions[0], mentions[1]
                ),
                "kg_path".to_string(),
                ToolInput::new()
                    .with_param("from", mentions[0].clone())
                    .with_param("to", mentions[1].clone()),
            ),
            QuestionIntent::Lookup | QuestionIntent::Connection | QuestionIntent::Freeform
                if !mentions.is_empty() =>
            {
                (
                    format!(
                        "The question mentions \"{}\"; I should look up what \
                         is known about it.",
                        mentions[0]
                    ),
                    "kg_neighbors".to_string(),
                    ToolInput::new().with_param("entity", mentions[0].clone()),
                )
            }
            _ => (
                "The question names no known entity; I can only report that.".to_string(),
                FINISH_ACTION.to_string(),
                ToolInput::new().with_param(
                    "answer",
                    "The question mentions no known entity, so the graph has \
                     nothing to offer.",
                ),
            ),
        }
    }
}

impl Default for ReactAgent {
    fn default() -> Self {
        Self::new(ReactConfig::default())
    }
}
