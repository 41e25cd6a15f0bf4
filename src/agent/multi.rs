//! Multi-agent orchestration: supervisor/worker task decomposition.
//!
//! A [`Supervisor`] decomposes a task into role-addressed subtasks,
//! dispatches them to registered [`Worker`]s in sequence (threading each
//! step's output into the next subtask), and aggregates the results.
//! Workers share nothing but read access to the engine; their single
//! capability is `process(engine, task) -> output`.

use serde::{Deserialize, Serialize};

use crate::engine::Engine;

use super::qa::QaAgent;

// ── Roles and messages ──────────────────────────────────────────────────

/// Role of an agent in the orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    Supervisor,
    Researcher,
    Writer,
    Reviewer,
    Executor,
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRole::Supervisor => write!(f, "supervisor"),
            AgentRole::Researcher => write!(f, "researcher"),
            AgentRole::Writer => write!(f, "writer"),
            AgentRole::Reviewer => write!(f, "reviewer"),
            AgentRole::Executor => write!(f, "executor"),
        }
    }
}

/// Kind of an inter-agent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Supervisor hands a subtask to a worker.
    Assignment,
    /// Worker reports a subtask result.
    Result,
    /// Coordination notes (e.g. a role with no registered worker).
    Info,
}

/// A message in the orchestration transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskMessage {
    /// Sending agent's name.
    pub sender: String,
    /// Receiving agent's name.
    pub receiver: String,
    /// Message body.
    pub content: String,
    /// What this message is.
    pub kind: MessageKind,
}

// ── Workers ─────────────────────────────────────────────────────────────

/// A worker agent with a single capability.
pub trait Worker: Send + Sync {
    /// The worker's name.
    fn name(&self) -> &str;

    /// The role this worker fills.
    fn role(&self) -> AgentRole;

    /// Process one subtask against the (read-only) engine.
    fn process(&self, engine: &Engine, task: &str) -> String;
}

/// Gathers graph facts about entities mentioned in the task.
pub struct Researcher;

impl Worker for Researcher {
    fn name(&self) -> &str {
        "researcher"
    }

    fn role(&self) -> AgentRole {
        AgentRole::Researcher
    }

    fn process(&self, engine: &Engine, task: &str) -> String {
        let qa = QaAgent::new();
        let mentions = qa.entity_mentions(engine, task);

        let mut findings: Vec<String> = Vec::new();
        for entity in &mentions {
            for (rel, neighbor) in engine.neighbors(entity, None) {
                findings.push(format!("{entity} {rel} {neighbor}"));
            }
        }

        if findings.is_empty() {
            "Research findings: nothing relevant in the knowledge graph.".to_string()
        } else {
            format!("Research findings: {}.", findings.join("; "))
        }
    }
}

/// Turns prior findings into a readable summary.
pub struct Writer;

impl Worker for Writer {
    fn name(&self) -> &str {
        "writer"
    }

    fn role(&self) -> AgentRole {
        AgentRole::Writer
    }

    fn process(&self, _engine: &Engine, task: &str) -> String {
        format!("Draft: {task}")
    }
}

/// Checks a draft for obvious problems.
pub struct Reviewer;

impl Worker for Reviewer {
    fn name(&self) -> &str {
        "reviewer"
    }

    fn role(&self) -> AgentRole {
        AgentRole::Reviewer
    }

    fn process(&self, _engine: &Engine, task: &str) -> String {
        if task.len() < 20 {
            "Review complete. Issues found: content seems too brief.".to_string()
        } else {
            "Review complete. Content approved.".to_string()
        }
    }
}

/// General-purpose fallback worker.
pub struct Executor;

impl Worker for Executor {
    fn name(&self) -> &str {
        "executor"
    }

    fn role(&self) -> AgentRole {
        AgentRole::Executor
    }

    fn process(&self, _engine: &Engine, task: &str) -> String {
        format!("Task executed: {task}")
    }
}

// ── Supervisor ──────────────────────────────────────────────────────────

/// Outcome of a supervised run: the aggregated result and the full
/// message transcript.
#[derive(Debug, Clone)]
pub struct SupervisionReport {
    /// Aggregated, numbered step results.
    pub result: String,
    /// Every message exchanged during the run.
    pub transcript: Vec<TaskMessage>,
}

/// Coordinates workers: decomposes a task, dispatches subtasks, aggregates.
pub struct Supervisor {
    name: String,
    workers: Vec<Box<dyn Worker>>,
}

impl Supervisor {
    /// Create a supervisor with no workers.
    pub fn new() -> Self {
        Self {
            name: "supervisor".to_string(),
            workers: Vec::new(),
        }
    }

    /// Register a worker.
    pub fn register(&mut self, worker: Box<dyn Worker>) {
        self.workers.push(worker);
    }

    /// Number of registered workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Decompose a task into role-addressed subtasks by keyword.
    pub fn decompose(&self, task: &str) -> Vec<(AgentRole, String)> {
        let lower = task.to_lowercase();
        if lower.contains("research") || lower.contains("summar") {
            vec![
                (AgentRole::Researcher, format!("Research the topic: {task}")),
                (AgentRole::Writer, "Write a summary of the findings".to_string()),
                (AgentRole::Reviewer, "Review the draft".to_string()),
            ]
        } else if lower.contains("analysis") || lower.contains("analyze") {
            vec![
                (AgentRole::Researcher, format!("Gather data for: {task}")),
                (AgentRole::Executor, "Analyze the gathered data".to_string()),
                (AgentRole::Writer, "Create a report".to_string()),
            ]
        } else {
            vec![(AgentRole::Executor, task.to_string())]
        }
    }

    fn find_worker(&self, role: AgentRole) -> Option<&dyn Worker> {
        self.workers
            .iter()
            .find(|w| w.role() == role)
            .map(|b| b.as_ref())
    }

    /// Run a task through decomposition, dispatch, and aggregation.
    ///
    /// Each step's output is appended to the next subtask so downstream
    /// workers see what came before. A role with no registered worker is
    /// noted in the transcript and skipped, never fatal.
    pub fn run(&self, engine: &Engine, task: &str) -> SupervisionReport {
        tracing::info!(task, "supervisor coordinating task");

        let mut transcript: Vec<TaskMessage> = Vec::new();
        let mut results: Vec<(AgentRole, String)> = Vec::new();
        let mut prior: Option<String> = None;

        for (role, subtask) in self.decompose(task) {
            let Some(worker) = self.find_worker(role) else {
                transcript.push(TaskMessage {
                    sender: self.name.clone(),
                    receiver: self.name.clone(),
                    content: format!("no worker registered for role {role}"),
                    kind: MessageKind::Info,
                });
                continue;
            };

            let full_task = match &prior {
                Some(previous) => format!("{subtask}\nPrior step output: {previous}"),
                None => subtask.clone(),
            };

            transcript.push(TaskMessage {
                sender: self.name.clone(),
                receiver: worker.name().to_string(),
                content: full_task.clone(),
                kind: MessageKind::Assignment,
            });

            let output = worker.process(engine, &full_task);
            tracing::debug!(worker = worker.name(), "subtask complete");

            transcript.push(TaskMessage {
                sender: worker.name().to_string(),
                receiver: self.name.clone(),
                content: output.clone(),
                kind: MessageKind::Result,
            });

            prior = Some(output.clone());
            results.push((role, output));
        }

        let result = results
            .iter()
            .enumerate()
            .map(|(i, (role, output))| format!("Step {} ({role}): {output}", i + 1))
            .collect::<Vec<_>>()
            .join("\n\n");

        SupervisionReport { result, transcript }
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Supervisor")
            .field("name", &self.name)
            .field("workers", &self.workers.len())
            .finish()
    }
}

/// A supervisor with the four standard workers registered.
pub fn default_supervisor() -> Supervisor {
    let mut supervisor = Supervisor::new();
    supervisor.register(Box::new(Researcher));
    supervisor.register(Box::new(Writer));
    supervisor.register(Box::new(Reviewer));
    supervisor.register(Box::new(Executor));
    supervisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    fn sample_engine() -> Engine {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        engine.insert_triple("AI Agents", "uses", "Reasoning");
        engine.insert_triple("LangChain", "builds", "AI Agents");
        engine
    }

    #[test]
    fn decompose_research_task() {
        let supervisor = default_supervisor();
        let steps = supervisor.decompose("Research AI Agents and create a summary");
        let roles: Vec<AgentRole> = steps.iter().map(|(r, _)| *r).collect();
        assert_eq!(
            roles,
            vec![AgentRole::Researcher, AgentRole::Writer, AgentRole::Reviewer]
        );
    }

    #[test]
    fn decompose_fallback_is_executor() {
        let supervisor = default_supervisor();
        let steps = supervisor.decompose("Do the thing");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].0, AgentRole::Executor);
    }

    #[test]
    fn run_threads_results_between_steps() {
        let engine = sample_engine();
        let supervisor = default_supervisor();

        let report = supervisor.run(&engine, "Research AI Agents and write a summary");
        assert!(report.result.contains("Step 1 (researcher)"));
        assert!(report.result.contains("AI Agents uses Reasoning"));
        // The writer saw the researcher's output.
        assert!(report.result.contains("Step 2 (writer): Draft:"));
        assert!(report.result.contains("Step 3 (reviewer)"));
        // Assignment + Result per step.
        assert_eq!(report.transcript.len(), 6);
    }

    #[test]
    fn missing_role_is_noted_not_fatal() {
        let engine = sample_engine();
        let mut supervisor = Supervisor::new();
        supervisor.register(Box::new(Executor));

        let report = supervisor.run(&engine, "Research something");
        assert!(
            report
                .transcript
                .iter()
                .any(|m| m.kind == MessageKind::Info && m.content.contains("researcher"))
        );
    }

    #[test]
    fn researcher_reads_the_graph() {
        let engine = sample_engine();
        let researcher = Researcher;

        let out = researcher.process(&engine, "Tell me about LangChain");
        assert!(out.contains("LangChain builds AI Agents"));
    }

    #[test]
    fn reviewer_flags_brief_content() {
        let engine = sample_engine();
        let reviewer = Reviewer;

        assert!(reviewer.process(&engine, "short").contains("too brief"));
        assert!(
            reviewer
                .process(&engine, "a sufficiently long piece of content to pass review")
                .contains("approved")
        );
    }
}
