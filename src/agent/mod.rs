//! Agent layer: tool-using reasoning over the knowledge graph.
//!
//! The agents wrap an [`Engine`](crate::engine::Engine) and add:
//! - **Tools** (compile-time trait impls with runtime registration)
//! - **ReAct loop** (Thought → Action → Observation iteration)
//! - **Question answering** (keyword intent classification, no LLM)
//! - **Orchestration** (supervisor/worker task decomposition)

pub mod error;
pub mod multi;
pub mod qa;
pub mod react;
pub mod tool;
pub mod tools;

pub use error::{AgentError, AgentResult};
pub use multi::{
    AgentRole, MessageKind, SupervisionReport, Supervisor, TaskMessage, Worker,
    default_supervisor,
};
pub use qa::{QaAgent, QuestionIntent, classify_question};
pub use react::{ReactAgent, ReactConfig, ReactOutcome, ReactStep};
pub use tool::{Tool, ToolInput, ToolOutput, ToolRegistry, ToolSignature};
