//! Question answering over the knowledge graph, no LLM required.
//!
//! Questions are classified with regex patterns (first match wins) and
//! entity mentions are found by case-insensitive substring matching against
//! the entity vocabulary. The graph itself only ever receives exact
//! identifier strings; all fuzziness lives here.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::Engine;

// ── Regex patterns ──────────────────────────────────────────────────────

static RE_LOOKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(what|who)\s+is\b").unwrap());

static RE_CONNECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(related|relation|connection|connected|path)\b").unwrap());

/// What kind of answer a question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionIntent {
    /// "What is X?" / "Who is X?" — describe one entity.
    Lookup,
    /// "How are X and Y related?" — find a path between two entities.
    Connection,
    /// Anything else.
    Freeform,
}

/// Classify a question. Patterns are tried in priority order; first match
/// wins.
pub fn classify_question(input: &str) -> QuestionIntent {
    if RE_LOOKUP.is_match(input) {
        QuestionIntent::Lookup
    } else if RE_CONNECTION.is_match(input) {
        QuestionIntent::Connection
    } else {
        QuestionIntent::Freeform
    }
}

/// Keyword question-answering agent over an [`Engine`].
#[derive(Debug, Default)]
pub struct QaAgent;

impl QaAgent {
    /// Create a new agent.
    pub fn new() -> Self {
        Self
    }

    /// Known entities mentioned in the text, ordered by their position in
    /// the text (ties by first-insertion order). Matching is
    /// case-insensitive substring containment.
    pub fn entity_mentions(&self, engine: &Engine, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        let mut found: Vec<(usize, String)> = engine
            .store()
            .entities()
            // The empty identifier is a valid graph token but matches any
            // text, so it is never treated as a mention.
            .filter(|entity| !entity.is_empty())
            .filter_map(|entity| {
                haystack
                    .find(&entity.to_lowercase())
                    .map(|pos| (pos, entity.to_string()))
            })
            .collect();
        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, entity)| entity).collect()
    }

    /// Answer a free-form question from the graph.
    pub fn answer(&self, engine: &Engine, question: &str) -> String {
        match classify_question(question) {
            QuestionIntent::Lookup => self.answer_lookup(engine, question),
            QuestionIntent::Connection => self.answer_connection(engine, question),
            QuestionIntent::Freeform => "I could not map the question to the graph. Try \
                 \"What is <entity>?\" or \"How is <a> connected to <b>?\"."
                .to_string(),
        }
    }

    /// Every stored fact as a plain sentence.
    pub fn facts(&self, engine: &Engine) -> Vec<String> {
        engine
            .store()
            .all_triples()
            .into_iter()
            .map(|t| format!("{} {} {}", t.subject, t.predicate, t.object))
            .collect()
    }

    fn answer_lookup(&self, engine: &Engine, question: &str) -> String {
        let Some(entity) = self.entity_mentions(engine, question).into_iter().next() else {
            return "The question mentions no known entity. Try asking about \
                    specific entities or relationships."
                .to_string();
        };

        // Group neighbors by predicate, preserving first-appearance order.
        let mut info: Vec<(String, Vec<String>)> = Vec::new();
        for (rel, neighbor) in engine.neighbors(&entity, None) {
            match info.iter_mut().find(|(r, _)| *r == rel) {
                Some((_, neighbors)) => neighbors.push(neighbor),
                None => info.push((rel, vec![neighbor])),
            }
        }

        if info.is_empty() {
            return format!("No information found about \"{entity}\".");
        }

        let mut response = format!("Information about {entity}:\n");
        for (rel, neighbors) in info {
            response.push_str(&format!("  {rel}: {}\n", neighbors.join(", ")));
        }
        response
    }

    fn answer_connection(&self, engine: &Engine, question: &str) -> String {
        let mentions = self.entity_mentions(engine, question);
        if mentions.len() < 2 {
            return format!(
                "A connection question needs two known entities; found {}.",
                mentions.len()
            );
        }
        let (start, end) = (&mentions[0], &mentions[1]);

        match engine.find_path(start, end, None) {
            Some(path) if path.is_empty() => {
                format!("\"{start}\" and \"{end}\" are the same entity.")
            }
            Some(path) => {
                let mut response = format!("Path from {start} to {end}:\n");
                for triple in &path {
                    response.push_str(&format!("  {triple}\n"));
                }
                response
            }
            None => format!(
                "No connection found between \"{start}\" and \"{end}\" \
                 within {} hop(s).",
                engine.config().default_max_depth
            ),
        }
    }
}
