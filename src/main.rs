//! noema CLI: in-memory knowledge graph engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use noema::agent::{QaAgent, ReactAgent, ReactConfig, default_supervisor, tools};
use noema::engine::{Engine, EngineConfig};
use noema::graph::TriplePattern;
use noema::seeds::SeedRegistry;

#[derive(Parser)]
#[command(name = "noema", version, about = "In-memory knowledge graph engine")]
struct Cli {
    /// Seed packs to apply before running the command (default: all known).
    #[arg(long, global = true)]
    seed: Vec<String>,

    /// Directory of extra seed packs (each `<pack>/seed.toml`).
    #[arg(long, global = true)]
    seeds_dir: Option<PathBuf>,

    /// Default depth bound for path searches.
    #[arg(long, global = true, default_value = "5")]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage seed packs.
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },

    /// Show engine info and statistics.
    Info,

    /// Print every stored fact as a sentence.
    Facts,

    /// List an entity's outgoing relationships.
    Neighbors {
        /// Entity to inspect.
        entity: String,

        /// Only follow this relationship (exact match).
        #[arg(long)]
        relationship: Option<String>,
    },

    /// Look up triples matching optional filters.
    Query {
        /// Required subject, exact match.
        #[arg(long)]
        subject: Option<String>,

        /// Required predicate, exact match.
        #[arg(long)]
        predicate: Option<String>,

        /// Required object, exact match.
        #[arg(long)]
        object: Option<String>,
    },

    /// Find a shortest relation path between two entities.
    Path {
        /// Start entity.
        from: String,

        /// Target entity.
        to: String,
    },

    /// Answer a question from the graph.
    Ask {
        /// The question, e.g. "What is Machine Learning?".
        question: String,
    },

    /// Run the ReAct loop on a question, printing the reasoning trace.
    React {
        /// The question to reason about.
        question: String,

        /// Maximum Thought → Action → Observation iterations.
        #[arg(long, default_value = "5")]
        max_iterations: usize,
    },

    /// Run a task through the supervisor/worker crew.
    Crew {
        /// Task description, e.g. "Research AI Agents and summarize".
        task: String,
    },

    /// List available tools.
    Tools,

    /// Export the graph as JSON.
    Export,
}

#[derive(Subcommand)]
enum SeedAction {
    /// List available seed packs.
    List,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let registry = match &cli.seeds_dir {
        Some(dir) => SeedRegistry::discover(dir),
        None => SeedRegistry::bundled(),
    };

    if let Commands::Seed { action } = &cli.command {
        match action {
            SeedAction::List => {
                for pack in registry.list() {
                    println!(
                        "{:<16} v{:<8} {} ({} triples)",
                        pack.id,
                        pack.version,
                        pack.description,
                        pack.triples.len()
                    );
                }
            }
        }
        return Ok(());
    }

    let mut engine = Engine::new(EngineConfig {
        default_max_depth: cli.max_depth,
    })?;

    let pack_ids: Vec<String> = if cli.seed.is_empty() {
        registry.list().iter().map(|p| p.id.clone()).collect()
    } else {
        cli.seed.clone()
    };
    registry.apply_all(&pack_ids, &mut engine)?;

    match cli.command {
        Commands::Seed { .. } => unreachable!("handled above"),

        Commands::Info => {
            print!("{}", engine.info());
        }

        Commands::Facts => {
            for fact in QaAgent::new().facts(&engine) {
                println!("{fact}");
            }
        }

        Commands::Neighbors {
            entity,
            relationship,
        } => {
            let pairs = engine.neighbors(&entity, relationship.as_deref());
            if pairs.is_empty() {
                println!("No outgoing relationships found for \"{entity}\".");
            }
            for (rel, neighbor) in pairs {
                println!("\"{entity}\" --[{rel}]--> \"{neighbor}\"");
            }
        }

        Commands::Query {
            subject,
            predicate,
            object,
        } => {
            let mut pattern = TriplePattern::any();
            if let Some(s) = subject {
                pattern = pattern.with_subject(s);
            }
            if let Some(p) = predicate {
                pattern = pattern.with_predicate(p);
            }
            if let Some(o) = object {
                pattern = pattern.with_object(o);
            }
            for triple in engine.query(&pattern) {
                println!("{triple}");
            }
        }

        Commands::Path { from, to } => match engine.find_path(&from, &to, None) {
            Some(path) if path.is_empty() => {
                println!("\"{from}\" and \"{to}\" are the same entity (zero hops).");
            }
            Some(path) => {
                for triple in path {
                    println!("{triple}");
                }
            }
            None => {
                println!(
                    "No path from \"{from}\" to \"{to}\" within {} hop(s).",
                    cli.max_depth
                );
            }
        },

        Commands::Ask { question } => {
            print!("{}", ensure_newline(QaAgent::new().answer(&engine, &question)));
        }

        Commands::React {
            question,
            max_iterations,
        } => {
            let agent = ReactAgent::new(ReactConfig { max_iterations });
            let outcome = agent.run(&mut engine, &question)?;
            for (i, step) in outcome.steps.iter().enumerate() {
                println!("--- Iteration {} ---", i + 1);
                println!("Thought:     {}", step.thought);
                println!("Action:      {}", step.action);
                println!("Observation: {}", step.observation);
                println!();
            }
            println!("Final answer: {}", outcome.answer);
        }

        Commands::Crew { task } => {
            let supervisor = default_supervisor();
            let report = supervisor.run(&engine, &task);
            println!("{}", report.result);
        }

        Commands::Tools => {
            for sig in tools::default_registry().list() {
                println!("{}: {}", sig.name, sig.description);
                for param in sig.parameters {
                    let req = if param.required { "required" } else { "optional" };
                    println!("  --{} ({req}): {}", param.name, param.description);
                }
            }
        }

        Commands::Export => {
            let json = serde_json::to_string_pretty(&engine.export()).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
