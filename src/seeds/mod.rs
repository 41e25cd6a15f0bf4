//! Seed packs: knowledge bootstrapping for a fresh engine.
//!
//! A seed pack is a TOML-defined bundle of triples that can be applied to an
//! engine to populate a graph. One pack is bundled into the binary
//! (`ai-landscape`); more can be discovered from a directory of
//! `<pack>/seed.toml` files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::Engine;

// ── Errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, Diagnostic)]
pub enum SeedError {
    #[error("seed pack not found: \"{id}\"")]
    #[diagnostic(
        code(noema::seed::not_found),
        help("List available packs with `noema seed list`.")
    )]
    NotFound { id: String },

    #[error("failed to parse seed pack: {message}")]
    #[diagnostic(
        code(noema::seed::parse),
        help("Check the seed.toml syntax: a [seed] table plus [[triples]] records.")
    )]
    Parse { message: String },

    #[error("failed to read seed file: {path}")]
    #[diagnostic(code(noema::seed::io), help("Ensure the file exists and is readable."))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;

// ── Seed pack data model ────────────────────────────────────────────────

/// A seed pack: TOML-defined triple bundle.
#[derive(Debug, Clone)]
pub struct SeedPack {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub triples: Vec<SeedTriple>,
    /// Source: `Bundled` or `External(path)`.
    pub source: SeedSource,
}

/// Where a seed pack came from.
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// Bundled into the binary via `include_str!`.
    Bundled,
    /// Loaded from an external file or directory.
    External(PathBuf),
}

/// A triple in a seed pack.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// Report after applying a seed pack.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub id: String,
    pub triples_applied: usize,
}

// ── TOML deserialization helpers ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SeedToml {
    seed: SeedMeta,
    #[serde(default)]
    triples: Vec<SeedTriple>,
}

#[derive(Debug, Deserialize)]
struct SeedMeta {
    id: String,
    name: String,
    version: String,
    description: String,
}

// ── Bundled seed packs ──────────────────────────────────────────────────

const AI_LANDSCAPE_TOML: &str = include_str!("../../data/seeds/ai-landscape/seed.toml");

fn parse_seed_toml(toml_str: &str, source: SeedSource) -> SeedResult<SeedPack> {
    let parsed: SeedToml = toml::from_str(toml_str).map_err(|e| SeedError::Parse {
        message: e.to_string(),
    })?;
    Ok(SeedPack {
        id: parsed.seed.id,
        name: parsed.seed.name,
        version: parsed.seed.version,
        description: parsed.seed.description,
        triples: parsed.triples,
        source,
    })
}

fn bundled_packs() -> Vec<SeedPack> {
    [AI_LANDSCAPE_TOML]
        .iter()
        .filter_map(
            |toml| match parse_seed_toml(toml, SeedSource::Bundled) {
                Ok(pack) => Some(pack),
                Err(e) => {
                    tracing::warn!("Failed to parse bundled seed: {e}");
                    None
                }
            },
        )
        .collect()
}

// ── Seed Registry ───────────────────────────────────────────────────────

/// Registry of available seed packs (bundled + discovered from disk).
pub struct SeedRegistry {
    packs: HashMap<String, SeedPack>,
}

impl SeedRegistry {
    /// Create a registry with only bundled packs.
    pub fn bundled() -> Self {
        let packs = bundled_packs()
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { packs }
    }

    /// Discover seed packs from a directory (in addition to bundled packs).
    ///
    /// Each subdirectory containing a `seed.toml` is loaded as a pack;
    /// unreadable or malformed packs are logged and skipped.
    pub fn discover(seeds_dir: &Path) -> Self {
        let mut registry = Self::bundled();

        if let Ok(entries) = std::fs::read_dir(seeds_dir) {
            for entry in entries.flatten() {
                let seed_file = entry.path().join("seed.toml");
                if seed_file.is_file() {
                    match registry.load_file(&seed_file) {
                        Ok(id) => {
                            tracing::debug!(id = %id, path = %seed_file.display(), "discovered seed pack");
                        }
                        Err(e) => {
                            tracing::warn!(
                                path = %seed_file.display(),
                                "Failed to load seed pack: {e}"
                            );
                        }
                    }
                }
            }
        }

        registry
    }

    /// Load a single seed file into the registry, returning the pack id.
    pub fn load_file(&mut self, path: &Path) -> SeedResult<String> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let pack = parse_seed_toml(&content, SeedSource::External(path.to_path_buf()))?;
        let id = pack.id.clone();
        self.packs.insert(id.clone(), pack);
        Ok(id)
    }

    /// List all available seed packs, sorted by id.
    pub fn list(&self) -> Vec<&SeedPack> {
        let mut packs: Vec<&SeedPack> = self.packs.values().collect();
        packs.sort_by(|a, b| a.id.cmp(&b.id));
        packs
    }

    /// Get a seed pack by id.
    pub fn get(&self, id: &str) -> SeedResult<&SeedPack> {
        self.packs
            .get(id)
            .ok_or_else(|| SeedError::NotFound { id: id.to_string() })
    }

    /// Apply a single seed pack to an engine.
    ///
    /// Application is plain repeated insertion: applying the same pack
    /// twice stores every triple twice, matching the store's duplicate
    /// semantics.
    pub fn apply(&self, pack_id: &str, engine: &mut Engine) -> SeedResult<SeedReport> {
        let pack = self.get(pack_id)?;

        for t in &pack.triples {
            engine.insert_triple(&t.subject, &t.predicate, &t.object);
        }
        tracing::info!(id = %pack.id, triples = pack.triples.len(), "applied seed pack");

        Ok(SeedReport {
            id: pack.id.clone(),
            triples_applied: pack.triples.len(),
        })
    }

    /// Apply multiple seed packs. Returns a report per pack.
    pub fn apply_all(&self, pack_ids: &[String], engine: &mut Engine) -> SeedResult<Vec<SeedReport>> {
        let mut reports = Vec::new();
        for id in pack_ids {
            reports.push(self.apply(id, engine)?);
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn bundled_pack_parses() {
        let packs = bundled_packs();
        assert_eq!(packs.len(), 1);
        assert_eq!(packs[0].id, "ai-landscape");
        assert!(packs[0].triples.len() >= 15);
    }

    #[test]
    fn apply_bundled_pack() {
        let mut engine = engine();
        let reg = SeedRegistry::bundled();

        let report = reg.apply("ai-landscape", &mut engine).unwrap();
        assert_eq!(report.triples_applied, engine.info().triples);
        assert!(engine.entity_exists("Machine Learning"));
        assert!(engine.relationship_exists("includes"));
    }

    #[test]
    fn reapplying_stores_duplicates() {
        let mut engine = engine();
        let reg = SeedRegistry::bundled();

        reg.apply("ai-landscape", &mut engine).unwrap();
        let entities_before = engine.info().entities;
        let triples_before = engine.info().triples;

        reg.apply("ai-landscape", &mut engine).unwrap();
        assert_eq!(engine.info().entities, entities_before);
        assert_eq!(engine.info().triples, triples_before * 2);
    }

    #[test]
    fn unknown_pack_errors() {
        let reg = SeedRegistry::bundled();
        assert!(matches!(
            reg.get("nonexistent"),
            Err(SeedError::NotFound { .. })
        ));
    }

    #[test]
    fn discover_external_pack() {
        let dir = tempfile::TempDir::new().unwrap();
        let pack_dir = dir.path().join("planets");
        std::fs::create_dir_all(&pack_dir).unwrap();
        std::fs::write(
            pack_dir.join("seed.toml"),
            r#"
[seed]
id = "planets"
name = "Planets"
version = "0.1.0"
description = "A tiny solar system"

[[triples]]
subject = "Earth"
predicate = "orbits"
object = "Sun"
"#,
        )
        .unwrap();

        let reg = SeedRegistry::discover(dir.path());
        let ids: Vec<&str> = reg.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ai-landscape", "planets"]);

        let mut engine = engine();
        let report = reg.apply("planets", &mut engine).unwrap();
        assert_eq!(report.triples_applied, 1);
        assert!(engine.entity_exists("Earth"));
    }

    #[test]
    fn malformed_pack_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(&path, "not toml at all [").unwrap();

        let mut reg = SeedRegistry::bundled();
        assert!(matches!(
            reg.load_file(&path),
            Err(SeedError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut reg = SeedRegistry::bundled();
        assert!(matches!(
            reg.load_file(Path::new("/nonexistent/seed.toml")),
            Err(SeedError::Io { .. })
        ));
    }
}
