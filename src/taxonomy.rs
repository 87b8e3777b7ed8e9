// src/taxonomy.rs
//! Closed category vocabulary: an ordered, read-only list of known recipe
//! category labels. Loaded once at startup, never mutated afterwards.
//!
//! The default vocabulary ships as a versioned JSON asset embedded into the
//! binary; an alternate file can be injected via `TAXONOMY_PATH` so matching
//! logic can be tested against other vocabularies.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TAXONOMY_PATH: &str = "config/categories.json";
pub const ENV_TAXONOMY_PATH: &str = "TAXONOMY_PATH";

static BUILTIN: Lazy<Taxonomy> = Lazy::new(|| {
    let raw = include_str!("../config/categories.json");
    Taxonomy::from_json_str(raw).expect("valid embedded category list")
});

#[derive(Debug, Clone, Deserialize)]
struct TaxonomyFile {
    #[allow(dead_code)] // informational; bumped when the label list changes
    version: u32,
    labels: Vec<String>,
}

/// Ordered category labels. Order is significant: it is the tie-break order
/// for the matcher (first match wins within a tier). Comparison elsewhere is
/// case-insensitive; labels keep the casing stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    labels: Vec<String>,
}

impl Taxonomy {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let file: TaxonomyFile = serde_json::from_str(raw).context("invalid taxonomy JSON")?;
        Ok(Self {
            labels: file.labels,
        })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read taxonomy at {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Resolve the process vocabulary: `TAXONOMY_PATH` when set, then the
    /// default config file when present, otherwise the embedded asset.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(p) = std::env::var(ENV_TAXONOMY_PATH) {
            return Self::from_path(&PathBuf::from(p));
        }
        let default = Path::new(DEFAULT_TAXONOMY_PATH);
        if default.exists() {
            return Self::from_path(default);
        }
        Ok(BUILTIN.clone())
    }

    /// The embedded default vocabulary.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
