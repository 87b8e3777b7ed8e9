// src/extract/config.rs
//! Orchestrator configuration: which provider to build and with what key.

use std::sync::Arc;
use std::{env, fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use super::provider::{DisabledProvider, DynProvider, MockProvider, OpenAiProvider};

pub const DEFAULT_EXTRACTOR_CONFIG_PATH: &str = "config/extractor.json";
pub const ENV_EXTRACTOR_CONFIG_PATH: &str = "EXTRACTOR_CONFIG_PATH";

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub enabled: bool,
    /// "openai" | "mock" (case-insensitive)
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// "ENV" means: read from OPENAI_API_KEY
    pub api_key: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: "openai".to_string(),
            model: default_model(),
            api_key: "ENV".to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut cfg: ExtractorConfig = serde_json::from_str(&data)?;

        // Normalize provider
        cfg.provider = cfg.provider.to_lowercase();

        // Resolve api key if "ENV"; only the openai provider needs one
        if cfg.enabled
            && cfg.provider == "openai"
            && cfg.api_key.trim().eq_ignore_ascii_case("env")
        {
            cfg.api_key = env::var("OPENAI_API_KEY")
                .map_err(|_| anyhow::anyhow!("Missing OPENAI_API_KEY env var"))?;
        }

        Ok(cfg)
    }

    /// Load from `EXTRACTOR_CONFIG_PATH` or the default path. A missing file
    /// yields the disabled default; a present but broken one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(ENV_EXTRACTOR_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXTRACTOR_CONFIG_PATH));
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Build the provider this config describes.
    pub fn build_provider(&self) -> DynProvider {
        if !self.enabled {
            return Arc::new(DisabledProvider);
        }
        match self.provider.as_str() {
            "openai" => Arc::new(OpenAiProvider::new(self.api_key.clone(), self.model.clone())),
            "mock" => Arc::new(MockProvider::default()),
            _ => Arc::new(DisabledProvider),
        }
    }
}
