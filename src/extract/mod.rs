// src/extract/mod.rs
//! Extraction orchestrator: prompt → model → parsed record → normalization.
//!
//! The orchestrator is a thin boundary. It formats the few-shot prompt,
//! submits it to a completion provider, parses the textual reply as an
//! [`ExtractionRecord`], and hands the result to the pure core: the
//! category matcher first, then the keyword fallback when the matcher
//! returns empty. Fallback triggers are matched against the *original user
//! input*, never against the model reply.

mod config;
mod prompt;
mod provider;

pub use config::{ExtractorConfig, DEFAULT_EXTRACTOR_CONFIG_PATH, ENV_EXTRACTOR_CONFIG_PATH};
pub use prompt::{build_user_prompt, SYSTEM_PROMPT};
pub use provider::{
    CompletionProvider, DisabledProvider, DynProvider, MockProvider, OpenAiProvider,
};

use tracing::debug;

use crate::fallback::FallbackTable;
use crate::matcher::CategoryMatcher;
use crate::record::{ExtractionOutcome, ExtractionRecord};

pub struct Extractor {
    provider: DynProvider,
    matcher: CategoryMatcher,
    fallback: FallbackTable,
}

impl Extractor {
    pub fn new(provider: DynProvider, matcher: CategoryMatcher, fallback: FallbackTable) -> Self {
        Self {
            provider,
            matcher,
            fallback,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run one extraction. Provider/network trouble is an error; a reply
    /// that is not a JSON record is a normal [`ExtractionOutcome`] value.
    pub async fn extract(&self, text: &str) -> anyhow::Result<ExtractionOutcome> {
        let user = prompt::build_user_prompt(text);
        let reply = self.provider.complete(prompt::SYSTEM_PROMPT, &user).await?;
        Ok(self.normalize_reply(&reply, text))
    }

    /// Pure post-processing of a raw model reply; split out so tests can
    /// drive it without a provider.
    pub fn normalize_reply(&self, reply: &str, original_text: &str) -> ExtractionOutcome {
        let mut record: ExtractionRecord = match serde_json::from_str(reply.trim()) {
            Ok(r) => r,
            Err(_) => return ExtractionOutcome::parse_failure(reply),
        };

        let candidate = record.category.clone();
        let matched = self.matcher.resolve(&candidate);
        if !matched.is_empty() {
            // When normalization changed the label, the name tokens come
            // from the matched label rather than the model's guess.
            if candidate != matched {
                record.keywords_name = matched.split_whitespace().map(str::to_string).collect();
            }
            record.category = matched;
            debug!(category = %record.category, "category normalized");
        } else {
            record.category.clear();
            if let Some(rule) = self.fallback.augment(&mut record, original_text) {
                debug!(trigger = %rule.trigger, "fallback rule applied");
            }
        }
        ExtractionOutcome::Record(record)
    }
}
