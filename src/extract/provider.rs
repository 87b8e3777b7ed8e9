// src/extract/provider.rs
//! Completion providers behind the extraction orchestrator.
//!
//! The provider does one blocking network call per invocation and nothing
//! else; timeout, retry, and concurrency policy belong to the caller.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit a system + user prompt pair and return the raw model reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Convenient alias used by callers.
pub type DynProvider = Arc<dyn CompletionProvider>;

/// OpenAI provider (Chat Completions API). Requires an API key.
pub struct OpenAiProvider {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("recipe-attribute-extractor/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key,
            model: model.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
            temperature: f32,
            max_tokens: u32,
            top_p: f32,
            frequency_penalty: f32,
            presence_penalty: f32,
        }
        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMsg,
        }
        #[derive(Deserialize)]
        struct ChoiceMsg {
            content: String,
        }

        if self.api_key.is_empty() {
            bail!("missing OpenAI API key");
        }

        let req = Req {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: system,
                },
                Msg {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.0,
            max_tokens: 150,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        let resp = self
            .http
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .context("chat completion request failed")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("chat completion returned {status}");
        }

        let body: Resp = resp
            .json()
            .await
            .context("invalid chat completion body")?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Fixed-reply provider for tests and local runs without credentials.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    pub reply: String,
}

impl MockProvider {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Ok(self.reply.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Always fails; used when extraction is switched off in config.
pub struct DisabledProvider;

#[async_trait]
impl CompletionProvider for DisabledProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        bail!("extraction is disabled");
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
