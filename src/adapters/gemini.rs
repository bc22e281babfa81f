//! Gemini summarization oracle

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::adapters::http::{client, endpoint, read_json};
use crate::config::OracleConfig;
use crate::core::ports::NarrativeOracle;
use crate::error::Service;
use crate::{Error, Result};

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Oracle backed by the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiOracle {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl GeminiOracle {
    /// Create an oracle with the given key
    pub fn new(config: &OracleConfig, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: client(Service::Gemini)?,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl NarrativeOracle for GeminiOracle {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let url = endpoint(&self.api_url, &format!("/v1beta/models/{}:generateContent", self.model));
        let request = self.client.post(url).header("x-goog-api-key", &self.api_key).json(&body);

        let response: GenerateResponse = read_json(Service::Gemini, request).await?;
        response.into_text().ok_or_else(|| Error::decode(Service::Gemini, "no candidate text"))
    }
}
