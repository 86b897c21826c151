// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gemini-backed implementation of the text-generation capability.
//!
//! Talks to the `generateContent` REST endpoint with a JSON response
//! schema for structured suggestions and a plain-text call for status
//! summaries. Configuration comes from the environment; a missing key
//! means the client is simply not constructed and callers fall back to
//! [`NullGenerator`].
//!
//! [`NullGenerator`]: crate::generator::NullGenerator

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use kb_core::{Issue, IssueType, Priority, Suggestion};

use crate::error::{Error, Result};
use crate::generator::TextGenerator;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "KANBO_ASSIST_MODEL";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const SYSTEM_INSTRUCTION: &str =
    "You are a professional Jira ticket generator. You only output valid JSON.";

/// HTTP client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client from the environment. Returns `None` when no API
    /// key is configured, which disables assist entirely.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())?;
        let model = std::env::var(MODEL_ENV)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Some(GeminiClient::new(api_key, model))
    }

    /// Builds a client with an explicit key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint, for test servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    async fn call(&self, request: &GenerateRequest) -> Result<String> {
        let response = self
            .http
            .post(self.request_url())
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;
        response.text().ok_or(Error::EmptyResponse)
    }

    async fn generate(
        &self,
        prompt: &str,
        issue_type: IssueType,
        project_key: &str,
    ) -> Result<Suggestion> {
        let request = GenerateRequest {
            system_instruction: Some(Content::text(SYSTEM_INSTRUCTION)),
            contents: vec![Content::text(detail_prompt(prompt, issue_type, project_key))],
            generation_config: Some(GenerationConfig {
                temperature: 0.1,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(detail_schema()),
            }),
        };
        let text = self.call(&request).await?;
        let body = extract_json(&text).ok_or(Error::EmptyResponse)?;
        let payload: SuggestionPayload = serde_json::from_str(&body)?;
        Ok(payload.into_suggestion())
    }

    async fn summarize_issue(&self, issue: &Issue) -> Result<String> {
        let snapshot = serde_json::to_string(issue)?;
        let request = GenerateRequest {
            system_instruction: None,
            contents: vec![Content::text(format!(
                "Summarize this ticket as a professional status update: {snapshot}"
            ))],
            generation_config: Some(GenerationConfig {
                temperature: 0.0,
                response_mime_type: None,
                response_schema: None,
            }),
        };
        let text = self.call(&request).await?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_details(
        &self,
        prompt: &str,
        issue_type: IssueType,
        project_key: &str,
    ) -> Option<Suggestion> {
        match self.generate(prompt, issue_type, project_key).await {
            Ok(suggestion) if !suggestion.is_empty() => Some(suggestion),
            Ok(_) => {
                debug!(model = %self.model, "model returned an empty suggestion");
                None
            }
            Err(e) => {
                warn!(model = %self.model, error = %e, "suggestion request failed");
                None
            }
        }
    }

    async fn summarize(&self, issue: &Issue) -> Option<String> {
        match self.summarize_issue(issue).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(model = %self.model, error = %e, "summary request failed");
                None
            }
        }
    }
}

/// The instruction sent for structured suggestions.
fn detail_prompt(prompt: &str, issue_type: IssueType, project_key: &str) -> String {
    format!(
        "Generate a professional Jira issue in JSON for project {project_key}.\n\
         Type: {issue_type}\n\
         Idea: {prompt}\n\
         \n\
         Requirements:\n\
         - summary: brief title\n\
         - description: detailed markdown description\n\
         - priority: one of (Highest, High, Medium, Low, Lowest)\n\
         - If Bug: include stepsToReproduce\n\
         - If Story: include acceptanceCriteria"
    )
}

fn detail_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "description": { "type": "STRING" },
            "priority": { "type": "STRING" },
            "acceptanceCriteria": { "type": "STRING" },
            "stepsToReproduce": { "type": "STRING" },
        },
        "required": ["summary", "description", "priority"],
    })
}

/// Pulls the outermost JSON object out of a possibly markdown-fenced
/// reply.
fn extract_json(text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)\{.*\}").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

/// Wire form of a structured suggestion, as the schema asks for it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionPayload {
    summary: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    acceptance_criteria: Option<String>,
    steps_to_reproduce: Option<String>,
}

impl SuggestionPayload {
    /// Converts to the core type. Blank strings become absent fields and
    /// an unrecognized priority is dropped rather than failing the whole
    /// suggestion.
    fn into_suggestion(self) -> Suggestion {
        fn non_blank(field: Option<String>) -> Option<String> {
            field.filter(|s| !s.trim().is_empty())
        }
        Suggestion {
            summary: non_blank(self.summary),
            description: non_blank(self.description),
            priority: self.priority.and_then(|p| p.parse::<Priority>().ok()),
            acceptance_criteria: non_blank(self.acceptance_criteria),
            steps_to_reproduce: non_blank(self.steps_to_reproduce),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Content { parts: vec![Part { text: text.into() }] }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// First candidate's first text part, if any.
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
