//! HuggingFaceClassifier - text classification through the Hugging Face Inference API.
//!
//! Sends `{"inputs": text}` to `{endpoint}/{model}` and returns the
//! highest-scoring label. The default model is the SST-2 fine-tuned DistilBERT,
//! which only ever emits `POSITIVE` / `NEGATIVE`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use sentibot_core::config::ClassifierConfig;
use sentibot_core::{ClassifierOutput, Result, SentibotError, SentimentClassifier};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BACKEND: &str = "huggingface";

/// Classifier implementation that talks to the Hugging Face Inference HTTP API.
#[derive(Clone)]
pub struct HuggingFaceClassifier {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
}

impl HuggingFaceClassifier {
    /// Creates a classifier for `model` served under `endpoint`, without auth.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_token: None,
        }
    }

    /// Builds a classifier from the `[classifier]` config section.
    ///
    /// # Errors
    ///
    /// Returns a config error if the HTTP client cannot be constructed.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| SentibotError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Adds a bearer token sent with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }

    async fn send_request(&self, body: &InferenceRequest<'_>) -> Result<String> {
        let mut request = self.client.post(self.url()).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            let kind = if err.is_timeout() {
                "timed out"
            } else if err.is_connect() {
                "connection failed"
            } else {
                "request failed"
            };
            SentibotError::classifier(BACKEND, format!("Inference API {kind}: {err}"))
        })?;

        let status = response.status();
        let body_text = response.text().await.map_err(|err| {
            SentibotError::classifier(BACKEND, format!("Failed to read response body: {err}"))
        })?;

        if !status.is_success() {
            return Err(map_http_error(status, &body_text));
        }

        Ok(body_text)
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        BACKEND
    }

    async fn classify(&self, text: &str) -> Result<ClassifierOutput> {
        if text.trim().is_empty() {
            return Err(SentibotError::EmptyInput);
        }

        tracing::debug!(model = %self.model, chars = text.len(), "Calling inference API");
        let body = self.send_request(&InferenceRequest { inputs: text }).await?;
        parse_response(&body)
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
struct LabelScore {
    label: String,
    score: f64,
}

/// The API answers `[[{label, score}, ...]]` for a single input, while some
/// deployments flatten it to `[{label, score}, ...]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

fn parse_response(body: &str) -> Result<ClassifierOutput> {
    let parsed: InferenceResponse = serde_json::from_str(body).map_err(|err| {
        SentibotError::classifier(BACKEND, format!("Unexpected response format: {err}"))
    })?;

    let candidates = match parsed {
        InferenceResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
        InferenceResponse::Flat(candidates) => candidates,
    };

    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|top| ClassifierOutput::new(top.label, top.score))
        .ok_or_else(|| SentibotError::classifier(BACKEND, "Inference API returned no labels"))
}

fn map_http_error(status: StatusCode, body: &str) -> SentibotError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|err| match err.estimated_time {
            Some(secs) => format!("{} (ready in ~{secs:.0}s)", err.error),
            None => err.error,
        })
        .unwrap_or_else(|_| body.to_string());

    SentibotError::classifier(BACKEND, format!("HTTP {}: {detail}", status.as_u16()))
}
