//! Hugging Face Inference API client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::gateway::{GatewayError, GatewayResult, ModelGateway};
use crate::models::config::ModelConfig;

#[derive(Debug, Serialize)]
struct TextGenerationRequest {
    inputs: String,
    parameters: TextGenerationParameters,
}

#[derive(Debug, Serialize)]
struct TextGenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    do_sample: bool,
    repetition_penalty: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

/// Gateway backed by the hosted Hugging Face inference endpoints.
#[derive(Clone)]
pub struct HuggingFaceGateway {
    http_client: Client,
    api_token: String,
    base_url: String,
    text_model: String,
    caption_model: String,
    caption_timeout: Duration,
}

impl HuggingFaceGateway {
    /// Create a client from the model settings.
    ///
    /// Fails with [`GatewayError::Config`] when no API token is configured.
    pub fn new(config: &ModelConfig) -> GatewayResult<Self> {
        let api_token = config.api_token.trim();
        if api_token.is_empty() {
            return Err(GatewayError::Config(
                "Missing HUGGINGFACEHUB_API_TOKEN".to_string(),
            ));
        }

        Ok(Self {
            http_client: Client::new(),
            api_token: api_token.to_string(),
            base_url: config.inference_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            caption_model: config.caption_model.clone(),
            caption_timeout: Duration::from_secs(config.caption_timeout_secs),
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    async fn post(
        &self,
        model: &str,
        body: &impl Serialize,
        timeout: Option<Duration>,
    ) -> GatewayResult<reqwest::Response> {
        let mut request = self
            .http_client
            .post(self.model_url(model))
            .bearer_auth(&self.api_token)
            .json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            log::warn!("Inference request to {model} failed: {e}");
            GatewayError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Inference API error from {model}: {status} {error_text}");
            return Err(GatewayError::Api(format!("{status}: {error_text}")));
        }

        Ok(response)
    }
}

/// Render chat-style instructions for a plain text-generation endpoint.
pub fn render_chat_prompt(system: &str, user: &str) -> String {
    format!("System: {system}\nHuman: {user}")
}

/// Pull the caption out of a captioning response.
///
/// Captioning models answer `[{"generated_text": "..."}]`; any other shape is
/// returned as its JSON text.
pub fn caption_from_response(body: Value) -> String {
    if let Some(text) = body
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| item.get("generated_text"))
        .and_then(Value::as_str)
    {
        return text.to_string();
    }
    body.to_string()
}

fn generated_text(response: TextGenerationResponse) -> GatewayResult<String> {
    let text = match response {
        TextGenerationResponse::Batch(items) => items
            .into_iter()
            .next()
            .map(|item| item.generated_text)
            .ok_or_else(|| GatewayError::Parse("empty generation response".to_string()))?,
        TextGenerationResponse::Single(item) => item.generated_text,
    };
    Ok(text.trim().to_string())
}

#[async_trait]
impl ModelGateway for HuggingFaceGateway {
    async fn caption(&self, image_url: &str) -> GatewayResult<String> {
        let response = self
            .post(
                &self.caption_model,
                &json!({ "inputs": image_url }),
                Some(self.caption_timeout),
            )
            .await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        Ok(caption_from_response(body))
    }

    async fn generate_text(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> GatewayResult<String> {
        let start = Instant::now();
        let request = TextGenerationRequest {
            inputs: render_chat_prompt(system, user),
            parameters: TextGenerationParameters {
                max_new_tokens: max_tokens,
                temperature,
                do_sample: true,
                repetition_penalty: 1.05,
                return_full_text: false,
            },
        };

        let response = self.post(&self.text_model, &request, None).await?;
        let body: TextGenerationResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        log::debug!(
            "Text generation with {} took {} ms",
            self.text_model,
            start.elapsed().as_millis()
        );

        generated_text(body)
    }
}
