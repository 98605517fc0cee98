mod anthropic;
mod factory;
mod fallback;
mod google;
mod open_ai;
mod prompt;
mod proxy;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{
    build_plan_prompt, build_recipe_prompt, DEFAULT_RECIPE_PROMPT, IMAGE_PROMPT_PREFIX,
    SUSTAINABLE_CHEF_PROMPT,
};
pub use proxy::ProxyProvider;

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::error::Error;
use std::time::Duration;

/// A base64 encoded photo sent along with the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub base64: String,
    pub mime_type: String,
}

impl ImageData {
    pub fn jpeg(base64: impl Into<String>) -> Self {
        ImageData {
            base64: base64.into(),
            mime_type: "image/jpeg".to_string(),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Everything a provider needs for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub image: Option<ImageData>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            system_instruction: SUSTAINABLE_CHEF_PROMPT.to_string(),
            prompt: prompt.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<ImageData>) -> Self {
        self.image = image;
        self
    }
}

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Run the request and return the raw text the model produced.
    ///
    /// The text is expected, not guaranteed, to be JSON.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Fails with the body text when the provider answered with a non-2xx status.
pub(crate) async fn check_status(
    provider: &str,
    response: Response,
) -> Result<Response, Box<dyn Error + Send + Sync>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| crate::extract::provider_error(&value))
        .unwrap_or(body);
    Err(format!("{} API error ({}): {}", provider, status, message).into())
}
