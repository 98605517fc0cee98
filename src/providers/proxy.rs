use crate::config::ProviderConfig;
use crate::providers::{check_status, http_client, GenerationRequest, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::error::Error;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "/generate-recipes";

/// Talks to the site's own serverless function instead of a model API.
///
/// The function holds the real API key and its own system prompt; it only
/// takes the user prompt and an optional photo, and answers with the
/// model's JSON (or `{"error": "..."}`).
pub struct ProxyProvider {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_base64: Option<&'a str>,
}

impl ProxyProvider {
    /// Create a new proxy provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let base_url = config
            .base_url
            .clone()
            .or_else(|| std::env::var("EATWELL_PROXY_URL").ok())
            .ok_or("EATWELL_PROXY_URL not found in config or environment")?;
        let endpoint = config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);

        Ok(ProxyProvider {
            client: http_client(timeout),
            url: join_url(&base_url, endpoint),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        ProxyProvider {
            client: Client::new(),
            url: join_url(&base_url, DEFAULT_ENDPOINT),
        }
    }
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[async_trait]
impl LlmProvider for ProxyProvider {
    fn provider_name(&self) -> &str {
        "proxy"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let body = ProxyRequest {
            prompt: &request.prompt,
            image_base64: request.image.as_ref().map(|image| image.base64.as_str()),
        };

        let response = self.client.post(&self.url).json(&body).send().await?;
        let response = check_status("Proxy", response).await?;

        let text = response.text().await?;
        debug!("Proxy response: {}", text);
        Ok(text)
    }
}
