use crate::config::ProviderConfig;
use crate::providers::{check_status, http_client, GenerationRequest, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or("GOOGLE_API_KEY not found in config or environment")?;

        let model = if config.model.is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            config.model.clone()
        };

        Ok(GoogleProvider {
            client: http_client(timeout),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 8192,
        }
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        let mut parts = Vec::new();
        if let Some(image) = &request.image {
            parts.push(json!({
                "inlineData": {
                    "mimeType": image.mime_type,
                    "data": image.base64
                }
            }));
        }
        parts.push(json!({ "text": request.prompt }));

        json!({
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_tokens,
                "responseMimeType": "application/json"
            }
        })
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(request))
            .send()
            .await?;
        let response = check_status("Google Gemini", response).await?;

        let response_body: Value = response.json().await?;
        debug!("Google Gemini response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let error_code = error["code"].as_i64().unwrap_or(0);
            let error_message = error["message"].as_str().unwrap_or("Unknown error");
            return Err(format!(
                "Google Gemini API error ({}): {}",
                error_code, error_message
            )
            .into());
        }

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or("Failed to extract content from Google Gemini response")?
            .to_string();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ImageData;
    use mockito::{Matcher, Server};

    #[test]
    fn test_provider_name() {
        let mut config = ProviderConfig::for_model("gemini-2.0-flash");
        config.api_key = Some("test-key".to_string());

        let provider = GoogleProvider::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_request_body_puts_image_first() {
        let provider = GoogleProvider::with_base_url(
            "key".to_string(),
            "http://localhost".to_string(),
            "gemini-2.0-flash".to_string(),
        );
        let request =
            GenerationRequest::new("what can I cook?").with_image(Some(ImageData::jpeg("Zm9v")));

        let body = provider.request_body(&request);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["data"], "Zm9v");
        assert_eq!(parts[1]["text"], "what can I cook?");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "fake_key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {"parts": [{"text": "{\"recipes\": [{\"title\": \"Dal\"}]}"}]}
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "fake_key".to_string(),
            server.url(),
            "gemini-2.0-flash".to_string(),
        );
        let text = provider
            .generate(&GenerationRequest::new("lentils"))
            .await
            .unwrap();

        assert!(text.contains("Dal"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"code": 503, "message": "The model is overloaded."}}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "fake_key".to_string(),
            server.url(),
            "gemini-2.0-flash".to_string(),
        );
        let err = provider
            .generate(&GenerationRequest::new("lentils"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("overloaded"));
        mock.assert_async().await;
    }
}
