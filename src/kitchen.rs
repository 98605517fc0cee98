//! Ties a provider to the response pipeline.
//!
//! Every call goes provider text → [`parse_response`] → [`provider_error`]
//! check → [`extract_recipes`] → normalization or plan assembly.

use log::{debug, info, warn};
use serde_json::Value;

use crate::config::AiConfig;
use crate::error::KitchenError;
use crate::extract::{extract_recipes, parse_response, provider_error};
use crate::model::{DailyPlan, Recipe};
use crate::normalize::normalize_all;
use crate::planner::{build_week_plan, PlanLength};
use crate::providers::{
    build_plan_prompt, build_recipe_prompt, FallbackProvider, GenerationRequest, ImageData,
    LlmProvider,
};

pub struct Kitchen {
    provider: Box<dyn LlmProvider>,
}

impl Kitchen {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Kitchen { provider }
    }

    /// Builds the provider chain described by `config`.
    pub fn from_config(config: &AiConfig) -> Result<Self, KitchenError> {
        let provider =
            FallbackProvider::new(config).map_err(|e| KitchenError::Provider(e.to_string()))?;
        Ok(Kitchen::new(Box::new(provider)))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Asks for recipes matching `prompt` and, optionally, a photo.
    ///
    /// A blank prompt falls back to the default "3 sustainable recipes"
    /// request. A response without any recipes is an empty list, not an
    /// error.
    pub async fn generate_recipes(
        &self,
        prompt: &str,
        image: Option<ImageData>,
    ) -> Result<Vec<Recipe>, KitchenError> {
        let request = GenerationRequest::new(build_recipe_prompt(prompt, image.is_some()))
            .with_image(image);

        let raw = self.request(&request).await?;
        let recipes = normalize_all(&raw);
        info!("Generated {} recipes", recipes.len());
        Ok(recipes)
    }

    /// Asks for a meal plan and assembles exactly `length.days()` days.
    ///
    /// An empty response yields an empty plan rather than a week of
    /// placeholders.
    pub async fn generate_week_plan(
        &self,
        preferences: &str,
        length: PlanLength,
    ) -> Result<Vec<DailyPlan>, KitchenError> {
        let request = GenerationRequest::new(build_plan_prompt(preferences, length));

        let raw_days = self.request(&request).await?;
        if raw_days.is_empty() {
            warn!("Provider returned no plan days");
            return Ok(Vec::new());
        }
        Ok(build_week_plan(&raw_days, length))
    }

    async fn request(&self, request: &GenerationRequest) -> Result<Vec<Value>, KitchenError> {
        debug!("Sending request to {}", self.provider.provider_name());
        let text = self
            .provider
            .generate(request)
            .await
            .map_err(|e| KitchenError::Provider(e.to_string()))?;

        let response = parse_response(&text);
        if let Some(message) = provider_error(&response) {
            return Err(KitchenError::Provider(message));
        }
        Ok(extract_recipes(&response))
    }
}
