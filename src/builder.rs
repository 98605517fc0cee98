use std::time::Duration;

use log::debug;

use crate::config::{AiConfig, ProviderConfig};
use crate::error::KitchenError;
use crate::images::{load_image, ImageSource};
use crate::kitchen::Kitchen;
use crate::model::{DailyPlan, Recipe};
use crate::planner::PlanLength;
use crate::providers::ProviderFactory;

/// Result of a generation run
#[derive(Debug, Clone)]
pub enum GenerationResult {
    /// Recipe suggestions
    Recipes(Vec<Recipe>),
    /// A fully populated multi-day plan
    WeekPlan(Vec<DailyPlan>),
}

/// LLM provider selection for the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Google,
    OpenAI,
    Anthropic,
    /// The hosted serverless function
    Proxy,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Proxy => "proxy",
        }
    }
}

/// Builder for configuring and running a recipe or meal plan generation
#[derive(Debug, Default)]
pub struct RecipeGeneratorBuilder {
    text: Option<String>,
    image: Option<ImageSource>,
    plan: Option<PlanLength>,
    provider: Option<ProviderKind>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl RecipeGeneratorBuilder {
    /// Ingredients, cravings or dietary preferences in free text
    ///
    /// # Example
    /// ```
    /// use eatwell::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .text("kale, chickpeas, half a lemon");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a photo of ingredients from a file
    ///
    /// Without text, the default "suggest 3 sustainable recipes" prompt is
    /// used.
    pub fn image(mut self, image_path: impl Into<String>) -> Self {
        self.image = Some(ImageSource::Path(image_path.into()));
        self
    }

    /// Attach a photo that is already base64 encoded (bare or data URL)
    pub fn image_base64(mut self, data: impl Into<String>) -> Self {
        self.image = Some(ImageSource::Base64(data.into()));
        self
    }

    /// Generate a meal plan instead of recipe suggestions
    ///
    /// # Example
    /// ```
    /// use eatwell::{PlanLength, RecipeGenerator};
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .text("vegetarian, high protein")
    ///     .week_plan(PlanLength::WorkWeek);
    /// ```
    pub fn week_plan(mut self, length: PlanLength) -> Self {
        self.plan = Some(length);
        self
    }

    /// Use a specific provider instead of the configured chain
    ///
    /// # Example
    /// ```
    /// use eatwell::{ProviderKind, RecipeGenerator};
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .text("beets")
    ///     .provider(ProviderKind::Anthropic);
    /// ```
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set a timeout for provider requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key for the provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a different host, e.g. a self-hosted proxy
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    fn overrides_provider(&self) -> bool {
        self.provider.is_some()
            || self.api_key.is_some()
            || self.model.is_some()
            || self.base_url.is_some()
    }

    /// Builds the kitchen: the configured fallback chain, or a single
    /// provider when any provider option was set on the builder.
    fn kitchen(&self) -> Result<Kitchen, KitchenError> {
        let mut config = AiConfig::load()?;
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }

        if !self.overrides_provider() {
            return Kitchen::from_config(&config);
        }

        let name = self
            .provider
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| config.default_provider.clone());
        let mut provider_config = config
            .providers
            .get(&name)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::for_model(""));
        if let Some(key) = &self.api_key {
            provider_config.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            provider_config.model = model.clone();
        }
        if let Some(url) = &self.base_url {
            provider_config.base_url = Some(url.clone());
        }
        debug!("Using single provider '{}'", name);

        let provider = ProviderFactory::create(&name, &provider_config, config.request_timeout())
            .map_err(|e| KitchenError::Provider(e.to_string()))?;
        Ok(Kitchen::new(provider))
    }

    /// Run the generation
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Builder` when neither text nor an image was
    /// given, or when an image is combined with a meal plan. Provider and
    /// image loading failures are passed through.
    ///
    /// # Example
    /// ```no_run
    /// # use eatwell::{GenerationResult, RecipeGenerator};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeGenerator::builder()
    ///     .text("kale, chickpeas")
    ///     .build()
    ///     .await?;
    /// if let GenerationResult::Recipes(recipes) = result {
    ///     println!("{} ideas", recipes.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<GenerationResult, KitchenError> {
        let text = self.text.as_deref().unwrap_or("").trim().to_string();
        if text.is_empty() && self.image.is_none() {
            return Err(KitchenError::Builder(
                "No input specified. Use .text() or .image()".to_string(),
            ));
        }

        match self.plan {
            Some(_) if self.image.is_some() => Err(KitchenError::Builder(
                "Meal plans are generated from text preferences only".to_string(),
            )),
            Some(length) => {
                let kitchen = self.kitchen()?;
                let plan = kitchen.generate_week_plan(&text, length).await?;
                Ok(GenerationResult::WeekPlan(plan))
            }
            None => {
                let image = match &self.image {
                    Some(source) => Some(load_image(source).await?),
                    None => None,
                };
                let kitchen = self.kitchen()?;
                let recipes = kitchen.generate_recipes(&text, image).await?;
                Ok(GenerationResult::Recipes(recipes))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeGenerator;

impl RecipeGenerator {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use eatwell::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder();
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }
}
