//! Sustainable recipe generation: provider calls, response repair,
//! meal plans, shopping lists and a saved-recipe box.

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod images;
pub mod ingredients;
pub mod kitchen;
pub mod model;
pub mod normalize;
pub mod planner;
pub mod providers;
pub mod saved;
pub mod shopping;

pub use builder::{GenerationResult, ProviderKind, RecipeGenerator, RecipeGeneratorBuilder};
pub use config::AiConfig;
pub use error::{KitchenError, PlannerError};
pub use images::ImageSource;
pub use kitchen::Kitchen;
pub use model::{DailyPlan, Difficulty, MealType, Recipe, Weekday};
pub use planner::{build_week_plan, PlanLength, WeeklyPlanner};
pub use saved::{JsonFileStore, KeyValueStore, MemoryStore, RecipeBox, SavedRecipes};
pub use shopping::{build_shopping_list, to_checklist_text};

/// Suggests recipes for `prompt` using the configured providers.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), eatwell::KitchenError> {
/// let recipes = eatwell::generate_recipes("leftover rice, spinach").await?;
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipes(prompt: &str) -> Result<Vec<Recipe>, KitchenError> {
    let config = AiConfig::load()?;
    Kitchen::from_config(&config)?
        .generate_recipes(prompt, None)
        .await
}

/// Generates a meal plan of the configured length from free text preferences.
pub async fn generate_week_plan(preferences: &str) -> Result<Vec<DailyPlan>, KitchenError> {
    let config = AiConfig::load()?;
    Kitchen::from_config(&config)?
        .generate_week_plan(preferences, config.planner.plan_length())
        .await
}

/// Normalized recipes from any provider response text.
///
/// Markdown fences, wrapper objects and bare arrays are all accepted;
/// anything unusable yields an empty list.
pub fn recipes_from_text(text: &str) -> Vec<Recipe> {
    let response = extract::parse_response(text);
    normalize::normalize_all(&extract::extract_recipes(&response))
}
