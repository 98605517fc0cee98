use crate::planner::PlanLength;

/// The system prompt for every generation call.
///
/// Loaded from `prompt.txt` at compile time so the wording and the JSON
/// field list can be edited without dealing with Rust string syntax.
pub const SUSTAINABLE_CHEF_PROMPT: &str = include_str!("prompt.txt");

/// Used when the user only uploads a photo.
pub const DEFAULT_RECIPE_PROMPT: &str =
    "Suggest exactly 3 sustainable recipes based on these ingredients.";

/// Put in front of the user's text when a photo is attached.
pub const IMAGE_PROMPT_PREFIX: &str = "Analyze these ingredients/food items. ";

/// User prompt for a recipe suggestion request.
pub fn build_recipe_prompt(user_text: &str, has_image: bool) -> String {
    let text = match user_text.trim() {
        "" => DEFAULT_RECIPE_PROMPT,
        trimmed => trimmed,
    };

    let body = format!(
        "{}\n\nReturn a JSON object of the form {{\"recipes\": [ ... ]}} holding exactly 3 distinct recipes.",
        text
    );

    if has_image {
        format!("{}{}", IMAGE_PROMPT_PREFIX, body)
    } else {
        body
    }
}

/// User prompt for a multi-day meal plan.
pub fn build_plan_prompt(preferences: &str, length: PlanLength) -> String {
    let days = length.days();
    let preferences = match preferences.trim() {
        "" => "High-protein, sustainable, and easy-to-prep meals.",
        trimmed => trimmed,
    };

    format!(
        "Create a {days}-day meal plan starting on Monday. Preferences: {preferences}\n\n\
         Return a JSON object of the form {{\"plan\": [ ... ]}} with exactly {days} entries. \
         Each entry has a \"day\" field with the weekday name and \"breakfast\", \"lunch\", \
         \"snack\" and \"dinner\" fields, each holding one recipe object."
    )
}
