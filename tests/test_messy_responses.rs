//! Provider output seen in the wild, end to end through extraction and
//! normalization.

use eatwell::extract::{extract_recipes, parse_response};
use eatwell::normalize::{normalize, normalize_all};
use eatwell::{recipes_from_text, Difficulty, Recipe};
use serde_json::json;

#[test]
fn test_wrapper_keys_in_priority_order() {
    let response = json!({
        "weeklyPlan": [{"title": "Ignored"}],
        "meals": [{"title": "Meal"}],
        "recipes": "not an array"
    });
    let items = extract_recipes(&response);
    assert_eq!(items.len(), 1);
    assert_eq!(normalize(&items[0]).title, "Meal");
}

#[test]
fn test_unusable_shapes_are_empty() {
    for response in [
        json!(null),
        json!("recipes"),
        json!({"recipes": {"title": "Not a list"}}),
        json!({"error": {"message": "quota exceeded"}}),
    ] {
        assert!(extract_recipes(&response).is_empty(), "{response}");
    }
}

#[test]
fn test_wrong_types_fall_back() {
    let recipe = normalize(&json!({
        "title": "   ",
        "description": 42,
        "cookingTime": ["30", "mins"],
        "difficulty": "EXPERT",
        "calories": "450",
        "servings": 3.6,
        "sustainabilityScore": 14,
        "ecoTip": null,
        "ingredients": ["1 onion", 2, null, "garlic"],
        "instructions": "Just cook it.",
        "tags": [{"name": "vegan"}]
    }));

    assert_eq!(recipe.title, "Untitled Recipe");
    assert_eq!(recipe.description, "");
    assert_eq!(recipe.cooking_time, "20 mins");
    assert_eq!(recipe.difficulty, Difficulty::Easy);
    assert_eq!(recipe.calories, 0);
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.sustainability_score, 10);
    assert_eq!(recipe.eco_tip, "");
    assert_eq!(recipe.ingredients, vec!["1 onion", "garlic"]);
    assert!(recipe.instructions.is_empty());
    assert!(recipe.tags.is_empty());
}

#[test]
fn test_score_is_clamped_low() {
    let recipe = normalize(&json!({"sustainabilityScore": -3}));
    assert_eq!(recipe.sustainability_score, 1);
}

#[test]
fn test_difficulty_any_case() {
    let recipes = normalize_all(&[
        json!({"difficulty": "hard"}),
        json!({"difficulty": "Medium"}),
        json!({"difficulty": 3}),
    ]);
    let levels: Vec<Difficulty> = recipes.iter().map(|r| r.difficulty).collect();
    assert_eq!(levels, vec![Difficulty::Hard, Difficulty::Medium, Difficulty::Easy]);
}

#[test]
fn test_fenced_response_text() {
    let text = "Here you go!\n```json\n[{\"title\": \"Gazpacho\"}]\n```";
    // prose around the fence is not JSON
    assert!(recipes_from_text(text).is_empty());

    let fenced = "```json\n[{\"title\": \"Gazpacho\"}]\n```";
    assert_eq!(recipes_from_text(fenced)[0].title, "Gazpacho");
    assert_eq!(parse_response("```\n{}\n```"), json!({}));
}

#[test]
fn test_normalized_recipe_serializes_complete() {
    let recipe = normalize(&json!({"title": "Shakshuka"}));
    let value = serde_json::to_value(&recipe).unwrap();

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for key in [
        "title",
        "description",
        "cookingTime",
        "difficulty",
        "calories",
        "servings",
        "sustainabilityScore",
        "ecoTip",
        "ingredients",
        "instructions",
        "tags",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), 11);

    let back: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(back, recipe);
}

#[test]
fn test_scaling_a_generated_recipe() {
    let recipe = normalize(&json!({
        "title": "Pancakes",
        "servings": 2,
        "calories": 300,
        "ingredients": ["1/2 cup flour", "1 egg", "0.5 tsp salt"]
    }));

    let doubled = recipe.scaled_to(4);
    assert_eq!(doubled.servings, 4);
    assert_eq!(doubled.calories, 600);
    assert_eq!(doubled.ingredients, vec!["1 cup flour", "2 egg", "1 tsp salt"]);
    assert_eq!(doubled.ingredients_text(), "1 cup flour\n2 egg\n1 tsp salt");
}
