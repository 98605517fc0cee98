//! Turns whatever the provider sent for one recipe into a [`Recipe`].
//!
//! Upstream output is only loosely shaped like the schema we ask for:
//! fields go missing, arrays arrive as single strings, numbers arrive as
//! strings. Every field is taken only when it has the expected JSON type
//! and otherwise falls back to the default from [`Recipe::default`].

use serde_json::{Map, Value};

use crate::model::{Difficulty, Recipe, DEFAULT_SERVINGS, DEFAULT_TITLE};

/// Builds a recipe from any JSON value. Never fails.
///
/// Non-object input yields an all-default recipe. Numeric fields do not
/// accept numeric strings (`"450"` for calories falls back to `0`).
pub fn normalize(raw: &Value) -> Recipe {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);
    let defaults = Recipe::default();

    let title = string_field(fields, "title")
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let difficulty = fields
        .get("difficulty")
        .and_then(Value::as_str)
        .and_then(Difficulty::parse)
        .unwrap_or_default();

    let servings = number_field(fields, "servings")
        .filter(|servings| *servings >= 1.0)
        .map(|servings| clamp_to_u32(servings).max(1))
        .unwrap_or(DEFAULT_SERVINGS);

    let sustainability_score = number_field(fields, "sustainabilityScore")
        .map(|score| score.round().clamp(1.0, 10.0) as u8)
        .unwrap_or(defaults.sustainability_score);

    Recipe {
        title,
        description: string_field(fields, "description").unwrap_or(defaults.description),
        cooking_time: string_field(fields, "cookingTime").unwrap_or(defaults.cooking_time),
        difficulty,
        calories: number_field(fields, "calories")
            .map(clamp_to_u32)
            .unwrap_or(defaults.calories),
        servings,
        sustainability_score,
        eco_tip: string_field(fields, "ecoTip").unwrap_or(defaults.eco_tip),
        ingredients: string_list(fields, "ingredients"),
        instructions: string_list(fields, "instructions"),
        tags: string_list(fields, "tags"),
    }
}

/// Normalizes every element of an already extracted list.
pub fn normalize_all(raw: &[Value]) -> Vec<Recipe> {
    raw.iter().map(normalize).collect()
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    fields
        .get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
}

// Negative values count as missing and come back as 0.
fn clamp_to_u32(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        value.round().min(f64::from(u32::MAX)) as u32
    }
}

// Only real arrays are accepted; a lone string is not promoted to a list.
fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_empty_object() {
        let recipe = normalize(&json!({}));
        assert_eq!(recipe, Recipe::default());
        assert_eq!(recipe.title, "Untitled Recipe");
        assert_eq!(recipe.cooking_time, "20 mins");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.calories, 0);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.sustainability_score, 10);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.tags.is_empty());
    }

    #[test]
    fn test_normalize_non_object_values() {
        for raw in [json!(null), json!(42), json!("Soup"), json!([1, 2])] {
            assert_eq!(normalize(&raw), Recipe::default());
        }
    }

    #[test]
    fn test_normalize_complete_recipe() {
        let raw = json!({
            "title": "Lentil Dal",
            "description": "Warming and cheap",
            "cookingTime": "35 mins",
            "difficulty": "Medium",
            "calories": 420,
            "servings": 4,
            "sustainabilityScore": 9,
            "ecoTip": "Lentils fix nitrogen in the soil.",
            "ingredients": ["1 cup red lentils", "1 onion"],
            "instructions": ["Rinse lentils", "Simmer"],
            "tags": ["Vegan"]
        });

        let recipe = normalize(&raw);
        assert_eq!(recipe.title, "Lentil Dal");
        assert_eq!(recipe.description, "Warming and cheap");
        assert_eq!(recipe.cooking_time, "35 mins");
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.calories, 420);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.sustainability_score, 9);
        assert_eq!(recipe.eco_tip, "Lentils fix nitrogen in the soil.");
        assert_eq!(recipe.ingredients, vec!["1 cup red lentils", "1 onion"]);
        assert_eq!(recipe.instructions, vec!["Rinse lentils", "Simmer"]);
        assert_eq!(recipe.tags, vec!["Vegan"]);
    }

    #[test]
    fn test_single_string_is_not_an_array() {
        let recipe = normalize(&json!({
            "ingredients": "2 carrots",
            "instructions": "Chop and roast",
            "tags": {"0": "Vegan"}
        }));
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.tags.is_empty());
    }

    #[test]
    fn test_non_string_array_elements_are_dropped() {
        let recipe = normalize(&json!({"ingredients": ["kale", 3, null, {"name": "x"}, "oats"]}));
        assert_eq!(recipe.ingredients, vec!["kale", "oats"]);
    }

    #[test]
    fn test_numeric_strings_fall_back_to_defaults() {
        let recipe = normalize(&json!({
            "calories": "450",
            "servings": "4",
            "sustainabilityScore": "8"
        }));
        assert_eq!(recipe.calories, 0);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.sustainability_score, 10);
    }

    #[test]
    fn test_wrong_scalar_types_fall_back() {
        let recipe = normalize(&json!({
            "title": 12,
            "description": ["a"],
            "cookingTime": 30,
            "difficulty": 3,
            "ecoTip": false
        }));
        assert_eq!(recipe.title, "Untitled Recipe");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.cooking_time, "20 mins");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.eco_tip, "");
    }

    #[test]
    fn test_blank_title_gets_default() {
        assert_eq!(normalize(&json!({"title": "   "})).title, "Untitled Recipe");
    }

    #[test]
    fn test_numeric_ranges() {
        let recipe = normalize(&json!({
            "calories": -50,
            "servings": 0,
            "sustainabilityScore": 14
        }));
        assert_eq!(recipe.calories, 0);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.sustainability_score, 10);

        let recipe = normalize(&json!({
            "calories": 312.6,
            "servings": 3.2,
            "sustainabilityScore": 0
        }));
        assert_eq!(recipe.calories, 313);
        assert_eq!(recipe.servings, 3);
        assert_eq!(recipe.sustainability_score, 1);
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_easy() {
        assert_eq!(
            normalize(&json!({"difficulty": "Expert"})).difficulty,
            Difficulty::Easy
        );
        assert_eq!(
            normalize(&json!({"difficulty": "hard"})).difficulty,
            Difficulty::Hard
        );
    }

    #[test]
    fn test_normalize_all() {
        let recipes = normalize_all(&[json!({"title": "A"}), json!("junk")]);
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "A");
        assert_eq!(recipes[1].title, "Untitled Recipe");
    }

    use proptest::prelude::*;

    const RECIPE_KEYS: [&str; 11] = [
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
    ];

    fn any_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            ".{0,12}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec((".{0,6}", inner), 0..4)
                    .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
            ]
        })
    }

    // Objects whose keys are the recipe fields, holding values of any type.
    fn recipe_shaped_json() -> impl Strategy<Value = Value> {
        prop::collection::vec(
            (prop::sample::select(RECIPE_KEYS.to_vec()), any_json()),
            0..12,
        )
        .prop_map(|pairs| {
            Value::Object(
                pairs
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            )
        })
    }

    proptest! {
        /// Property: any JSON value yields a recipe within the documented ranges
        #[test]
        fn prop_normalize_is_total(raw in prop_oneof![any_json(), recipe_shaped_json()]) {
            let recipe = normalize(&raw);

            prop_assert!(!recipe.title.trim().is_empty());
            prop_assert!(recipe.servings >= 1);
            prop_assert!((1..=10).contains(&recipe.sustainability_score));
            if !raw.is_object() {
                prop_assert_eq!(recipe, Recipe::default());
            }
        }

        /// Property: normalizing the serialized form of a recipe changes nothing
        #[test]
        fn prop_normalize_is_stable(raw in recipe_shaped_json()) {
            let once = normalize(&raw);
            let value = serde_json::to_value(&once).unwrap();
            prop_assert_eq!(normalize(&value), once);
        }
    }
}
