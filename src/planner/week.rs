use log::debug;
use serde_json::Value;

use super::PlanLength;
use crate::model::{DailyPlan, MealType, Recipe};
use crate::normalize::normalize;

/// Tag carried by recipes synthesized for empty plan slots.
pub const PLACEHOLDER_TAG: &str = "Planned";

/// Assembles exactly `length.days()` fully populated days.
///
/// Extra raw days are ignored and missing ones are padded. A day without a
/// `day` label is called `"Day N"`. Each slot is normalized on its own; a
/// slot that is absent or `null` gets a placeholder recipe, and a bare
/// string is taken as the recipe title.
pub fn build_week_plan(raw_days: &[Value], length: PlanLength) -> Vec<DailyPlan> {
    let wanted = length.days();
    if raw_days.len() > wanted {
        debug!(
            "Dropping {} extra plan days beyond {}",
            raw_days.len() - wanted,
            wanted
        );
    }

    (0..wanted)
        .map(|index| build_day(raw_days.get(index).unwrap_or(&Value::Null), index))
        .collect()
}

/// The recipe shown for a slot the provider left empty.
pub fn placeholder_recipe(meal: MealType) -> Recipe {
    let (title, instruction) = match meal {
        MealType::Breakfast => (
            "Healthy Breakfast",
            "Enjoy a simple, wholesome breakfast of your choice.",
        ),
        MealType::Lunch => (
            "Balanced Lunch",
            "Put together a balanced lunch with greens, grains and protein.",
        ),
        MealType::Snack => ("Light Snack", "Grab a piece of seasonal fruit or a handful of nuts."),
        MealType::Dinner => (
            "Hearty Dinner",
            "Cook a comforting dinner from what is left in your fridge.",
        ),
    };

    Recipe {
        title: title.to_string(),
        calories: 0,
        instructions: vec![instruction.to_string()],
        tags: vec![PLACEHOLDER_TAG.to_string()],
        ..Recipe::default()
    }
}

/// Whether `recipe` is exactly what [`placeholder_recipe`] makes for some slot.
pub fn is_placeholder(recipe: &Recipe) -> bool {
    MealType::ALL
        .into_iter()
        .any(|meal| *recipe == placeholder_recipe(meal))
}

fn build_day(raw: &Value, index: usize) -> DailyPlan {
    let day = raw
        .get("day")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Day {}", index + 1));

    DailyPlan {
        breakfast: build_slot(raw, MealType::Breakfast),
        lunch: build_slot(raw, MealType::Lunch),
        snack: build_slot(raw, MealType::Snack),
        dinner: build_slot(raw, MealType::Dinner),
        day,
    }
}

fn build_slot(raw_day: &Value, meal: MealType) -> Recipe {
    match raw_day.get(meal.key()) {
        None | Some(Value::Null) => placeholder_recipe(meal),
        Some(Value::String(title)) if !title.trim().is_empty() => Recipe {
            title: title.trim().to_string(),
            ..Recipe::default()
        },
        Some(slot) => normalize(slot),
    }
}
