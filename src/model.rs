use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ingredients::scale_quantity;

/// A fully populated recipe.
///
/// Every field is always present; see [`crate::normalize::normalize`] for
/// how raw provider output is turned into one. The title doubles as the
/// recipe's identity: two recipes with the same title are the same recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub cooking_time: String,
    pub difficulty: Difficulty,
    pub calories: u32,
    pub servings: u32,
    pub sustainability_score: u8,
    pub eco_tip: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

pub const DEFAULT_TITLE: &str = "Untitled Recipe";
pub const DEFAULT_COOKING_TIME: &str = "20 mins";
pub const DEFAULT_SERVINGS: u32 = 2;
pub const DEFAULT_SUSTAINABILITY_SCORE: u8 = 10;

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            cooking_time: DEFAULT_COOKING_TIME.to_string(),
            difficulty: Difficulty::default(),
            calories: 0,
            servings: DEFAULT_SERVINGS,
            sustainability_score: DEFAULT_SUSTAINABILITY_SCORE,
            eco_tip: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl Recipe {
    /// Returns a copy adjusted to a different number of servings.
    ///
    /// Quantities inside ingredient lines and the calorie count are scaled
    /// by `servings / self.servings`.
    pub fn scaled_to(&self, servings: u32) -> Recipe {
        let servings = servings.max(1);
        let base = self.servings.max(1);
        let multiplier = f64::from(servings) / f64::from(base);

        Recipe {
            servings,
            calories: (f64::from(self.calories) * multiplier).round() as u32,
            ingredients: self
                .ingredients
                .iter()
                .map(|line| scale_quantity(line, multiplier))
                .collect(),
            ..self.clone()
        }
    }

    /// Ingredients as newline separated text, for copying to a clipboard.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join("\n")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive lookup; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of a fixed meal plan; every slot is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub day: String,
    pub breakfast: Recipe,
    pub lunch: Recipe,
    pub snack: Recipe,
    pub dinner: Recipe,
}

impl DailyPlan {
    /// The day's recipes in display order.
    pub fn recipes(&self) -> [&Recipe; 4] {
        [&self.breakfast, &self.lunch, &self.snack, &self.dinner]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Calendar order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Matches a day label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.label().eq_ignore_ascii_case(label))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
