//! The user's saved recipes.
//!
//! [`SavedRecipes`] is a plain value with set semantics keyed by title;
//! every operation returns a new collection. [`RecipeBox`] ties one to a
//! [`KeyValueStore`] and writes it back after each change.

mod recipe_box;
mod store;

pub use recipe_box::{RecipeBox, SAVED_RECIPES_KEY};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::model::{DailyPlan, Recipe};
use crate::normalize::normalize;
use crate::planner::is_placeholder;

/// The recipes a batch toggle acts on: the first recipe of each title, with
/// plan placeholders left out.
pub fn toggle_batch(recipes: &[Recipe]) -> Vec<&Recipe> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .filter(|recipe| !is_placeholder(recipe))
        .filter(|recipe| seen.insert(recipe.title.as_str()))
        .collect()
}

/// Saved recipes, in the order they were saved.
///
/// Titles are unique: matching is exact and case-sensitive, so two
/// different dishes that happen to share a title count as one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SavedRecipes {
    recipes: Vec<Recipe>,
}

impl SavedRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unsaves `recipe` if its title is already saved, saves it otherwise.
    pub fn toggle(&self, recipe: &Recipe) -> SavedRecipes {
        if self.contains_title(&recipe.title) {
            SavedRecipes {
                recipes: self
                    .recipes
                    .iter()
                    .filter(|saved| saved.title != recipe.title)
                    .cloned()
                    .collect(),
            }
        } else {
            let mut recipes = self.recipes.clone();
            recipes.push(recipe.clone());
            SavedRecipes { recipes }
        }
    }

    /// Appends every recipe whose title is not saved yet.
    ///
    /// Duplicates inside `incoming` are collapsed too; the first one wins.
    pub fn merge_all<'a, I>(&self, incoming: I) -> SavedRecipes
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut seen: HashSet<&str> = self.recipes.iter().map(|r| r.title.as_str()).collect();
        let mut recipes = self.recipes.clone();

        for recipe in incoming {
            if seen.insert(recipe.title.as_str()) {
                recipes.push(recipe.clone());
            }
        }

        SavedRecipes { recipes }
    }

    /// Merges every slot of a generated plan, placeholders included.
    pub fn merge_plan(&self, plan: &[DailyPlan]) -> SavedRecipes {
        self.merge_all(plan.iter().flat_map(|day| day.recipes()))
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.title == title)
    }

    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.title == title)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    /// JSON array of recipes, the persisted form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.recipes)
    }

    /// Reads the persisted form back.
    ///
    /// Never fails: corrupt text or anything that is not an array gives an
    /// empty collection. Elements that are not objects are skipped and the
    /// rest go through normalization.
    pub fn from_json(text: &str) -> SavedRecipes {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => {
                let recipes: Vec<Recipe> = items
                    .iter()
                    .filter(|item| item.is_object())
                    .map(normalize)
                    .collect();
                if recipes.len() < items.len() {
                    warn!(
                        "Skipped {} saved entries that are not recipes",
                        items.len() - recipes.len()
                    );
                }
                SavedRecipes::new().merge_all(recipes.iter())
            }
            Ok(_) => {
                warn!("Saved recipes are not a JSON array, starting empty");
                SavedRecipes::new()
            }
            Err(e) => {
                warn!("Saved recipes are corrupt ({}), starting empty", e);
                SavedRecipes::new()
            }
        }
    }
}

impl From<Vec<Recipe>> for SavedRecipes {
    fn from(recipes: Vec<Recipe>) -> Self {
        SavedRecipes::new().merge_all(recipes.iter())
    }
}

impl<'a> IntoIterator for &'a SavedRecipes {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
