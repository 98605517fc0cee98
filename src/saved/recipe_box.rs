use log::{debug, info};

use super::{KeyValueStore, SavedRecipes};
use crate::error::KitchenError;
use crate::model::{DailyPlan, Recipe};

/// Storage key the saved collection lives under.
pub const SAVED_RECIPES_KEY: &str = "eatwell-saved-Recipes";

/// Saved recipes bound to a store, persisted after every change.
pub struct RecipeBox<S: KeyValueStore> {
    store: S,
    saved: SavedRecipes,
}

impl<S: KeyValueStore> RecipeBox<S> {
    /// Loads the collection from `store`.
    ///
    /// Missing or corrupt data starts an empty collection; only a failing
    /// store is an error.
    pub async fn open(store: S) -> Result<Self, KitchenError> {
        let saved = match store.get(SAVED_RECIPES_KEY).await? {
            Some(text) => SavedRecipes::from_json(&text),
            None => SavedRecipes::new(),
        };
        debug!("Hydrated {} saved recipes", saved.len());
        Ok(RecipeBox { store, saved })
    }

    pub fn saved(&self) -> &SavedRecipes {
        &self.saved
    }

    pub fn is_saved(&self, recipe: &Recipe) -> bool {
        self.saved.contains_title(&recipe.title)
    }

    /// Saves or unsaves `recipe`; returns whether it is saved afterwards.
    pub async fn toggle(&mut self, recipe: &Recipe) -> Result<bool, KitchenError> {
        let next = self.saved.toggle(recipe);
        self.commit(next).await?;
        let now_saved = self.is_saved(recipe);
        info!(
            "{} '{}'",
            if now_saved { "Saved" } else { "Unsaved" },
            recipe.title
        );
        Ok(now_saved)
    }

    /// Saves every recipe not saved yet; returns how many were added.
    pub async fn save_all(&mut self, recipes: &[Recipe]) -> Result<usize, KitchenError> {
        let next = self.saved.merge_all(recipes);
        self.commit(next).await
    }

    /// Saves every slot of a generated plan.
    pub async fn save_plan(&mut self, plan: &[DailyPlan]) -> Result<usize, KitchenError> {
        let next = self.saved.merge_plan(plan);
        self.commit(next).await
    }

    pub fn into_inner(self) -> (S, SavedRecipes) {
        (self.store, self.saved)
    }

    // In-memory state only changes once the store accepted the write.
    async fn commit(&mut self, next: SavedRecipes) -> Result<usize, KitchenError> {
        self.store.set(SAVED_RECIPES_KEY, &next.to_json()?).await?;
        let added = next.len().saturating_sub(self.saved.len());
        self.saved = next;
        Ok(added)
    }
}
