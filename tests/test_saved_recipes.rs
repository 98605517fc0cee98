use eatwell::saved::{toggle_batch, SAVED_RECIPES_KEY};
use eatwell::{
    build_week_plan, JsonFileStore, KeyValueStore, MemoryStore, PlanLength, Recipe, RecipeBox,
    SavedRecipes,
};
use serde_json::json;

fn recipe(title: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        ..Recipe::default()
    }
}

#[tokio::test]
async fn test_saved_recipes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut recipe_box = RecipeBox::open(JsonFileStore::new(dir.path())).await.unwrap();
    assert!(recipe_box.saved().is_empty());
    assert!(recipe_box.toggle(&recipe("Beet Hummus")).await.unwrap());
    let added = recipe_box
        .save_all(&[recipe("Kale Chips"), recipe("Beet Hummus"), recipe("Kale Chips")])
        .await
        .unwrap();
    assert_eq!(added, 1);

    let reopened = RecipeBox::open(JsonFileStore::new(dir.path())).await.unwrap();
    let titles: Vec<&str> = reopened.saved().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Beet Hummus", "Kale Chips"]);

    let file = dir.path().join(format!("{}.json", SAVED_RECIPES_KEY));
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(file).unwrap()).unwrap();
    assert_eq!(on_disk[0]["title"], "Beet Hummus");
    assert_eq!(on_disk[0]["cookingTime"], "20 mins");
}

#[tokio::test]
async fn test_toggle_twice_unsaves() {
    let mut recipe_box = RecipeBox::open(MemoryStore::new()).await.unwrap();
    let soup = recipe("Miso Soup");

    assert!(recipe_box.toggle(&soup).await.unwrap());
    assert!(recipe_box.is_saved(&soup));
    assert!(!recipe_box.toggle(&soup).await.unwrap());
    assert!(!recipe_box.is_saved(&soup));

    let (store, saved) = recipe_box.into_inner();
    assert!(saved.is_empty());
    assert_eq!(store.get(SAVED_RECIPES_KEY).await.unwrap(), Some("[]".to_string()));
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let store = MemoryStore::new();
    store.set(SAVED_RECIPES_KEY, "{not json").await.unwrap();

    let recipe_box = RecipeBox::open(store).await.unwrap();
    assert!(recipe_box.saved().is_empty());
}

#[tokio::test]
async fn test_stored_entries_are_normalized() {
    let store = MemoryStore::new();
    store
        .set(SAVED_RECIPES_KEY, r#"[{"title": "Old Favourite", "servings": 0}, 7]"#)
        .await
        .unwrap();

    let recipe_box = RecipeBox::open(store).await.unwrap();
    let saved = recipe_box.saved();
    assert_eq!(saved.get("Old Favourite").map(|r| r.servings), Some(2));
    assert_eq!(saved.len(), 1);
}

#[tokio::test]
async fn test_junk_entries_are_not_written_back() {
    let store = MemoryStore::new();
    store
        .set(SAVED_RECIPES_KEY, r#"[{"title": "Dal"}, 7, "junk", null]"#)
        .await
        .unwrap();

    let mut recipe_box = RecipeBox::open(store).await.unwrap();
    recipe_box.toggle(&recipe("Pho")).await.unwrap();

    let (store, _) = recipe_box.into_inner();
    let text = store.get(SAVED_RECIPES_KEY).await.unwrap().unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    let titles: Vec<&str> = stored.iter().filter_map(|r| r["title"].as_str()).collect();
    assert_eq!(titles, vec!["Dal", "Pho"]);
}

#[tokio::test]
async fn test_toggling_a_plan_toggles_each_dish_once() {
    let days: Vec<serde_json::Value> = (0..5)
        .map(|day| {
            if day < 2 {
                json!({"lunch": {"title": "Soup"}, "dinner": {"title": "Stew"}})
            } else {
                json!({"lunch": {"title": "Soup"}})
            }
        })
        .collect();
    let plan = build_week_plan(&days, PlanLength::WorkWeek);
    let recipes: Vec<Recipe> = plan.iter().flat_map(|day| day.recipes()).cloned().collect();

    let mut recipe_box = RecipeBox::open(MemoryStore::new()).await.unwrap();
    for recipe in toggle_batch(&recipes) {
        assert!(recipe_box.toggle(recipe).await.unwrap());
    }
    let titles: Vec<&str> = recipe_box.saved().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Soup", "Stew"]);

    // a second pass unsaves them again
    for recipe in toggle_batch(&recipes) {
        assert!(!recipe_box.toggle(recipe).await.unwrap());
    }
    assert!(recipe_box.saved().is_empty());
}

#[tokio::test]
async fn test_save_plan() {
    let plan = build_week_plan(
        &[json!({
            "day": "Monday",
            "breakfast": {"title": "Chia Pudding"},
            "lunch": {"title": "Falafel Bowl"},
            "snack": {"title": "Chia Pudding"},
            "dinner": {"title": "Ratatouille"}
        })],
        PlanLength::WorkWeek,
    );

    let mut recipe_box = RecipeBox::open(MemoryStore::new()).await.unwrap();
    recipe_box.save_plan(&plan).await.unwrap();

    let saved = recipe_box.saved();
    assert!(saved.contains_title("Chia Pudding"));
    assert!(saved.contains_title("Falafel Bowl"));
    assert!(saved.contains_title("Ratatouille"));
    // placeholders from padded days are saved once each
    assert!(saved.contains_title("Hearty Dinner"));
    assert_eq!(saved.len(), 7);
}

#[test]
fn test_merge_dedupes_incoming_batch() {
    let saved = SavedRecipes::from(vec![recipe("Dal")]);
    let merged = saved.merge_all(&[recipe("Dal"), recipe("Pho"), recipe("Pho")]);

    assert_eq!(saved.len(), 1);
    let titles: Vec<&str> = merged.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Dal", "Pho"]);
}
