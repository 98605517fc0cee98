use eatwell::planner::{placeholder_recipe, PLACEHOLDER_TAG};
use eatwell::shopping::week_shopping_list;
use eatwell::{build_week_plan, MealType, PlanLength, PlannerError, Recipe, Weekday, WeeklyPlanner};
use serde_json::json;

fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        title: title.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        ..Recipe::default()
    }
}

#[test]
fn test_work_week_from_messy_days() {
    let raw = vec![
        json!({
            "day": "Monday",
            "breakfast": {"title": "Overnight Oats", "ingredients": ["1 cup oats", "1 banana"]},
            "lunch": "Lentil Soup",
            "snack": null,
            "dinner": {"title": "Veggie Curry", "calories": -50, "servings": 0}
        }),
        json!("not a day"),
        json!({"breakfast": {"title": "Toast"}}),
    ];

    let plan = build_week_plan(&raw, PlanLength::WorkWeek);
    assert_eq!(plan.len(), 5);

    let monday = &plan[0];
    assert_eq!(monday.breakfast.title, "Overnight Oats");
    assert_eq!(monday.lunch.title, "Lentil Soup");
    assert_eq!(monday.snack, placeholder_recipe(MealType::Snack));
    assert_eq!(monday.dinner.calories, 0);
    assert_eq!(monday.dinner.servings, 2);

    assert_eq!(plan[1].day, "Day 2");
    assert_eq!(plan[1].lunch.tags, vec![PLACEHOLDER_TAG]);
    assert_eq!(plan[2].day, "Day 3");
    assert_eq!(plan[2].breakfast.title, "Toast");

    let titles: Vec<&str> = monday.recipes().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Overnight Oats", "Lentil Soup", "Light Snack", "Veggie Curry"]
    );

    assert_eq!(week_shopping_list(&plan), vec!["banana", "oats"]);
}

#[test]
fn test_planner_assign_is_pure() {
    let empty = WeeklyPlanner::new();
    let planned = empty
        .assign_slot("  tuesday ", "Dinner", recipe("Risotto", &["300g arborio rice"]))
        .unwrap();

    assert!(empty.is_empty());
    assert!(!planned.is_empty());
    assert_eq!(
        planned.get(Weekday::Tuesday, MealType::Dinner).map(|r| r.title.as_str()),
        Some("Risotto")
    );
    assert!(planned.get(Weekday::Tuesday, MealType::Lunch).is_none());
    assert_eq!(planned.shopping_list(), vec!["arborio rice"]);
}

#[test]
fn test_planner_rejects_unknown_targets() {
    let planner = WeeklyPlanner::new()
        .assign_slot("Monday", "lunch", recipe("Wrap", &[]))
        .unwrap();

    assert_eq!(
        planner.assign_slot("Caturday", "lunch", recipe("Soup", &[])),
        Err(PlannerError::InvalidDay("Caturday".to_string()))
    );
    assert_eq!(
        planner.assign_slot("Monday", "brunch", recipe("Soup", &[])),
        Err(PlannerError::InvalidMealType("brunch".to_string()))
    );
    assert_eq!(planner.recipes().len(), 1);
}

#[test]
fn test_planner_order_and_clear() {
    let planner = WeeklyPlanner::new()
        .assign_slot("Sunday", "breakfast", recipe("Pancakes", &[]))
        .unwrap()
        .assign_slot("Monday", "snack", recipe("Hummus", &[]))
        .unwrap()
        .assign_slot("Monday", "breakfast", recipe("Granola", &[]))
        .unwrap();

    let titles: Vec<&str> = planner.recipes().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Granola", "Hummus", "Pancakes"]);

    let cleared = planner.clear_slot("monday", "snack").unwrap();
    assert_eq!(cleared.recipes().len(), 2);
    assert_eq!(planner.recipes().len(), 3);
}

#[test]
fn test_planner_serializes_by_day() {
    let planner = WeeklyPlanner::new()
        .assign_slot("Friday", "dinner", recipe("Pizza", &[]))
        .unwrap();
    let value = serde_json::to_value(&planner).unwrap();

    assert_eq!(value["Friday"]["dinner"]["title"], "Pizza");
    assert!(value["Friday"].get("lunch").is_none());
    assert_eq!(value.as_object().unwrap().len(), 7);
}
