use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::model::{MealType, Recipe, Weekday};
use crate::shopping::build_shopping_list;

/// The optional recipes for one day of the planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSlots {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snack: Option<Recipe>,
}

impl MealSlots {
    pub fn get(&self, meal: MealType) -> Option<&Recipe> {
        self.slot(meal).as_ref()
    }

    /// Assigned recipes in breakfast, lunch, dinner, snack order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        MealType::ALL.into_iter().filter_map(|meal| self.get(meal))
    }

    fn slot(&self, meal: MealType) -> &Option<Recipe> {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    fn slot_mut(&mut self, meal: MealType) -> &mut Option<Recipe> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }
}

/// A user's week, Monday to Sunday, filled in one slot at a time.
///
/// All seven days always exist. Updates are pure: [`assign_slot`] and
/// [`clear_slot`] return a new planner and leave `self` untouched.
///
/// [`assign_slot`]: WeeklyPlanner::assign_slot
/// [`clear_slot`]: WeeklyPlanner::clear_slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyPlanner {
    days: [MealSlots; 7],
}

impl WeeklyPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a planner with `recipe` in the given slot.
    ///
    /// `day` must name a weekday (any case) and `meal` one of breakfast,
    /// lunch, dinner or snack; otherwise nothing changes and an error is
    /// returned.
    pub fn assign_slot(
        &self,
        day: &str,
        meal: &str,
        recipe: Recipe,
    ) -> Result<WeeklyPlanner, PlannerError> {
        let (day, meal) = parse_target(day, meal)?;
        Ok(self.with_slot(day, meal, Some(recipe)))
    }

    /// Returns a planner with the given slot emptied.
    pub fn clear_slot(&self, day: &str, meal: &str) -> Result<WeeklyPlanner, PlannerError> {
        let (day, meal) = parse_target(day, meal)?;
        Ok(self.with_slot(day, meal, None))
    }

    pub fn day(&self, day: Weekday) -> &MealSlots {
        &self.days[day.index()]
    }

    pub fn get(&self, day: Weekday, meal: MealType) -> Option<&Recipe> {
        self.day(day).get(meal)
    }

    /// Days with their slots, in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &MealSlots)> {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }

    /// Every assigned recipe, in calendar then slot order.
    pub fn recipes(&self) -> Vec<&Recipe> {
        self.days.iter().flat_map(MealSlots::recipes).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|slots| slots.recipes().next().is_none())
    }

    /// Shopping list covering everything planned this week.
    pub fn shopping_list(&self) -> Vec<String> {
        let recipes: Vec<Recipe> = self.recipes().into_iter().cloned().collect();
        build_shopping_list(&recipes)
    }

    fn with_slot(&self, day: Weekday, meal: MealType, recipe: Option<Recipe>) -> WeeklyPlanner {
        let mut next = self.clone();
        *next.days[day.index()].slot_mut(meal) = recipe;
        next
    }
}

fn parse_target(day: &str, meal: &str) -> Result<(Weekday, MealType), PlannerError> {
    let day = Weekday::parse(day).ok_or_else(|| PlannerError::InvalidDay(day.to_string()))?;
    let meal = MealType::parse(meal).ok_or_else(|| PlannerError::InvalidMealType(meal.to_string()))?;
    Ok((day, meal))
}

// Serialized as a map keyed by day label, in calendar order.
impl Serialize for WeeklyPlanner {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, slots) in self.iter() {
            map.serialize_entry(day.label(), slots)?;
        }
        map.end()
    }
}
