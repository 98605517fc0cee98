//! Meal plans, in two flavors.
//!
//! A [`DailyPlan`](crate::model::DailyPlan) sequence built by
//! [`build_week_plan`] is what a generated plan looks like: every slot on
//! every day is filled. A [`WeeklyPlanner`] is the user's own calendar,
//! filled one slot at a time.

mod week;
mod weekly;

pub use week::{build_week_plan, is_placeholder, placeholder_recipe, PLACEHOLDER_TAG};
pub use weekly::{MealSlots, WeeklyPlanner};

use serde::Deserialize;

/// How many days a generated plan covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanLength {
    /// Monday to Friday
    WorkWeek,
    #[default]
    FullWeek,
}

impl PlanLength {
    pub fn days(&self) -> usize {
        match self {
            PlanLength::WorkWeek => 5,
            PlanLength::FullWeek => 7,
        }
    }

    /// Maps a day count to a plan length; only 5 and 7 are supported.
    pub fn from_days(days: usize) -> Option<Self> {
        match days {
            5 => Some(PlanLength::WorkWeek),
            7 => Some(PlanLength::FullWeek),
            _ => None,
        }
    }
}
