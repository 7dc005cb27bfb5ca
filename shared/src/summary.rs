//! Derived values over the meal list and the daily goal.
//!
//! Nothing here is stored; the widget recomputes a [`CalorieSummary`] on every
//! render.

use serde::{Deserialize, Serialize};

use crate::meal::Meal;

/// Sum of the calories of every meal.
pub fn total_calories(meals: &[Meal]) -> u64 {
    meals.iter().map(|meal| u64::from(meal.calories)).sum()
}

/// `min(100, round(total / goal * 100))`. A zero goal reads as fully used.
pub fn goal_percentage(total: u64, goal: u32) -> u32 {
    if goal == 0 {
        return 100;
    }
    let percentage = (total as f64 / f64::from(goal) * 100.0).round();
    percentage.min(100.0) as u32
}

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Distance from the goal, on whichever side the total sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Total is at or under the goal
    Remaining(f64),
    /// Total is past the goal
    Over(f64),
}

impl GoalStatus {
    pub fn new(total: u64, goal: u32) -> Self {
        let goal = u64::from(goal);
        if total <= goal {
            GoalStatus::Remaining(round_to_tenth((goal - total) as f64))
        } else {
            GoalStatus::Over(round_to_tenth((total - goal) as f64))
        }
    }

    /// Summary line shown under the total, e.g. "150 kcal remaining ⬇".
    pub fn describe(&self) -> String {
        match self {
            GoalStatus::Remaining(amount) => format!("{} kcal remaining ⬇", format_kcal(*amount)),
            GoalStatus::Over(amount) => format!("{} kcal over limit ⬆", format_kcal(*amount)),
        }
    }
}

/// Print a calorie amount without a trailing ".0" when it is whole.
pub fn format_kcal(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

/// Colour band for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressTone {
    Healthy,
    Warning,
    Over,
}

impl ProgressTone {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage > 100 {
            ProgressTone::Over
        } else if percentage > 80 {
            ProgressTone::Warning
        } else {
            ProgressTone::Healthy
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ProgressTone::Healthy => "#2ecc71",
            ProgressTone::Warning => "#f39c12",
            ProgressTone::Over => "#e74c3c",
        }
    }
}

/// Header face reflecting how much of the goal has been eaten.
pub fn mood_symbol(percentage: u32) -> &'static str {
    match percentage {
        0..=19 => "😋",
        20..=49 => "😊",
        50..=79 => "🙂",
        80..=99 => "😐",
        _ => "😬",
    }
}

/// Everything the widget derives from the meal list and goal in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieSummary {
    pub total: u64,
    pub goal: u32,
    pub percentage: u32,
    pub status: GoalStatus,
}

impl CalorieSummary {
    pub fn compute(meals: &[Meal], goal: u32) -> Self {
        let total = total_calories(meals);
        Self {
            total,
            goal,
            percentage: goal_percentage(total, goal),
            status: GoalStatus::new(total, goal),
        }
    }

    pub fn tone(&self) -> ProgressTone {
        ProgressTone::for_percentage(self.percentage)
    }

    pub fn mood(&self) -> &'static str {
        mood_symbol(self.percentage)
    }
}
