//! # Tracker State
//!
//! The single in-memory store behind the widget: the meal list, the committed
//! daily goal, the add-meal form fields, the goal editor and the two animation
//! flags.
//!
//! ## Responsibilities:
//! - Appending and removing meals
//! - Committing goal edits
//! - Triggering the pulse and celebration flags after list or goal changes
//!
//! Every mutation goes through a method here so the animation rules are applied
//! in exactly one place. Derived values come from [`CalorieTracker::summary`].

use chrono::NaiveTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::animation::{goal_just_crossed, AnimationFlags, AnimationKind, FlagTicket};
use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::goal::GoalEditor;
use crate::meal::{can_add_meal, Meal};
use crate::summary::CalorieSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieTracker {
    meals: Vec<Meal>,
    daily_goal: u32,
    goal_editor: GoalEditor,
    animations: AnimationFlags,

    /// Add-meal form contents
    pub meal_name: String,
    pub calories_text: String,
}

impl Default for CalorieTracker {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

impl CalorieTracker {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            meals: Vec::new(),
            daily_goal: config.default_daily_goal,
            goal_editor: GoalEditor::new(config.default_daily_goal),
            animations: AnimationFlags::default(),
            meal_name: String::new(),
            calories_text: String::new(),
        }
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    pub fn goal_editor(&self) -> &GoalEditor {
        &self.goal_editor
    }

    pub fn animations(&self) -> &AnimationFlags {
        &self.animations
    }

    pub fn summary(&self) -> CalorieSummary {
        CalorieSummary::compute(&self.meals, self.daily_goal)
    }

    /// Whether the add button should be enabled for the current form fields.
    pub fn can_submit_meal(&self) -> bool {
        can_add_meal(&self.meal_name, &self.calories_text)
    }

    /// Append a meal. Blocked input leaves the list untouched.
    pub fn add_meal(&mut self, name: &str, calories_text: &str, logged_at: NaiveTime) -> TrackerResult<&Meal> {
        let meal = Meal::from_input(name, calories_text, logged_at).map_err(|e| {
            debug!("Add meal blocked: {}", e);
            e
        })?;
        Ok(self.push_meal(meal))
    }

    /// Add a meal from the form fields and clear them on success.
    pub fn submit_meal_form(&mut self, logged_at: NaiveTime) -> TrackerResult<&Meal> {
        let meal = Meal::from_input(&self.meal_name, &self.calories_text, logged_at).map_err(|e| {
            debug!("Meal form blocked: {}", e);
            e
        })?;

        self.meal_name.clear();
        self.calories_text.clear();
        Ok(self.push_meal(meal))
    }

    fn push_meal(&mut self, meal: Meal) -> &Meal {
        info!("🍽 Logged {} ({} kcal) at {}", meal.name, meal.calories, meal.time);
        self.meals.push(meal);
        self.on_meals_changed();
        &self.meals[self.meals.len() - 1]
    }

    /// Remove the meal at `index`. A stale index changes nothing.
    pub fn remove_meal(&mut self, index: usize) -> TrackerResult<Meal> {
        if index >= self.meals.len() {
            debug!("Remove meal blocked: index {} of {}", index, self.meals.len());
            return Err(TrackerError::MealIndexOutOfRange {
                index,
                len: self.meals.len(),
            });
        }

        let removed = self.meals.remove(index);
        info!("🗑 Removed {} ({} kcal)", removed.name, removed.calories);
        self.on_meals_changed();
        Ok(removed)
    }

    pub fn open_goal_editor(&mut self) {
        self.goal_editor.open(self.daily_goal);
    }

    pub fn set_goal_draft_text(&mut self, text: &str) {
        self.goal_editor.set_draft_text(text);
    }

    /// Commit the draft goal. An invalid draft keeps the editor open and the
    /// old goal in place.
    pub fn save_goal(&mut self) -> TrackerResult<u32> {
        let goal = self.goal_editor.save().map_err(|e| {
            debug!("Goal save blocked: {}", e);
            e
        })?;

        if goal != self.daily_goal {
            info!("🎯 Daily goal changed from {} to {} kcal", self.daily_goal, goal);
            self.daily_goal = goal;
            self.check_celebration();
        }
        Ok(goal)
    }

    /// Clear an animation flag if `ticket` is still its latest activation.
    pub fn expire_animation(&mut self, kind: AnimationKind, ticket: FlagTicket) -> bool {
        self.animations.expire(kind, ticket)
    }

    fn on_meals_changed(&mut self) {
        if !self.meals.is_empty() {
            self.animations.pulse.trigger();
        }
        self.check_celebration();
    }

    fn check_celebration(&mut self) {
        if goal_just_crossed(&self.meals, self.daily_goal) {
            info!("🎉 Daily goal of {} kcal reached", self.daily_goal);
            self.animations.celebration.trigger();
        }
    }
}
