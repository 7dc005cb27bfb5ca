//! Core state and derived values for the calorie tracker widget.
//!
//! The frontend owns a [`CalorieTracker`] and renders from it; everything here
//! is plain Rust with no browser dependency.

pub mod animation;
pub mod classifier;
pub mod config;
pub mod error;
pub mod goal;
pub mod meal;
pub mod summary;
pub mod tracker;

pub use animation::{goal_just_crossed, AnimationFlags, AnimationKind, FlagTicket, OneShotFlag};
pub use classifier::{classify_meal, SymbolRule, DEFAULT_MEAL_SYMBOL, SYMBOL_RULES};
pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use goal::GoalEditor;
pub use meal::{can_add_meal, format_time_of_day, parse_calories, parse_leading_int, Meal};
pub use summary::{format_kcal, mood_symbol, CalorieSummary, GoalStatus, ProgressTone};
pub use tracker::CalorieTracker;
