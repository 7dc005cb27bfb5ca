//! Meal entries and the input validation that guards them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::classifier::classify_meal;
use crate::error::{TrackerError, TrackerResult};

/// A logged food entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    /// Local time of day the meal was logged, "HH:MM"
    pub time: String,
    /// Decorative symbol chosen by the classifier when the meal was created
    pub symbol: String,
}

impl Meal {
    /// Validate raw form input and build a meal stamped with `logged_at`.
    pub fn from_input(name: &str, calories_text: &str, logged_at: NaiveTime) -> TrackerResult<Self> {
        let name = validate_meal_name(name)?;
        let calories = parse_calories(calories_text)?;

        Ok(Self {
            symbol: classify_meal(name).to_string(),
            name: name.to_string(),
            calories,
            time: format_time_of_day(logged_at),
        })
    }
}

/// Format a time of day the way meal rows display it.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Any non-empty name is accepted and kept exactly as typed.
pub fn validate_meal_name(name: &str) -> TrackerResult<&str> {
    if name.is_empty() {
        return Err(TrackerError::EmptyMealName);
    }
    Ok(name)
}

/// Parse calorie text into a positive count.
pub fn parse_calories(text: &str) -> TrackerResult<u32> {
    parse_leading_int(text)
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| TrackerError::InvalidCalories {
            input: text.to_string(),
        })
}

/// Whether the add button should be enabled for the current form contents.
pub fn can_add_meal(name: &str, calories_text: &str) -> bool {
    validate_meal_name(name).is_ok() && parse_calories(calories_text).is_ok()
}

/// Read an optionally signed integer prefix, ignoring surrounding whitespace
/// and anything after the digits. `"450kcal"` is 450, `"12.7"` is 12,
/// `"abc"` is `None`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate absurdly long inputs instead of rejecting them
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
