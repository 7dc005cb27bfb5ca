pub mod use_calorie_tracker;
pub mod use_flag_reset;
