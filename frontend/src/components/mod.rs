pub mod confetti;
pub mod forms;
pub mod goal_section;
pub mod header;
pub mod meal_list;
pub mod progress_bar;
pub mod total_section;
