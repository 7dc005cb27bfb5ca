//! Daily goal editing.
//!
//! The editor keeps a draft separate from the committed goal; only a positive
//! draft is ever committed.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::meal::parse_leading_int;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEditor {
    editing: bool,
    draft: i64,
}

impl GoalEditor {
    pub fn new(goal: u32) -> Self {
        Self {
            editing: false,
            draft: i64::from(goal),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> i64 {
        self.draft
    }

    /// Enter edit mode with the draft seeded from the committed goal.
    pub fn open(&mut self, current_goal: u32) {
        self.editing = true;
        self.draft = i64::from(current_goal);
    }

    /// Update the draft from the goal input. Unparsable text becomes 0.
    pub fn set_draft_text(&mut self, text: &str) {
        self.draft = parse_leading_int(text).unwrap_or(0);
    }

    /// Validate the draft and leave edit mode. An invalid draft keeps the
    /// editor open.
    pub fn save(&mut self) -> TrackerResult<u32> {
        let goal = u32::try_from(self.draft)
            .ok()
            .filter(|goal| *goal > 0)
            .ok_or(TrackerError::NonPositiveGoal { value: self.draft })?;

        self.editing = false;
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_draft_from_goal() {
        let mut editor = GoalEditor::new(2000);
        editor.set_draft_text("5");
        editor.open(1800);
        assert!(editor.is_editing());
        assert_eq!(editor.draft(), 1800);
    }

    #[test]
    fn test_save_commits_positive_draft() {
        let mut editor = GoalEditor::new(2000);
        editor.open(2000);
        editor.set_draft_text("2500");
        assert_eq!(editor.save().unwrap(), 2500);
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_save_rejects_zero_and_negative() {
        let mut editor = GoalEditor::new(2000);
        editor.open(2000);

        for text in ["0", "-100", "", "abc"] {
            editor.set_draft_text(text);
            assert!(matches!(editor.save(), Err(TrackerError::NonPositiveGoal { .. })));
            assert!(editor.is_editing());
        }
    }

    #[test]
    fn test_save_rejects_values_beyond_u32() {
        let mut editor = GoalEditor::new(2000);
        editor.open(2000);
        editor.set_draft_text("4294967296");
        assert!(editor.save().is_err());
        assert!(editor.is_editing());
    }
}
