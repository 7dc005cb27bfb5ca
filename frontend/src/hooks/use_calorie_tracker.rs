use std::rc::Rc;

use chrono::NaiveTime;
use shared::{AnimationKind, CalorieTracker, FlagTicket, TrackerConfig};
use yew::prelude::*;

use super::use_flag_reset::use_flag_reset;
use crate::services::logging::Logger;

/// Everything the UI can ask the tracker to do.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    SetMealName(String),
    SetCaloriesText(String),
    SubmitMeal { logged_at: NaiveTime },
    RemoveMeal(usize),
    OpenGoalEditor,
    SetGoalDraft(String),
    SaveGoal,
    ExpireAnimation(AnimationKind, FlagTicket),
}

/// Reducer wrapper so the tracker can live in `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerStore {
    pub tracker: CalorieTracker,
}

impl Reducible for TrackerStore {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut tracker = self.tracker.clone();

        // Blocked actions are silent; the tracker logs why at debug level
        match action {
            TrackerAction::SetMealName(name) => tracker.meal_name = name,
            TrackerAction::SetCaloriesText(text) => tracker.calories_text = text,
            TrackerAction::SubmitMeal { logged_at } => {
                let _ = tracker.submit_meal_form(logged_at);
            }
            TrackerAction::RemoveMeal(index) => {
                let _ = tracker.remove_meal(index);
            }
            TrackerAction::OpenGoalEditor => tracker.open_goal_editor(),
            TrackerAction::SetGoalDraft(text) => tracker.set_goal_draft_text(&text),
            TrackerAction::SaveGoal => {
                let _ = tracker.save_goal();
            }
            TrackerAction::ExpireAnimation(kind, ticket) => {
                if !tracker.expire_animation(kind, ticket) {
                    Logger::debug_with_component(
                        "tracker",
                        &format!("Ignored stale {:?} reset (ticket {})", kind, ticket),
                    );
                }
            }
        }

        Rc::new(Self { tracker })
    }
}

/// Owns the tracker state for the widget and keeps the animation reset
/// timers in step with it.
#[hook]
pub fn use_calorie_tracker(config: TrackerConfig) -> UseReducerHandle<TrackerStore> {
    let store = {
        let config = config.clone();
        use_reducer(move || TrackerStore {
            tracker: CalorieTracker::new(&config),
        })
    };

    let animations = *store.tracker.animations();
    use_flag_reset(
        AnimationKind::Pulse,
        animations.pulse.pending(),
        config.pulse_duration_ms,
        store.dispatcher(),
    );
    use_flag_reset(
        AnimationKind::Celebration,
        animations.celebration.pending(),
        config.celebration_duration_ms,
        store.dispatcher(),
    );

    store
}
