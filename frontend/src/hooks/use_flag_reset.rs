use gloo::timers::callback::Timeout;
use shared::{AnimationKind, FlagTicket};
use yew::prelude::*;

use super::use_calorie_tracker::{TrackerAction, TrackerStore};

/// Start the reset timer for a pending activation. Dropping the returned
/// `Timeout` cancels it.
pub fn schedule_reset<F>(
    kind: AnimationKind,
    pending: Option<FlagTicket>,
    duration_ms: u32,
    dispatch: F,
) -> Option<Timeout>
where
    F: FnOnce(TrackerAction) + 'static,
{
    pending.map(|ticket| {
        Timeout::new(duration_ms, move || {
            dispatch(TrackerAction::ExpireAnimation(kind, ticket));
        })
    })
}

/// Schedule the auto-reset for one animation flag.
///
/// The effect is keyed on the flag's pending ticket. A new ticket means the
/// flag was re-triggered: the old `Timeout` is dropped, which cancels it, and
/// a fresh one is scheduled. Changes that leave the ticket alone do not touch
/// the running timer. Unmount drops whatever is still pending.
#[hook]
pub fn use_flag_reset(
    kind: AnimationKind,
    pending: Option<FlagTicket>,
    duration_ms: u32,
    dispatcher: UseReducerDispatcher<TrackerStore>,
) {
    use_effect_with((pending, duration_ms), move |(pending, duration_ms)| {
        let timeout = schedule_reset(kind, *pending, *duration_ms, move |action| {
            dispatcher.dispatch(action)
        });

        move || drop(timeout)
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveTime;
    use gloo::timers::future::TimeoutFuture;
    use shared::CalorieTracker;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type SharedStore = Rc<RefCell<Rc<TrackerStore>>>;

    fn new_store() -> SharedStore {
        Rc::new(RefCell::new(Rc::new(TrackerStore {
            tracker: CalorieTracker::default(),
        })))
    }

    fn apply(store: &SharedStore, action: TrackerAction) {
        let next = store.borrow().clone().reduce(action);
        *store.borrow_mut() = next;
    }

    fn dispatch_into(store: &SharedStore) -> impl FnOnce(TrackerAction) + 'static {
        let store = store.clone();
        move |action| apply(&store, action)
    }

    fn log_meal(store: &SharedStore, name: &str) -> Option<FlagTicket> {
        apply(store, TrackerAction::SetMealName(name.to_string()));
        apply(store, TrackerAction::SetCaloriesText("100".to_string()));
        apply(
            store,
            TrackerAction::SubmitMeal {
                logged_at: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            },
        );
        store.borrow().tracker.animations().pulse.pending()
    }

    fn pulse_active(store: &SharedStore) -> bool {
        store.borrow().tracker.animations().pulse.is_active()
    }

    #[wasm_bindgen_test]
    fn test_nothing_scheduled_without_pending_ticket() {
        let store = new_store();
        assert!(schedule_reset(AnimationKind::Pulse, None, 10, dispatch_into(&store)).is_none());
    }

    #[wasm_bindgen_test]
    async fn test_retrigger_cancels_previous_reset() {
        let store = new_store();

        let first_ticket = log_meal(&store, "Toast");
        let first = schedule_reset(AnimationKind::Pulse, first_ticket, 20, dispatch_into(&store));

        let second_ticket = log_meal(&store, "Egg");
        assert_ne!(first_ticket, second_ticket);
        drop(first);
        let _second = schedule_reset(AnimationKind::Pulse, second_ticket, 80, dispatch_into(&store));

        TimeoutFuture::new(40).await;
        assert!(pulse_active(&store));

        TimeoutFuture::new(80).await;
        assert!(!pulse_active(&store));
    }

    #[wasm_bindgen_test]
    async fn test_late_reset_never_clears_newer_activation() {
        let store = new_store();

        // Both timers stay alive, so the first fires with a superseded ticket
        let first_ticket = log_meal(&store, "Toast");
        let _first = schedule_reset(AnimationKind::Pulse, first_ticket, 20, dispatch_into(&store));
        let second_ticket = log_meal(&store, "Egg");
        let _second = schedule_reset(AnimationKind::Pulse, second_ticket, 100, dispatch_into(&store));

        TimeoutFuture::new(50).await;
        assert!(pulse_active(&store));
        assert_eq!(store.borrow().tracker.animations().pulse.pending(), second_ticket);

        TimeoutFuture::new(100).await;
        assert!(!pulse_active(&store));
    }
}
