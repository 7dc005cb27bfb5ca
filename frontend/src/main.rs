use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::confetti::Confetti;
use components::forms::add_meal_form::AddMealForm;
use components::goal_section::GoalSection;
use components::header::Header;
use components::meal_list::MealList;
use components::progress_bar::ProgressBar;
use components::total_section::TotalSection;
use hooks::use_calorie_tracker::{use_calorie_tracker, TrackerAction};
use services::config::load_tracker_config;
use services::date_utils::current_time_of_day;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_tracker_config());
    let store = use_calorie_tracker((*config).clone());

    let tracker = &store.tracker;
    let summary = tracker.summary();
    let animations = tracker.animations();

    // Form callbacks
    let on_name_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |name: String| dispatcher.dispatch(TrackerAction::SetMealName(name)))
    };

    let on_calories_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(TrackerAction::SetCaloriesText(text)))
    };

    let on_submit_meal = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(TrackerAction::SubmitMeal {
                logged_at: current_time_of_day(),
            })
        })
    };

    let on_remove_meal = {
        let dispatcher = store.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(TrackerAction::RemoveMeal(index)))
    };

    // Goal editor callbacks
    let on_open_goal = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(TrackerAction::OpenGoalEditor))
    };

    let on_goal_draft_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(TrackerAction::SetGoalDraft(text)))
    };

    let on_save_goal = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(TrackerAction::SaveGoal))
    };

    html! {
        <div class="app-container">
            {if animations.celebration.is_active() {
                html! { <Confetti pieces={config.confetti_pieces} /> }
            } else { html! {} }}

            <div class="counter-card">
                <Header mood={summary.mood()} />

                <GoalSection
                    daily_goal={tracker.daily_goal()}
                    editing={tracker.goal_editor().is_editing()}
                    draft={tracker.goal_editor().draft()}
                    on_open={on_open_goal}
                    on_draft_change={on_goal_draft_change}
                    on_save={on_save_goal}
                />

                <ProgressBar percentage={summary.percentage} tone={summary.tone()} />

                <AddMealForm
                    meal_name={tracker.meal_name.clone()}
                    calories_text={tracker.calories_text.clone()}
                    can_submit={tracker.can_submit_meal()}
                    on_name_change={on_name_change}
                    on_calories_change={on_calories_change}
                    on_submit={on_submit_meal}
                />

                <MealList meals={tracker.meals().to_vec()} on_remove={on_remove_meal} />

                <TotalSection summary={summary} pulsing={animations.pulse.is_active()} />
            </div>
        </div>
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("app", "🍽 Starting Calorie Tracker");
    yew::Renderer::<App>::new().render();
}
