use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoalSectionProps {
    pub daily_goal: u32,
    pub editing: bool,
    pub draft: i64,
    pub on_open: Callback<()>,
    pub on_draft_change: Callback<String>,
    pub on_save: Callback<()>,
}

#[function_component(GoalSection)]
pub fn goal_section(props: &GoalSectionProps) -> Html {
    if props.editing {
        let on_input = {
            let on_draft_change = props.on_draft_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_draft_change.emit(input.value());
            })
        };
        let on_save = {
            let on_save = props.on_save.clone();
            Callback::from(move |_: MouseEvent| on_save.emit(()))
        };

        return html! {
            <div class="goal-section">
                <div class="goal-input-container">
                    <input
                        type="number"
                        aria-label="Daily goal"
                        class="goal-input"
                        min="1"
                        value={props.draft.to_string()}
                        oninput={on_input}
                    />
                    <button class="goal-save-btn" onclick={on_save}>{"Save"}</button>
                </div>
            </div>
        };
    }

    let on_open = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div class="goal-section">
            <div class="goal-display" onclick={on_open}>
                <span>
                    {format!("Daily Goal: {} kcal ", props.daily_goal)}
                    <span class="goal-emoji">{"🎯"}</span>
                </span>
                <small>{"(click to change)"}</small>
            </div>
        </div>
    }
}
