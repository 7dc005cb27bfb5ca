use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddMealFormProps {
    // Form state
    pub meal_name: String,
    pub calories_text: String,
    pub can_submit: bool,

    // Event handlers
    pub on_name_change: Callback<String>,
    pub on_calories_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(AddMealForm)]
pub fn add_meal_form(props: &AddMealFormProps) -> Html {
    let on_name_input = {
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name_change.emit(input.value());
        })
    };

    let on_calories_input = {
        let on_calories_change = props.on_calories_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_calories_change.emit(input.value());
        })
    };

    // Enter in either field submits, but only when the button would be enabled
    let on_keypress = {
        let on_submit = props.on_submit.clone();
        let can_submit = props.can_submit;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && can_submit {
                on_submit.emit(());
            }
        })
    };

    let on_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="input-group">
            <div class="input-container">
                <input
                    type="text"
                    aria-label="Meal name"
                    placeholder="What did you eat? 🍕 🍎 🍗"
                    class="meal-input"
                    value={props.meal_name.clone()}
                    oninput={on_name_input}
                    onkeypress={on_keypress.clone()}
                />
                <input
                    type="number"
                    aria-label="Calories"
                    placeholder="Calories 🔢"
                    class="calorie-input"
                    min="1"
                    value={props.calories_text.clone()}
                    oninput={on_calories_input}
                    onkeypress={on_keypress}
                />
            </div>
            <button
                class="add-button"
                onclick={on_click}
                disabled={!props.can_submit}
            >
                <span class="plus-icon">{"➕"}</span>
                {"Add"}
            </button>
        </div>
    }
}
