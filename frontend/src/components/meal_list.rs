use shared::Meal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MealListProps {
    pub meals: Vec<Meal>,
    pub on_remove: Callback<usize>,
}

#[function_component(MealList)]
pub fn meal_list(props: &MealListProps) -> Html {
    if props.meals.is_empty() {
        return html! {
            <div class="empty-state">
                <div class="empty-emoji bounce">{"🍽"}</div>
                <p>{"No meals added yet. Start tracking your food intake!"}</p>
            </div>
        };
    }

    html! {
        <ul class="meal-list">
            {for props.meals.iter().enumerate().map(|(index, meal)| {
                let on_remove = {
                    let on_remove = props.on_remove.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(index))
                };

                html! {
                    <li
                        key={index}
                        class="meal-item fade-in"
                        style={format!("animation-delay: {:.1}s", index as f32 * 0.1)}
                    >
                        <div class="meal-emoji wiggle">{&meal.symbol}</div>
                        <div class="meal-info">
                            <span class="meal-name">{&meal.name}</span>
                            <div class="meal-details">
                                <span class="meal-calories">{format!("{} kcal", meal.calories)}</span>
                                <span class="meal-time">{format!("⏰ {}", meal.time)}</span>
                            </div>
                        </div>
                        <button
                            class="remove-button"
                            aria-label="Remove meal"
                            onclick={on_remove}
                        >
                            {"❌"}
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
