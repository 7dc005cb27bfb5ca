use shared::CalorieSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TotalSectionProps {
    pub summary: CalorieSummary,
    pub pulsing: bool,
}

#[function_component(TotalSection)]
pub fn total_section(props: &TotalSectionProps) -> Html {
    html! {
        <div class={classes!("total-section", props.pulsing.then_some("pulse"))}>
            <div class="total-calories">
                <span>{"Total Calories:"}</span>
                <span class="calorie-count">{format!("{} kcal", props.summary.total)}</span>
            </div>
            <div class="calories-summary">
                <span>{props.summary.status.describe()}</span>
            </div>
        </div>
    }
}
