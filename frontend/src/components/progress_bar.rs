use shared::ProgressTone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Already clamped to 0..=100
    pub percentage: u32,
    pub tone: ProgressTone,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress-container">
            <div
                class="progress-bar"
                style={format!("width: {}%; background-color: {};", props.percentage, props.tone.color())}
            ></div>
        </div>
    }
}
