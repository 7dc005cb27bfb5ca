use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub mood: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <div class="header">
            <span class="header-icon floating">{"🍽"}</span>
            <h1 class="app-title">{"Calorie Tracker"}</h1>
            <span class="mood-emoji">{props.mood.as_str()}</span>
        </div>
    }
}
