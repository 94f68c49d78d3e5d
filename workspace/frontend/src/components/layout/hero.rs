use yew::prelude::*;

use crate::ui::dom;

/// Id of the section holding the tabs
pub const APP_SECTION_ID: &str = "app-section";

#[function_component(Hero)]
pub fn hero() -> Html {
    let on_start = Callback::from(|_: MouseEvent| dom::scroll_to_id(APP_SECTION_ID));

    html! {
        <header class="hero">
            <h1>{"Energy Consumption Forecast"}</h1>
            <p class="hero-subtitle">
                {"Hourly and daily electricity consumption predictions in MWh"}
            </p>
            <button type="button" class="btn btn-primary btn-lg" onclick={on_start}>
                {"Get Started"}
            </button>
        </header>
    }
}
