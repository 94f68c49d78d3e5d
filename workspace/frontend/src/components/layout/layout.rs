use yew::prelude::*;

use super::hero::{Hero, APP_SECTION_ID};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="page">
            <Hero />
            <main id={APP_SECTION_ID} class="app-section">
                { for props.children.iter() }
            </main>
            <footer class="footer">
                <span>{"Predictions are served by the forecast backend"}</span>
            </footer>
        </div>
    }
}
