use yew::prelude::*;

/// Inline spinner shown next to a submit control while its request is pending
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <span class="loading-inline">
            <span class="spinner" aria-hidden="true"></span>
        </span>
    }
}
