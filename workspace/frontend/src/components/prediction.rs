use chrono::Local;
use common::converters::hour_label;
use common::{
    forms, predict_hour, render_single, Alerts, FlowPhase, SingleResultDisplay, SingleResultView,
};
use yew::prelude::*;

use crate::api_client::HttpTransport;
use crate::hooks::{use_result_region, ResultRegion};
use crate::ui::dom;
use crate::ui::loading::Loading;

/// Hour preselected in the form
const DEFAULT_HOUR: u8 = 12;

struct SingleView {
    region: ResultRegion<SingleResultDisplay>,
}

impl Alerts for SingleView {
    fn alert(&mut self, message: &str) {
        dom::alert(message);
    }
}

impl SingleResultView for SingleView {
    fn show_single(&mut self, display: SingleResultDisplay) {
        self.region.reveal(display);
    }
}

#[function_component(SinglePrediction)]
pub fn single_prediction() -> Html {
    let form_ref = use_node_ref();
    let phase = use_state(FlowPhase::default);
    let region = use_result_region::<SingleResultDisplay>();
    let today = use_memo((), |_| forms::date_input_value(Local::now().date_naive()));

    let on_submit = {
        let form_ref = form_ref.clone();
        let phase = phase.clone();
        let region = region.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut view = SingleView { region: region.clone() };
            let date = dom::form_value(&form_ref, "date").unwrap_or_default();
            let hour = dom::form_value(&form_ref, "hour").unwrap_or_default();
            let request = match forms::single_request(&date, &hour) {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Rejected prediction input: {}", err);
                    view.alert(&err.to_string());
                    phase.set(FlowPhase::AlertShown);
                    return;
                }
            };

            let phase = phase.clone();
            phase.set(FlowPhase::Submitted);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting prediction for {} at {}:00", request.date, request.hour);
                let transport = HttpTransport::from_settings();
                let outcome = predict_hour(&transport, &request).await;
                phase.set(render_single(&mut view, &request, outcome));
            });
        })
    };

    let display = region.content().cloned().unwrap_or_default();

    html! {
        <div class="card">
            <h2 class="card-title">{"Single Prediction"}</h2>
            <p class="card-subtitle">{"Predict consumption for one hour of a day"}</p>

            <form id="single-prediction-form" ref={form_ref} onsubmit={on_submit} class="prediction-form">
                <div class="form-control">
                    <label for="date">{"Date"}</label>
                    <input type="date" id="date" name="date" value={(*today).clone()} required={true} />
                </div>
                <div class="form-control">
                    <label for="hour">{"Hour"}</label>
                    <select id="hour" name="hour">
                        { for (0..24u8).map(|hour| html! {
                            <option value={hour.to_string()} selected={hour == DEFAULT_HOUR}>
                                {hour_label(hour)}
                            </option>
                        })}
                    </select>
                </div>
                <button type="submit" class="btn btn-primary">
                    {"Predict"}
                    if phase.is_pending() {
                        <Loading />
                    }
                </button>
            </form>

            <div id="single-result" class="result" ref={region.node()} style={region.style()}>
                <div class="result-grid">
                    <div class="result-item">
                        <span class="result-label">{"Date"}</span>
                        <span class="result-value" id="result-date">{display.date}</span>
                    </div>
                    <div class="result-item">
                        <span class="result-label">{"Hour"}</span>
                        <span class="result-value" id="result-hour">{display.hour}</span>
                    </div>
                    <div class="result-item">
                        <span class="result-label">{"Day"}</span>
                        <span class="result-value" id="result-day">{display.day_name}</span>
                    </div>
                    <div class="result-item highlight">
                        <span class="result-label">{"Predicted Consumption"}</span>
                        <span class="result-value" id="result-consumption">{display.consumption}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
