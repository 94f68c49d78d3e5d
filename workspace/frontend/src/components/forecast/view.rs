use chrono::Local;
use common::{
    forms, predict_day, render_daily, Alerts, ChartSlot, DailyResultDisplay, DailyResultView,
    FlowPhase,
};
use yew::prelude::*;

use super::chart::{fit_to_container, PlotlyBackend, DAILY_CHART_ID};
use super::stats::ForecastStats;
use crate::api_client::HttpTransport;
use crate::hooks::{use_result_region, ResultRegion};
use crate::ui::dom;
use crate::ui::loading::Loading;

struct DailyView {
    region: ResultRegion<DailyResultDisplay>,
}

impl Alerts for DailyView {
    fn alert(&mut self, message: &str) {
        dom::alert(message);
    }
}

impl DailyResultView for DailyView {
    fn show_daily(&mut self, display: DailyResultDisplay) {
        self.region.reveal(display);
    }

    fn hide_daily(&mut self) {
        self.region.hide();
    }
}

#[function_component(DailyForecast)]
pub fn daily_forecast() -> Html {
    let form_ref = use_node_ref();
    let phase = use_state(FlowPhase::default);
    let region = use_result_region::<DailyResultDisplay>();
    let chart = use_mut_ref(|| ChartSlot::new(PlotlyBackend::new(DAILY_CHART_ID)));
    let today = use_memo((), |_| forms::date_input_value(Local::now().date_naive()));

    // Release the plot when the panel goes away
    {
        let chart = chart.clone();
        use_effect_with((), move |_| move || chart.borrow_mut().clear());
    }

    use_effect_with(region.revision(), |revision| {
        if revision.is_some() {
            fit_to_container(DAILY_CHART_ID);
        }
        || ()
    });

    let on_submit = {
        let form_ref = form_ref.clone();
        let phase = phase.clone();
        let region = region.clone();
        let chart = chart.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut view = DailyView { region: region.clone() };
            let date = dom::form_value(&form_ref, "date").unwrap_or_default();
            let request = match forms::daily_request(&date) {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Rejected daily forecast input: {}", err);
                    view.alert(&err.to_string());
                    phase.set(FlowPhase::AlertShown);
                    return;
                }
            };

            let phase = phase.clone();
            let chart = chart.clone();
            phase.set(FlowPhase::Submitted);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting daily forecast for {}", request.date);
                let transport = HttpTransport::from_settings();
                let outcome = predict_day(&transport, &request).await;
                let settled = {
                    let mut slot = chart.borrow_mut();
                    render_daily(&mut view, &mut *slot, outcome)
                };
                phase.set(settled);
            });
        })
    };

    html! {
        <div class="card">
            <h2 class="card-title">{"Daily Forecast"}</h2>
            <p class="card-subtitle">{"Predict consumption for every hour of a day"}</p>

            <form id="daily-prediction-form" ref={form_ref} onsubmit={on_submit} class="prediction-form">
                <div class="form-control">
                    <label for="daily-date">{"Date"}</label>
                    <input type="date" id="daily-date" name="date" value={(*today).clone()} required={true} />
                </div>
                <button type="submit" class="btn btn-primary">
                    {"Predict Day"}
                    if phase.is_pending() {
                        <Loading />
                    }
                </button>
            </form>

            <div id="daily-result" class="result" ref={region.node()} style={region.style()}>
                <ForecastStats display={region.content().cloned()} />
                <div id={DAILY_CHART_ID} class="chart-container" style="width:100%; height:400px;"></div>
            </div>
        </div>
    }
}
