use common::{fetch_statistics, render_statistics, Alerts, FlowPhase, StatisticsDisplay, StatisticsView};
use yew::prelude::*;

use crate::api_client::HttpTransport;
use crate::hooks::{use_result_region, ResultRegion};
use crate::settings;
use crate::ui::dom;
use crate::ui::loading::Loading;

struct StatsView {
    region: ResultRegion<StatisticsDisplay>,
}

impl Alerts for StatsView {
    fn alert(&mut self, message: &str) {
        dom::alert(message);
    }
}

impl StatisticsView for StatsView {
    fn show_statistics(&mut self, display: StatisticsDisplay) {
        self.region.reveal(display);
    }
}

#[function_component(Statistics)]
pub fn statistics() -> Html {
    let phase = use_state(FlowPhase::default);
    let region = use_result_region::<StatisticsDisplay>();

    let on_load = {
        let phase = phase.clone();
        let region = region.clone();

        Callback::from(move |_: MouseEvent| {
            log::debug!("User requested dataset statistics");
            let phase = phase.clone();
            let mut view = StatsView { region: region.clone() };
            phase.set(FlowPhase::Submitted);

            wasm_bindgen_futures::spawn_local(async move {
                let transport = HttpTransport::from_settings();
                let separator = settings::get_settings().group_separator;
                let outcome = fetch_statistics(&transport).await;
                phase.set(render_statistics(&mut view, outcome, separator));
            });
        })
    };

    let display = region.content().cloned().unwrap_or_default();
    let stat = |id: &'static str, title: &'static str, value: String| {
        html! {
            <div class="stat-card">
                <div class="stat-title">{title}</div>
                <div class="stat-value" id={id}>{value}</div>
            </div>
        }
    };

    html! {
        <div class="card">
            <h2 class="card-title">{"Historical Statistics"}</h2>
            <p class="card-subtitle">{"Summary of the consumption data the model was trained on"}</p>

            <button type="button" class="btn btn-primary" onclick={on_load}>
                {"Load Statistics"}
                if phase.is_pending() {
                    <Loading />
                }
            </button>

            <div id="stats-result" class="result" ref={region.node()} style={region.style()}>
                <div class="stats-grid">
                    {stat("stat-mean", "Mean", display.mean)}
                    {stat("stat-median", "Median", display.median)}
                    {stat("stat-std", "Standard Deviation", display.std)}
                    {stat("stat-min", "Minimum", display.min)}
                    {stat("stat-max", "Maximum", display.max)}
                    {stat("stat-records", "Total Records", display.total_records)}
                </div>
            </div>
        </div>
    }
}
