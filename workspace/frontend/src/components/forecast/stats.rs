use common::DailyResultDisplay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub display: Option<DailyResultDisplay>,
}

/// Daily total and hourly average of the latest forecast
#[function_component(ForecastStats)]
pub fn forecast_stats(props: &Props) -> Html {
    let display = props.display.clone().unwrap_or_default();

    html! {
        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-title">{"Total Daily Consumption"}</div>
                <div class="stat-value" id="total-daily">{display.total_daily}</div>
            </div>
            <div class="stat-card">
                <div class="stat-title">{"Average Hourly Consumption"}</div>
                <div class="stat-value" id="avg-hourly">{display.average_hourly}</div>
            </div>
        </div>
    }
}
