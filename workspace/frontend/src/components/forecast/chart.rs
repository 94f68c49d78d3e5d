use common::chart::{FONT_FAMILY, GRID_COLOR};
use common::{ChartBackend, LineChart};
use plotly::common::{Fill, Font, Line, LineShape, Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, Legend};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;

/// Element id of the daily chart container
pub const DAILY_CHART_ID: &str = "dailyChart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Plotly", "Plots"])]
    fn resize(div_id: &str) -> Result<JsValue, JsValue>;
}

/// Re-fits the plot in `div_id` to its container, which matters when the
/// plot was drawn while the container was hidden.
pub fn fit_to_container(div_id: &str) {
    if let Err(e) = resize(div_id) {
        log::warn!("Failed to resize plot in #{}: {:?}", div_id, e);
    }
}

/// Draws line charts into one fixed container with Plotly
#[derive(Debug, Clone)]
pub struct PlotlyBackend {
    div_id: String,
}

/// A plot currently attached to its container
#[derive(Debug)]
pub struct PlotlyChart {
    div_id: String,
}

impl PlotlyBackend {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self { div_id: div_id.into() }
    }
}

impl ChartBackend for PlotlyBackend {
    type Chart = PlotlyChart;

    fn create(&mut self, chart: &LineChart) -> Result<PlotlyChart, String> {
        let trace = Scatter::new(chart.labels.clone(), chart.values.clone())
            .mode(Mode::LinesMarkers)
            .name(chart.series_label.as_str())
            .line(
                Line::new()
                    .color(chart.line_color)
                    .width(chart.line_width)
                    .shape(LineShape::Spline)
                    .smoothing(chart.smoothing),
            )
            .marker(Marker::new().size((chart.point_radius * 2.0) as usize).color(chart.line_color))
            .fill(Fill::ToZeroY)
            .fill_color(chart.fill_color);

        let layout = Layout::new()
            .title(Title::with_text(chart.title.as_str()))
            .font(Font::new().family(FONT_FAMILY))
            .show_legend(true)
            .legend(Legend::new().orientation(Orientation::Horizontal).y(1.1))
            .x_axis(
                Axis::new()
                    .title(Title::with_text(chart.x_title.as_str()))
                    .grid_color(GRID_COLOR),
            )
            .y_axis(
                Axis::new()
                    .title(Title::with_text(chart.y_title.as_str()))
                    .grid_color(GRID_COLOR),
            )
            .height(400);

        let data_js = js_sys::Array::new();
        data_js.push(&to_js(&trace)?);
        let layout_js = to_js(&layout)?;
        let config_js = js_sys::JSON::parse(r#"{"responsive":true}"#)
            .map_err(|e| format!("Failed to build chart config: {:?}", e))?;

        log::debug!("Plotting {} points into #{}", chart.values.len(), self.div_id);
        new_plot(&self.div_id, data_js.into(), layout_js, config_js)
            .map_err(|e| format!("Failed to draw chart: {:?}", e))?;

        Ok(PlotlyChart {
            div_id: self.div_id.clone(),
        })
    }

    fn destroy(&mut self, chart: PlotlyChart) {
        log::trace!("Purging plot in #{}", chart.div_id);
        if let Err(e) = purge(&chart.div_id) {
            log::error!("Failed to purge plot in #{}: {:?}", chart.div_id, e);
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize chart: {}", e))?;
    js_sys::JSON::parse(&json).map_err(|e| format!("Failed to parse chart JSON: {:?}", e))
}
