//! View bindings and the rendering step of each flow.
//!
//! A view owns the result region of one flow. `show_*` fills the region,
//! reveals it and scrolls it into view. `alert` blocks the user with a
//! message. A failed submission never touches the result region.

use crate::api::{DatasetStatistics, DayPrediction, HourPrediction, PredictionRequest};
use crate::chart::{ChartBackend, ChartSlot, LineChart};
use crate::converters::{DailyResultDisplay, SingleResultDisplay, StatisticsDisplay};
use crate::error::FlowError;
use crate::flows::FlowPhase;

pub trait Alerts {
    fn alert(&mut self, message: &str);
}

pub trait SingleResultView: Alerts {
    fn show_single(&mut self, display: SingleResultDisplay);
}

pub trait DailyResultView: Alerts {
    fn show_daily(&mut self, display: DailyResultDisplay);

    /// Hides the region; totals without their chart are not shown.
    fn hide_daily(&mut self);
}

pub trait StatisticsView: Alerts {
    fn show_statistics(&mut self, display: StatisticsDisplay);
}

pub fn render_single<V: SingleResultView + ?Sized>(
    view: &mut V,
    request: &PredictionRequest,
    outcome: Result<HourPrediction, FlowError>,
) -> FlowPhase {
    match outcome {
        Ok(reply) => {
            view.show_single(SingleResultDisplay::new(&reply, request.hour));
            FlowPhase::Displayed
        }
        Err(e) => alert(view, &e),
    }
}

/// Renders the daily outcome, replacing whatever chart the slot holds.
pub fn render_daily<V, B>(
    view: &mut V,
    chart: &mut ChartSlot<B>,
    outcome: Result<DayPrediction, FlowError>,
) -> FlowPhase
where
    V: DailyResultView + ?Sized,
    B: ChartBackend,
{
    let reply = match outcome {
        Ok(reply) => reply,
        Err(e) => return alert(view, &e),
    };

    if let Err(e) = chart.replace(&LineChart::daily(&reply)) {
        // The previous chart is already gone
        view.hide_daily();
        return alert(view, &FlowError::Transport(e));
    }

    view.show_daily(DailyResultDisplay::from(&reply));
    FlowPhase::Displayed
}

pub fn render_statistics<V: StatisticsView + ?Sized>(
    view: &mut V,
    outcome: Result<DatasetStatistics, FlowError>,
    separator: char,
) -> FlowPhase {
    match outcome {
        Ok(stats) => {
            view.show_statistics(StatisticsDisplay::new(&stats, separator));
            FlowPhase::Displayed
        }
        Err(e) => alert(view, &e),
    }
}

fn alert<V: Alerts + ?Sized>(view: &mut V, error: &FlowError) -> FlowPhase {
    tracing::error!("{}", error);
    view.alert(&error.to_string());
    FlowPhase::AlertShown
}
