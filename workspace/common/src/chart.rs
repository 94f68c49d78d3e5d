//! Daily consumption line chart and the slot that owns its live instance.

use crate::api::DayPrediction;
use crate::converters::hour_label;

/// Line colour of the consumption series.
pub const LINE_COLOR: &str = "#2563eb";
/// Area fill under the consumption series.
pub const FILL_COLOR: &str = "rgba(37, 99, 235, 0.1)";
pub const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";
pub const FONT_FAMILY: &str = "'Inter', sans-serif";

/// Everything needed to draw the daily chart, independent of the
/// charting library.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub series_label: String,
    pub x_title: String,
    pub y_title: String,
    /// One label per point, in the order the backend returned them.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub line_color: &'static str,
    pub fill_color: &'static str,
    pub line_width: f64,
    /// Spline smoothing; zero draws straight segments.
    pub smoothing: f64,
    pub point_radius: f64,
}

impl LineChart {
    pub fn daily(reply: &DayPrediction) -> Self {
        let (labels, values) = reply
            .hourly_predictions
            .iter()
            .map(|p| (hour_label(p.hour), p.consumption))
            .unzip();

        Self {
            title: format!(
                "Hourly Consumption Prediction - {} ({})",
                reply.date, reply.day_name
            ),
            series_label: format!("Predicted Consumption ({})", reply.unit),
            x_title: "Hour of Day".to_string(),
            y_title: format!("Consumption ({})", reply.unit),
            labels,
            values,
            line_color: LINE_COLOR,
            fill_color: FILL_COLOR,
            line_width: 3.0,
            smoothing: 1.0,
            point_radius: 4.0,
        }
    }
}

/// A charting library able to draw onto one fixed render target.
pub trait ChartBackend {
    /// Handle to a drawn chart, released through [`ChartBackend::destroy`].
    type Chart;

    fn create(&mut self, chart: &LineChart) -> Result<Self::Chart, String>;

    fn destroy(&mut self, chart: Self::Chart);
}

/// Owns at most one live chart on a render target.
///
/// Any previous chart is destroyed before a new one is created, so
/// repeated draws never stack instances on the same canvas.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    live: Option<B::Chart>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, live: None }
    }

    pub fn replace(&mut self, chart: &LineChart) -> Result<(), String> {
        self.clear();
        let drawn = self.backend.create(chart)?;
        self.live = Some(drawn);
        tracing::debug!(points = chart.labels.len(), "chart drawn");
        Ok(())
    }

    /// Destroys the live chart, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.live.take() {
            tracing::trace!("destroying previous chart");
            self.backend.destroy(previous);
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Backend that counts live charts and remembers what it drew.
    #[derive(Debug, Default)]
    pub struct CountingBackend {
        pub created: usize,
        pub destroyed: usize,
        pub live: usize,
        pub max_live: usize,
        pub drawn: Vec<LineChart>,
        pub fail_next: bool,
    }

    impl ChartBackend for CountingBackend {
        type Chart = usize;

        fn create(&mut self, chart: &LineChart) -> Result<usize, String> {
            if self.fail_next {
                self.fail_next = false;
                return Err("canvas unavailable".to_string());
            }
            self.created += 1;
            self.live += 1;
            self.max_live = self.max_live.max(self.live);
            self.drawn.push(chart.clone());
            Ok(self.created)
        }

        fn destroy(&mut self, _chart: usize) {
            self.destroyed += 1;
            self.live -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingBackend;
    use super::*;
    use crate::api::HourlyPoint;

    fn reply(points: Vec<HourlyPoint>) -> DayPrediction {
        DayPrediction {
            date: "2024-03-07".into(),
            day_name: "Thursday".into(),
            hourly_predictions: points,
            total_daily: 22.5,
            average_hourly: 11.25,
            unit: "MWh".into(),
        }
    }

    #[test]
    fn labels_follow_reply_order() {
        let chart = LineChart::daily(&reply(vec![
            HourlyPoint { hour: 0, consumption: 10.0 },
            HourlyPoint { hour: 1, consumption: 12.5 },
        ]));
        assert_eq!(chart.labels, vec!["0:00", "1:00"]);
        assert_eq!(chart.values, vec![10.0, 12.5]);
    }

    #[test]
    fn unsorted_points_are_not_reordered() {
        let chart = LineChart::daily(&reply(vec![
            HourlyPoint { hour: 5, consumption: 1.0 },
            HourlyPoint { hour: 2, consumption: 2.0 },
        ]));
        assert_eq!(chart.labels, vec!["5:00", "2:00"]);
    }

    #[test]
    fn titles_embed_date_and_unit() {
        let chart = LineChart::daily(&reply(vec![]));
        assert_eq!(chart.title, "Hourly Consumption Prediction - 2024-03-07 (Thursday)");
        assert_eq!(chart.series_label, "Predicted Consumption (MWh)");
        assert_eq!(chart.x_title, "Hour of Day");
        assert_eq!(chart.y_title, "Consumption (MWh)");
    }

    #[test]
    fn replace_destroys_previous_chart() {
        let mut slot = ChartSlot::new(CountingBackend::default());
        let chart = LineChart::daily(&reply(vec![]));

        slot.replace(&chart).unwrap();
        slot.replace(&chart).unwrap();

        assert_eq!(slot.backend().created, 2);
        assert_eq!(slot.backend().destroyed, 1);
        assert_eq!(slot.backend().max_live, 1);
        assert!(slot.is_live());
    }

    #[test]
    fn clear_on_empty_slot_is_a_no_op() {
        let mut slot = ChartSlot::new(CountingBackend::default());
        slot.clear();
        slot.clear();
        assert_eq!(slot.backend().destroyed, 0);
        assert!(!slot.is_live());
    }

    #[test]
    fn failed_draw_leaves_slot_empty() {
        let mut slot = ChartSlot::new(CountingBackend::default());
        let chart = LineChart::daily(&reply(vec![]));
        slot.replace(&chart).unwrap();

        slot.backend.fail_next = true;
        assert!(slot.replace(&chart).is_err());
        assert!(!slot.is_live());
        assert_eq!(slot.backend().live, 0);
    }
}
