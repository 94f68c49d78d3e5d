//! Client core of the energy forecast app.
//!
//! Everything here compiles for both native targets and `wasm32`: the wire
//! shapes of the prediction backend, the three request flows, the view
//! bindings they render into, and the owned chart slot. The browser
//! frontend supplies a [`Transport`], views and a [`ChartBackend`]; tests
//! supply in-memory ones.

pub mod api;
pub mod chart;
pub mod converters;
pub mod error;
pub mod flows;
pub mod forms;
pub mod tabs;
pub mod transport;
pub mod view;

pub use api::{
    DailyRequest, DatasetStatistics, DayPrediction, Endpoint, HourPrediction, HourlyPoint,
    PredictionRequest, StatisticsReply,
};
pub use chart::{ChartBackend, ChartSlot, LineChart};
pub use converters::{DailyResultDisplay, SingleResultDisplay, StatisticsDisplay};
pub use error::FlowError;
pub use flows::{fetch_statistics, predict_day, predict_hour, FlowPhase};
pub use tabs::{TabId, TabSet};
pub use transport::Transport;
pub use view::{
    render_daily, render_single, render_statistics, Alerts, DailyResultView, SingleResultView,
    StatisticsView,
};
