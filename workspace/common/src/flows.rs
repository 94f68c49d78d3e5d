//! The three request flows.
//!
//! Each flow sends one request through a [`Transport`] and decodes the
//! reply. There is no retry and no timeout; rendering is a separate step
//! (see [`crate::view`]).

use tracing::{debug, info, instrument, warn};

use crate::api::{
    decode_reply, DailyRequest, DatasetStatistics, DayPrediction, Endpoint, HourPrediction,
    PredictionRequest, StatisticsReply,
};
use crate::error::FlowError;
use crate::transport::Transport;

/// Lifecycle of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitted,
    Displayed,
    AlertShown,
}

impl FlowPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, FlowPhase::Submitted)
    }

    /// Phase reached once the outcome of a submission has been rendered.
    pub fn settled<T>(outcome: &Result<T, FlowError>) -> Self {
        match outcome {
            Ok(_) => FlowPhase::Displayed,
            Err(_) => FlowPhase::AlertShown,
        }
    }
}

#[instrument(skip(transport))]
pub async fn predict_hour<T: Transport>(
    transport: &T,
    request: &PredictionRequest,
) -> Result<HourPrediction, FlowError> {
    let body = serde_json::to_value(request)
        .map_err(|e| FlowError::transport(format!("Failed to serialize request: {}", e)))?;
    let path = Endpoint::PredictDate.path();
    debug!("POST {}", path);

    let raw = transport.post_json(path, &body).await?;
    let outcome = decode_reply::<HourPrediction>(&raw);
    log_outcome(path, &outcome);
    outcome
}

#[instrument(skip(transport))]
pub async fn predict_day<T: Transport>(
    transport: &T,
    request: &DailyRequest,
) -> Result<DayPrediction, FlowError> {
    let body = serde_json::to_value(request)
        .map_err(|e| FlowError::transport(format!("Failed to serialize request: {}", e)))?;
    let path = Endpoint::PredictDay.path();
    debug!("POST {}", path);

    let raw = transport.post_json(path, &body).await?;
    let outcome = decode_reply::<DayPrediction>(&raw);
    log_outcome(path, &outcome);
    outcome
}

#[instrument(skip(transport))]
pub async fn fetch_statistics<T: Transport>(transport: &T) -> Result<DatasetStatistics, FlowError> {
    let path = Endpoint::Statistics.path();
    debug!("GET {}", path);

    let raw = transport.get(path).await?;
    let outcome = decode_reply::<StatisticsReply>(&raw).map(|reply| reply.statistics);
    log_outcome(path, &outcome);
    outcome
}

fn log_outcome<T>(path: &str, outcome: &Result<T, FlowError>) {
    match outcome {
        Ok(_) => info!("{} - Success", path),
        Err(e) => warn!("{} - {}", path, e),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport answering from a queue of canned replies and recording
    /// every call.
    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<String, FlowError>>>,
        pub calls: RefCell<Vec<(String, String, Option<Value>)>>,
    }

    impl ScriptedTransport {
        pub fn replying(replies: Vec<Result<&str, FlowError>>) -> Self {
            Self {
                replies: RefCell::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
                calls: RefCell::default(),
            }
        }

        fn next(&self) -> Result<String, FlowError> {
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FlowError::transport("no scripted reply")))
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn get(&self, path: &str) -> Result<String, FlowError> {
            self.calls
                .borrow_mut()
                .push(("GET".into(), path.into(), None));
            self.next()
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<String, FlowError> {
            self.calls
                .borrow_mut()
                .push(("POST".into(), path.into(), Some(body.clone())));
            self.next()
        }
    }
}
