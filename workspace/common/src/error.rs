use thiserror::Error;

/// Failure of a single request/render cycle.
///
/// The `Display` output is exactly the text shown to the user in the
/// blocking alert, so views never format errors themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The backend answered with `success: false`.
    #[error("Error: {0}")]
    Application(String),

    /// The request never produced a usable answer: network failure,
    /// a body that is not JSON, or a success body missing fields.
    #[error("Network error: {0}")]
    Transport(String),

    /// A form field could not be turned into a request.
    #[error("Error: {0}")]
    InvalidInput(String),
}

impl FlowError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::Application(message.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_carries_the_kind_prefix() {
        assert_eq!(FlowError::application("bad date").to_string(), "Error: bad date");
        assert_eq!(
            FlowError::transport("connection refused").to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            FlowError::InvalidInput("Invalid date format".into()).to_string(),
            "Error: Invalid date format"
        );
    }
}
