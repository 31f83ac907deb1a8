use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum RecapError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("No concluded orders found for {year}")]
    EmptyResult { year: i32 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse failure categories, one user-facing message each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Auth,
    EmptyResult,
    Internal,
}

impl RecapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecapError::Http(_) | RecapError::Json(_) | RecapError::Timestamp { .. } => {
                ErrorCategory::Transport
            }
            RecapError::Auth(_) => ErrorCategory::Auth,
            RecapError::EmptyResult { .. } => ErrorCategory::EmptyResult,
            RecapError::InvalidArgument(_) => ErrorCategory::Internal,
        }
    }

    /// Message safe to show to an end user. The technical detail stays in
    /// the `Display` output, which belongs in the logs.
    pub fn user_message(&self) -> String {
        match self {
            RecapError::EmptyResult { year } => format!("No orders found for {year}."),
            other => other.category().to_string(),
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorCategory::Transport => {
                "Failed to fetch order data. Check that the token is correct."
            }
            ErrorCategory::Auth => "Please provide a valid token.",
            ErrorCategory::EmptyResult => "No orders found for this year.",
            ErrorCategory::Internal => "Unexpected error while analyzing orders.",
        };
        f.write_str(msg)
    }
}

pub type Result<T> = std::result::Result<T, RecapError>;
