//! Error Types
//!
//! Client-side validation failures and report-service failures.

use thiserror::Error;

/// Rejected before any request is made. `Display` is the user message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all meal details")]
    IncompleteMeal,
    #[error("At least one meal is required")]
    LastMeal,
}

/// Failure talking to the report service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status; `message` is the body's message, if it had one
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },
    /// 2xx response with `success: false`
    #[error("rejected by server")]
    Rejected { message: Option<String> },
    /// Request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Response body did not match the expected schema
    #[error("invalid response: {0}")]
    Decode(String),
    /// No token/user id in the session
    #[error("not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// Message the server attached, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } | ApiError::Rejected { message } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }

    /// Message to show the user.
    ///
    /// Server messages win. Otherwise `rejected` is used for `success: false`
    /// responses and `failed` for everything else.
    pub fn user_message(&self, fallbacks: &Fallbacks) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            ApiError::Rejected { .. } => fallbacks.rejected.to_string(),
            _ => fallbacks.failed.to_string(),
        }
    }
}

/// Per-operation fallback messages
#[derive(Debug, Clone, Copy)]
pub struct Fallbacks {
    pub rejected: &'static str,
    pub failed: &'static str,
}

pub const CREATE_FALLBACKS: Fallbacks = Fallbacks {
    rejected: "Failed to create report",
    failed: "Error submitting meals",
};

pub const FETCH_FALLBACKS: Fallbacks = Fallbacks {
    rejected: "Failed to fetch reports",
    failed: "Error fetching reports",
};

pub const DELETE_FALLBACKS: Fallbacks = Fallbacks {
    rejected: "Failed to delete report",
    failed: "Error deleting report",
};
