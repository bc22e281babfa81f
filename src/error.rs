//! Error types
//!
//! Every variant here is fatal: it aborts the run and maps to a non-zero
//! exit code. Best-effort steps report degradation as values instead
//! (see [`crate::core::models::NarrativeQuality`] and
//! [`crate::core::models::Delivery`]).

use thiserror::Error;

/// External service an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// GitHub REST API
    GitHub,
    /// Notion API
    Notion,
    /// Slack incoming webhook
    Slack,
    /// Gemini generative language API
    Gemini,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GitHub => write!(f, "GitHub"),
            Self::Notion => write!(f, "Notion"),
            Self::Slack => write!(f, "Slack"),
            Self::Gemini => write!(f, "Gemini"),
        }
    }
}

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request never got a response
    #[error("{service} request failed: {source}")]
    Transport {
        /// Service that was called
        service: Service,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status
    #[error("{service} returned {status}: {body}")]
    Upstream {
        /// Service that was called
        service: Service,
        /// HTTP status code
        status: u16,
        /// Response body (clipped)
        body: String,
    },

    /// Response body did not have the expected shape
    #[error("{service} response could not be decoded: {message}")]
    Decode {
        /// Service that was called
        service: Service,
        /// What went wrong
        message: String,
    },

    /// Webhook payload could not be understood
    #[error("Invalid event payload: {0}")]
    Event(String),

    /// Filesystem error (config or event file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Transport error helper
    #[must_use]
    pub fn transport(service: Service, source: reqwest::Error) -> Self {
        Self::Transport { service, source }
    }

    /// Decode error helper
    #[must_use]
    pub fn decode(service: Service, message: impl Into<String>) -> Self {
        Self::Decode {
            service,
            message: message.into(),
        }
    }

    /// Upstream error helper; the body is clipped to keep logs readable
    #[must_use]
    pub fn upstream(service: Service, status: u16, body: &str) -> Self {
        Self::Upstream {
            service,
            status,
            body: crate::text::truncate_chars(body, 500),
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;
