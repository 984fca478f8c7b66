//! Error taxonomy for the portal pipeline.
//!
//! Four failure kinds stay distinguishable internally (logs, tests); the
//! HTTP boundary collapses all of them into one uniform rejection so the
//! caller cannot tell a bad password from a portal outage.

use std::time::Duration;

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PortalError>;

/// Errors that can occur while authenticating against or scraping the portal.
#[derive(thiserror::Error, Debug)]
pub enum PortalError {
    /// Network-level failure reaching the portal (DNS, TLS, connect,
    /// read, or an error status). Not retried within one logical request.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Expected markup structure is missing — the login form or a data
    /// container the parsers rely on. Structural, non-retryable.
    #[error("parse error: {0}")]
    Parse(String),

    /// The portal explicitly rejected the submitted credentials.
    #[error("credentials rejected by the portal")]
    Authentication,

    /// The session was invalidated between page fetches: a data-view
    /// request came back rendering the login page.
    #[error("portal session expired mid-request")]
    SessionExpired,

    /// The whole pipeline (login plus fetches) exceeded its deadline.
    /// Transport-class, but kept separate so the per-request deadline
    /// shows up distinctly in logs.
    #[error("pipeline timed out after {0:?}")]
    Timeout(Duration),
}

impl PortalError {
    /// Stable classification label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            PortalError::Transport(_) => "transport",
            PortalError::Parse(_) => "parse",
            PortalError::Authentication => "authentication",
            PortalError::SessionExpired => "session_expired",
            PortalError::Timeout(_) => "timeout",
        }
    }
}
