//! Classification of downstream results.
//!
//! Some downstream APIs answer a request with "accepted, still processing"
//! (HTTP 202) and their clients surface that as an error value. Handlers must
//! report such a response as a qualified success, so every downstream error
//! is passed through [`is_accepted_outcome`] before being treated as a
//! failure.

use crate::ToolError;
use http::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

/// Marker error meaning the downstream service accepted the request and is
/// processing it asynchronously.
///
/// Downstream clients return this (possibly wrapped in further context) for
/// `202 Accepted` responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("job scheduled on downstream service; try again later")]
pub struct AcceptedError {
    /// Raw response body, if the service sent one.
    pub raw: Option<String>,
}

impl AcceptedError {
    /// Creates an accepted marker without a body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accepted marker carrying the raw response body.
    #[must_use]
    pub fn with_body(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

/// Non-success HTTP response returned by a downstream client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method} {url}: {} {message}", .status.as_u16())]
pub struct ResponseError {
    /// Request method.
    pub method: String,
    /// Request URL.
    pub url: String,
    /// Response status.
    pub status: StatusCode,
    /// Message extracted from the response body.
    pub message: String,
}

impl ResponseError {
    /// Creates a response error.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            status,
            message: message.into(),
        }
    }
}

/// Returns `true` if any error in the cause chain is an [`AcceptedError`].
///
/// `None` means "no error" and is never accepted.
///
/// # Example
///
/// ```
/// use toolgate_core::{is_accepted_outcome, AcceptedError};
///
/// let err = anyhow::Error::new(AcceptedError::new()).context("triggering workflow");
/// assert!(is_accepted_outcome(Some(err.as_ref())));
/// assert!(!is_accepted_outcome(None));
/// ```
#[must_use]
pub fn is_accepted_outcome(err: Option<&(dyn StdError + 'static)>) -> bool {
    let mut current = err;
    while let Some(err) = current {
        if err.is::<AcceptedError>() {
            return true;
        }
        current = err.source();
    }
    false
}

/// Result of a downstream call after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownstreamOutcome<T> {
    /// The call completed and produced a value.
    Completed(T),
    /// The call was accepted and continues asynchronously.
    Accepted,
}

impl<T> DownstreamOutcome<T> {
    /// Returns `true` for [`DownstreamOutcome::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the completed value, if any.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Accepted => None,
        }
    }
}

/// Classifies a downstream result.
///
/// Successful values become [`DownstreamOutcome::Completed`], accepted
/// markers anywhere in the error chain become [`DownstreamOutcome::Accepted`],
/// and every other error is wrapped as [`ToolError::Downstream`] under
/// `message`, keeping the original error as its source.
pub fn classify_downstream<T, E>(
    result: Result<T, E>,
    message: &str,
) -> Result<DownstreamOutcome<T>, ToolError>
where
    E: Into<anyhow::Error>,
{
    match result {
        Ok(value) => Ok(DownstreamOutcome::Completed(value)),
        Err(err) => {
            let err: anyhow::Error = err.into();
            if is_accepted_outcome(Some(err.as_ref())) {
                tracing::debug!(
                    operation = message,
                    "downstream accepted request for async processing"
                );
                return Ok(DownstreamOutcome::Accepted);
            }
            tracing::warn!(operation = message, error = %err, "downstream call failed");
            Err(ToolError::downstream(message, err))
        }
    }
}
