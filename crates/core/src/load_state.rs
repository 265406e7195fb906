//! The outcome of a fetch as seen by a UI layer
//!
//! A screen only ever needs four things: still loading, some records, no
//! records, or a message explaining what went wrong.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Message used when a failure carries no text of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// UI-facing state of a list load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum LoadState<T> {
    /// A load is in flight, or nothing has been loaded yet
    #[default]
    Loading,
    /// The load produced at least one record
    Success(T),
    /// The load succeeded with no records
    Empty,
    /// The load failed
    Error(String),
}

impl<T> LoadState<Vec<T>> {
    /// Map a fetch result into the state a screen renders
    ///
    /// An empty list is reported as [`LoadState::Empty`] rather than an empty
    /// success.
    pub fn from_result<E: Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Success(items),
            Err(e) => Self::error(e.to_string()),
        }
    }

    /// Number of records held, zero unless successful
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Success(items) => items.len(),
            _ => 0,
        }
    }

    /// True unless the state holds records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> LoadState<T> {
    /// Build an error state, substituting a generic message for blank text
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Error(UNKNOWN_ERROR_MESSAGE.to_string())
        } else {
            Self::Error(message)
        }
    }

    /// Whether a load is still pending
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether records were loaded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the load failed
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The loaded value, if any
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
