// ABOUTME: Error type for catalog and detail fetches.
// ABOUTME: Separates HTTP status failures, the two empty-feed kinds and cancellation from transport faults.

use thiserror::Error;

/// Errors returned by [`crate::Client`] operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("{context}: HTTP status {status}")]
    Http { status: u16, context: String },

    /// The feed decoded fine but its item list had no elements.
    #[error("catalog feed is empty: no items found")]
    EmptyFeed,

    /// The feed listed entries but none had a usable title and url.
    #[error("catalog feed has no usable entries ({discarded} discarded)")]
    NoMappableEntries { discarded: usize },

    /// The caller canceled the operation before it completed.
    #[error("{context}: canceled")]
    Canceled { context: String },

    /// The request could not be sent or the body could not be read.
    #[error("{context}: request failed: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not valid JSON.
    #[error("{context}: invalid JSON body: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base url and endpoint path do not form a valid url.
    #[error("invalid endpoint url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl FetchError {
    /// Creates an Http error for a non-success response.
    pub fn http(status: u16, context: impl Into<String>) -> Self {
        FetchError::Http {
            status,
            context: context.into(),
        }
    }

    /// Creates a Canceled error for the given operation.
    pub fn canceled(context: impl Into<String>) -> Self {
        FetchError::Canceled {
            context: context.into(),
        }
    }

    /// Creates a Transport error from an underlying reqwest error.
    pub fn transport(context: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::Transport {
            context: context.into(),
            source,
        }
    }

    /// Creates a Decode error from an underlying serde_json error.
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        FetchError::Decode {
            context: context.into(),
            source,
        }
    }

    /// Returns true if this is an Http error.
    pub fn is_http(&self) -> bool {
        matches!(self, FetchError::Http { .. })
    }

    /// Returns true for both empty-feed kinds.
    pub fn is_empty_feed(&self) -> bool {
        matches!(
            self,
            FetchError::EmptyFeed | FetchError::NoMappableEntries { .. }
        )
    }

    /// Returns true if the operation was canceled. Such errors are not failures
    /// and should not be reported to users.
    pub fn is_canceled(&self) -> bool {
        matches!(self, FetchError::Canceled { .. })
    }

    /// The HTTP status carried by an Http error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
