// ABOUTME: Reasons a raw feed item could not be turned into a Summary.
// ABOUTME: Informational only; the extractor skips such items instead of failing.

use thiserror::Error;

/// Why an item was skipped during mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The item is not a JSON object (string, number, array, null).
    #[error("item is not an object")]
    NotAnObject,

    /// No title or name field carried a usable string.
    #[error("item has no title")]
    MissingTitle,

    /// No url or path field carried a usable string, or it normalized to nothing.
    #[error("item has no url")]
    MissingUrl,
}
